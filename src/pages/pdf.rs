//! PDF Export Page

use leptos::prelude::*;

/// Export landing page; the export itself lives outside this build
#[component]
pub fn PdfPage() -> impl IntoView {
    view! {
        <div class="page-pdf">
            <h2>"Pokemon to pdf"</h2>
            <p class="empty-state">"Export is not available in this build."</p>
        </div>
    }
}
