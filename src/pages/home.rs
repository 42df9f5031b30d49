//! Home Page

use leptos::prelude::*;

/// Landing page
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page-home">
            <h2>"Welcome to the Bestiary"</h2>
            <p>"Browse and manage the pokemon collection from the menu."</p>
        </div>
    }
}
