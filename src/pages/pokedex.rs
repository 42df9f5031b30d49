//! Pokedex Page

use leptos::prelude::*;

/// Read-only pokedex view, not yet built out
#[component]
pub fn PokedexPage() -> impl IntoView {
    view! {
        <div class="page-pokedex">
            <h2>"Pokedex"</h2>
            <p class="empty-state">"Nothing here yet."</p>
        </div>
    }
}
