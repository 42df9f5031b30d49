//! Bestiary Frontend App
//!
//! App shell: navigation header wrapping the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Header;
use crate::pages::{HomePage, PdfPage, PokedexPage, PokemonPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="main-content">
                <Routes fallback=|| view! { <p class="empty-state">"Not found."</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/pokemon") view=PokemonPage />
                    <Route path=path!("/pokedex") view=PokedexPage />
                    <Route path=path!("/pokemon/pdf") view=PdfPage />
                </Routes>
            </main>
        </Router>
    }
}
