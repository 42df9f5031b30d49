//! Navigation Header Component
//!
//! App bar with a dropdown menu over the fixed route table. Navigation
//! itself is delegated to the router.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Menu entries as (label, destination path)
const MENU_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Pokemon", "/pokemon"),
    ("Pokedex", "/pokedex"),
    ("Pokemon to pdf", "/pokemon/pdf"),
];

/// App bar with title and dropdown navigation menu
#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let navigate = use_navigate();

    view! {
        <header class="app-bar">
            <a href="/" class="app-title">"Bestiary"</a>
            <button
                class="menu-btn"
                aria-label="menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "\u{2630}"
            </button>
            <Show when=move || menu_open.get()>
                <nav class="app-menu">
                    {MENU_ITEMS.iter().map(|(label, path)| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="menu-item"
                                on:click=move |_| {
                                    navigate(path, Default::default());
                                    set_menu_open.set(false);
                                }
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </nav>
            </Show>
        </header>
    }
}
