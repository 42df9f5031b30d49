//! Pokemon Card Component
//!
//! Single record card with image, fields, and edit/delete actions.

use leptos::prelude::*;

use crate::models::Pokemon;

/// One pokemon in the grid
#[component]
pub fn PokemonCard(
    pokemon: Pokemon,
    #[prop(into)] on_edit: Callback<Pokemon>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let edit_target = pokemon.clone();
    let delete_id = pokemon.id.clone();

    view! {
        <div class="pokemon-card">
            <img class="pokemon-image" src=pokemon.image_url.clone() alt=pokemon.name.clone() />
            <h3 class="pokemon-name">{pokemon.name.clone()}</h3>
            <p class="pokemon-type">{pokemon.pokemon_type.clone()}</p>
            <div class="card-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
