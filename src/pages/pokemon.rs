//! Pokemon CRUD Page
//!
//! Collection manager: owns the working set, the form draft, and the
//! edit/loading state. Every successful mutation re-fetches the full
//! list, so the local copy never drifts from the server.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, SaveOutcome, SavePokemonArgs};
use crate::components::{PokemonCard, PokemonForm};
use crate::models::Pokemon;
use crate::validate::validate_draft;

/// CRUD page over the remote pokemon collection
#[component]
pub fn PokemonPage() -> impl IntoView {
    let (pokemons, set_pokemons) = signal(Vec::<Pokemon>::new());
    let (draft_name, set_draft_name) = signal(String::new());
    let (draft_type, set_draft_type) = signal(String::new());
    let (editing, set_editing) = signal::<Option<Pokemon>>(None);
    let (name_error, set_name_error) = signal::<Option<String>>(None);
    let (type_error, set_type_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load the collection on mount and after every mutation
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::list_pokemons().await {
                Ok(list) => set_pokemons.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("[Pokemon] Error fetching data: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    let reload = move || set_reload_trigger.update(|v| *v += 1);

    let clear_draft = move || {
        set_draft_name.set(String::new());
        set_draft_type.set(String::new());
    };

    // Surface the field messages and report overall pass/fail
    let run_validation = move || {
        let errors = validate_draft(&draft_name.get(), &draft_type.get());
        let clean = errors.is_clean();
        set_name_error.set(errors.name);
        set_type_error.set(errors.pokemon_type);
        clean
    };

    let handle_add = move || {
        if !run_validation() {
            return;
        }
        let name = draft_name.get();
        let pokemon_type = draft_type.get();
        set_saving.set(true);
        spawn_local(async move {
            let args = SavePokemonArgs {
                name: &name,
                pokemon_type: &pokemon_type,
            };
            match api::create_pokemon(&args).await {
                Ok(SaveOutcome::Duplicate) => alert_duplicate(),
                Ok(SaveOutcome::Saved) => {
                    clear_draft();
                    reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Pokemon] Error adding pokemon: {}", e).into());
                }
            }
            set_saving.set(false);
        });
    };

    let handle_update = move || {
        let Some(current) = editing.get() else {
            return;
        };
        if !run_validation() {
            return;
        }
        let name = draft_name.get();
        let pokemon_type = draft_type.get();
        set_saving.set(true);
        spawn_local(async move {
            let args = SavePokemonArgs {
                name: &name,
                pokemon_type: &pokemon_type,
            };
            match api::update_pokemon(&current.id, &args).await {
                Ok(SaveOutcome::Duplicate) => alert_duplicate(),
                Ok(SaveOutcome::Saved) => {
                    set_editing.set(None);
                    clear_draft();
                    reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[Pokemon] Error updating pokemon: {}", e).into());
                }
            }
            set_saving.set(false);
        });
    };

    // Copy the card's fields into the draft; nothing is sent yet
    let handle_edit = move |pokemon: Pokemon| {
        set_draft_name.set(pokemon.name.clone());
        set_draft_type.set(pokemon.pokemon_type.clone());
        set_editing.set(Some(pokemon));
    };

    let handle_cancel = move || {
        set_editing.set(None);
        clear_draft();
    };

    // No confirmation step; the list reloads whether or not the call failed
    let handle_delete = move |id: String| {
        spawn_local(async move {
            if let Err(e) = api::delete_pokemon(&id).await {
                web_sys::console::error_1(&format!("[Pokemon] Error deleting pokemon: {}", e).into());
            }
            reload();
        });
    };

    view! {
        <div class="pokemon-page">
            <h2 class="page-title">"Pokemon CRUD"</h2>

            <PokemonForm
                draft_name=draft_name
                set_draft_name=set_draft_name
                draft_type=draft_type
                set_draft_type=set_draft_type
                name_error=name_error
                type_error=type_error
                editing=editing
                on_add=handle_add
                on_update=handle_update
                on_cancel=handle_cancel
            />

            {move || if loading.get() || saving.get() {
                view! {
                    <div class="spinner-wrap">
                        <div class="spinner"></div>
                    </div>
                }.into_any()
            } else if pokemons.get().is_empty() {
                view! {
                    <p class="empty-state">"No pokemons found."</p>
                }.into_any()
            } else {
                view! {
                    <div class="pokemon-grid">
                        <For
                            each=move || pokemons.get()
                            key=|p| (p.id.clone(), p.name.clone(), p.pokemon_type.clone())
                            children=move |p| {
                                view! {
                                    <PokemonCard
                                        pokemon=p
                                        on_edit=handle_edit
                                        on_delete=handle_delete
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

// The backend signals a duplicate with 204; surface it as a blocking dialog
fn alert_duplicate() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Pokemon duplicate");
    }
}
