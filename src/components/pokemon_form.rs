//! Pokemon Form Component
//!
//! Draft form for creating and editing pokemons, with inline field errors.
//! The submit button doubles as Add/Update depending on edit state.

use leptos::prelude::*;

use crate::models::Pokemon;

/// Create/update form over the shared draft
#[component]
pub fn PokemonForm(
    draft_name: ReadSignal<String>,
    set_draft_name: WriteSignal<String>,
    draft_type: ReadSignal<String>,
    set_draft_type: WriteSignal<String>,
    name_error: ReadSignal<Option<String>>,
    type_error: ReadSignal<Option<String>>,
    editing: ReadSignal<Option<Pokemon>>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_update: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if editing.get().is_some() {
            on_update.run(());
        } else {
            on_add.run(());
        }
    };

    view! {
        <form class="pokemon-form" on:submit=submit>
            <div class="form-field">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft_name.get()
                    on:input=move |ev| set_draft_name.set(event_target_value(&ev))
                />
                {move || name_error.get().map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-field">
                <input
                    type="text"
                    placeholder="Type"
                    prop:value=move || draft_type.get()
                    on:input=move |ev| set_draft_type.set(event_target_value(&ev))
                />
                {move || type_error.get().map(|msg| view! {
                    <span class="field-error">{msg}</span>
                })}
            </div>

            <div class="form-actions">
                <button type="submit">
                    {move || if editing.get().is_some() { "Update" } else { "Add" }}
                </button>
                {move || editing.get().map(|_| view! {
                    <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}
