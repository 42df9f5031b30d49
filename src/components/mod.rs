//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod pokemon_card;
mod pokemon_form;

pub use header::Header;
pub use pokemon_card::PokemonCard;
pub use pokemon_form::PokemonForm;
