//! Pokemon Endpoint Bindings
//!
//! Frontend bindings for the remote pokemon collection.

use serde::Serialize;

use super::{json_body, send};
use crate::models::Pokemon;

/// Remote collection endpoint
const API_URL: &str = "http://localhost:3001/api/pokemons";

/// Request body for create and update calls
#[derive(Serialize)]
pub struct SavePokemonArgs<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub pokemon_type: &'a str,
}

/// Outcome of a create or update call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Record written; the caller should reload the collection
    Saved,
    /// Backend rejected the name as a duplicate
    Duplicate,
}

impl SaveOutcome {
    /// The backend signals a duplicate name with a content-less 204
    /// instead of an error status
    pub fn from_status(status: u16) -> Self {
        if status == 204 {
            SaveOutcome::Duplicate
        } else {
            SaveOutcome::Saved
        }
    }
}

pub async fn list_pokemons() -> Result<Vec<Pokemon>, String> {
    let response = send("GET", API_URL, None).await?;
    json_body(&response).await
}

pub async fn create_pokemon(args: &SavePokemonArgs<'_>) -> Result<SaveOutcome, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let response = send("POST", API_URL, Some(body)).await?;
    Ok(SaveOutcome::from_status(response.status()))
}

pub async fn update_pokemon(id: &str, args: &SavePokemonArgs<'_>) -> Result<SaveOutcome, String> {
    let body = serde_json::to_string(args).map_err(|e| e.to_string())?;
    let response = send("PUT", &format!("{API_URL}/{id}"), Some(body)).await?;
    Ok(SaveOutcome::from_status(response.status()))
}

pub async fn delete_pokemon(id: &str) -> Result<(), String> {
    let _ = send("DELETE", &format!("{API_URL}/{id}"), None).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_204_means_duplicate() {
        assert_eq!(SaveOutcome::from_status(204), SaveOutcome::Duplicate);
    }

    #[test]
    fn test_other_success_statuses_mean_saved() {
        assert_eq!(SaveOutcome::from_status(200), SaveOutcome::Saved);
        assert_eq!(SaveOutcome::from_status(201), SaveOutcome::Saved);
    }

    #[test]
    fn test_save_body_contains_only_name_and_type() {
        let args = SavePokemonArgs {
            name: "Pika",
            pokemon_type: "Electric",
        };
        let body = serde_json::to_string(&args).unwrap();
        assert_eq!(body, r#"{"name":"Pika","type":"Electric"}"#);
    }
}
