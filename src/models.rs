//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Pokemon record as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Server-assigned identifier, opaque to the client
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_deserializes_from_server_json() {
        let json = r#"{
            "_id": "65a1f0c2d4e8b9a3c5f7e123",
            "name": "Pikachu",
            "type": "Electric",
            "imageUrl": "https://img.pokemondb.net/artwork/pikachu.jpg"
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.id, "65a1f0c2d4e8b9a3c5f7e123");
        assert_eq!(pokemon.name, "Pikachu");
        assert_eq!(pokemon.pokemon_type, "Electric");
        assert_eq!(pokemon.image_url, "https://img.pokemondb.net/artwork/pikachu.jpg");
    }

    #[test]
    fn pokemon_list_deserializes() {
        let json = r#"[
            {"_id": "a1", "name": "Bulbasaur", "type": "Grass", "imageUrl": "b.jpg"},
            {"_id": "a2", "name": "Charmander", "type": "Fire", "imageUrl": "c.jpg"}
        ]"#;

        let pokemons: Vec<Pokemon> = serde_json::from_str(json).unwrap();

        assert_eq!(pokemons.len(), 2);
        assert_eq!(pokemons[0].name, "Bulbasaur");
        assert_eq!(pokemons[1].id, "a2");
    }
}
