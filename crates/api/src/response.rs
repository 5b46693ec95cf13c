//! Shared response envelope types for API handlers.
//!
//! Collection responses use a `{ "data": ... }` envelope. Use
//! [`DataResponse`] instead of ad-hoc `serde_json::json!({ "data": ... })`.

use charforge_core::abilities::AbilityModifiers;
use charforge_db::models::character::Character;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A stored character plus its display-ready ability modifiers.
///
/// Modifiers are derived on the way out and never stored.
#[derive(Debug, Serialize)]
pub struct CharacterResponse {
    #[serde(flatten)]
    pub character: Character,
    pub modifiers: AbilityModifiers,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        let modifiers = character.abilities().modifiers();
        Self {
            character,
            modifiers,
        }
    }
}

/// Convert a list of rows into response objects.
pub fn character_list(rows: Vec<Character>) -> DataResponse<Vec<CharacterResponse>> {
    DataResponse {
        data: rows.into_iter().map(CharacterResponse::from).collect(),
    }
}
