//! Handlers for the `/characters` JSON resource.
//!
//! Every write goes through [`ValidCharacter::new`], so a request that breaks
//! a rule is answered with a 400 listing all violations and nothing is stored.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use charforge_core::catalog::{CLASSES, RACES};
use charforge_core::character::{CharacterDraft, ValidCharacter};
use charforge_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::NameSearchParams;
use crate::response::{character_list, CharacterResponse, DataResponse};
use crate::state::AppState;

/// Race and class choices offered by the forms.
#[derive(Debug, Serialize)]
pub struct CharacterOptions {
    pub races: &'static [&'static str],
    pub classes: &'static [&'static str],
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CharacterResponse>>>> {
    let characters = state.store.list().await?;
    Ok(Json(character_list(characters)))
}

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CharacterDraft>,
) -> AppResult<(StatusCode, Json<CharacterResponse>)> {
    let valid = ValidCharacter::new(input)?;
    let character = state.store.create(&valid).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(character.into())))
}

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterResponse>> {
    let character = state
        .store
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(id))?;
    Ok(Json(character.into()))
}

/// PUT /api/v1/characters/{id}
///
/// Full replacement: omitted fields fall back to their defaults.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CharacterDraft>,
) -> AppResult<Json<CharacterResponse>> {
    let valid = ValidCharacter::new(input)?;
    let character = state
        .store
        .update(id, &valid)
        .await?
        .ok_or_else(|| AppError::not_found(id))?;
    tracing::info!(character_id = id, "Character updated");
    Ok(Json(character.into()))
}

/// DELETE /api/v1/characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if state.store.delete(id).await? {
        tracing::info!(character_id = id, "Character deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(id))
    }
}

/// GET /api/v1/characters/search?name=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> AppResult<Json<DataResponse<Vec<CharacterResponse>>>> {
    let characters = state.store.search_by_name(&params.name).await?;
    tracing::debug!(needle = %params.name, count = characters.len(), "Name search");
    Ok(Json(character_list(characters)))
}

/// GET /api/v1/characters/race/{race}
pub async fn by_race(
    State(state): State<AppState>,
    Path(race): Path<String>,
) -> AppResult<Json<DataResponse<Vec<CharacterResponse>>>> {
    let characters = state.store.find_by_race(&race).await?;
    Ok(Json(character_list(characters)))
}

/// GET /api/v1/characters/class/{class}
pub async fn by_class(
    State(state): State<AppState>,
    Path(class): Path<String>,
) -> AppResult<Json<DataResponse<Vec<CharacterResponse>>>> {
    let characters = state.store.find_by_class(&class).await?;
    Ok(Json(character_list(characters)))
}

/// GET /api/v1/characters/options
pub async fn options() -> Json<DataResponse<CharacterOptions>> {
    Json(DataResponse {
        data: CharacterOptions {
            races: RACES,
            classes: CLASSES,
        },
    })
}

/// POST /api/v1/characters/generate
///
/// Rolls a random character and persists it.
pub async fn generate(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<CharacterResponse>)> {
    let generated = state.generator.generate();
    let character = state.store.create(&generated).await?;
    tracing::info!(
        character_id = character.id,
        race = %character.race,
        class = %character.character_class,
        "Character generated"
    );
    Ok((StatusCode::CREATED, Json(character.into())))
}
