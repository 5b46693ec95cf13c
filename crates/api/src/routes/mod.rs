pub mod character;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /characters                  list, create
/// /characters/search           substring name search
/// /characters/options          race and class choices
/// /characters/generate         roll and persist (POST)
/// /characters/race/{race}      exact race filter
/// /characters/class/{class}    exact class filter
/// /characters/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/characters", character::router())
}
