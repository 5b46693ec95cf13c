//! Server-rendered HTML pages for managing characters in a browser.

pub mod characters;
pub mod form;
pub mod layout;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET  /                          -> index
/// GET  /characters/new            -> new_form
/// POST /characters                -> create
/// POST /characters/generate       -> generate
/// GET  /characters/{id}           -> show
/// POST /characters/{id}           -> update
/// GET  /characters/{id}/edit      -> edit_form
/// POST /characters/{id}/delete    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(characters::index))
        .route("/characters", post(characters::create))
        .route("/characters/new", get(characters::new_form))
        .route("/characters/generate", post(characters::generate))
        .route(
            "/characters/{id}",
            get(characters::show).post(characters::update),
        )
        .route("/characters/{id}/edit", get(characters::edit_form))
        .route("/characters/{id}/delete", post(characters::delete))
}
