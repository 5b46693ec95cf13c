use axum::routing::{get, post};
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /search?name=      -> search
/// GET    /options           -> options
/// POST   /generate          -> generate
/// GET    /race/{race}       -> by_race
/// GET    /class/{class}     -> by_class
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list).post(character::create))
        .route("/search", get(character::search))
        .route("/options", get(character::options))
        .route("/generate", post(character::generate))
        .route("/race/{race}", get(character::by_race))
        .route("/class/{class}", get(character::by_class))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        )
}
