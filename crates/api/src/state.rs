use std::sync::Arc;

use charforge_core::generator::CharacterGenerator;
use charforge_db::store::CharacterStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Character persistence (Postgres or in-memory).
    pub store: Arc<dyn CharacterStore>,
    /// Seedable random character generator.
    pub generator: Arc<CharacterGenerator>,
    pub config: Arc<ServerConfig>,
}
