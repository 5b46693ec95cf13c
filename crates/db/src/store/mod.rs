//! Storage seam used by the HTTP layer.
//!
//! Handlers hold an `Arc<dyn CharacterStore>`. [`PgCharacterStore`] backs it
//! with Postgres through [`CharacterRepo`](crate::repositories::CharacterRepo);
//! [`MemoryCharacterStore`] keeps records in process for runs without a
//! database and for tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use charforge_core::character::ValidCharacter;
use charforge_core::types::DbId;

use crate::models::character::Character;

pub use memory::MemoryCharacterStore;
pub use postgres::PgCharacterStore;

/// Persistence operations for character records.
///
/// Writes only accept [`ValidCharacter`], so an invalid record cannot be
/// persisted through this trait.
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn create(&self, input: &ValidCharacter) -> Result<Character, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Character>, sqlx::Error>;

    /// All records, oldest first.
    async fn list(&self) -> Result<Vec<Character>, sqlx::Error>;

    /// Full replacement of the editable fields. `None` if `id` is unknown.
    async fn update(
        &self,
        id: DbId,
        input: &ValidCharacter,
    ) -> Result<Option<Character>, sqlx::Error>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Exact, case-sensitive race match.
    async fn find_by_race(&self, race: &str) -> Result<Vec<Character>, sqlx::Error>;

    /// Exact, case-sensitive class match.
    async fn find_by_class(&self, character_class: &str) -> Result<Vec<Character>, sqlx::Error>;

    /// Case-insensitive substring match on the name.
    async fn search_by_name(&self, needle: &str) -> Result<Vec<Character>, sqlx::Error>;

    /// Whether the backing storage is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;

    /// Short backend label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}
