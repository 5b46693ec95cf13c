use async_trait::async_trait;
use charforge_core::character::ValidCharacter;
use charforge_core::types::DbId;

use super::CharacterStore;
use crate::models::character::Character;
use crate::repositories::CharacterRepo;
use crate::DbPool;

/// Postgres-backed store. Cheap to clone (the pool is reference-counted).
#[derive(Clone)]
pub struct PgCharacterStore {
    pool: DbPool,
}

impl PgCharacterStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterStore for PgCharacterStore {
    async fn create(&self, input: &ValidCharacter) -> Result<Character, sqlx::Error> {
        let character = CharacterRepo::create(&self.pool, input).await?;
        tracing::debug!(character_id = character.id, "Inserted character row");
        Ok(character)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        CharacterRepo::find_by_id(&self.pool, id).await
    }

    async fn list(&self) -> Result<Vec<Character>, sqlx::Error> {
        CharacterRepo::list(&self.pool).await
    }

    async fn update(
        &self,
        id: DbId,
        input: &ValidCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        CharacterRepo::update(&self.pool, id, input).await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        CharacterRepo::delete(&self.pool, id).await
    }

    async fn find_by_race(&self, race: &str) -> Result<Vec<Character>, sqlx::Error> {
        CharacterRepo::list_by_race(&self.pool, race).await
    }

    async fn find_by_class(&self, character_class: &str) -> Result<Vec<Character>, sqlx::Error> {
        CharacterRepo::list_by_class(&self.pool, character_class).await
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<Character>, sqlx::Error> {
        CharacterRepo::search_by_name(&self.pool, needle).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
