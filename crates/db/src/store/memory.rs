use std::collections::BTreeMap;

use async_trait::async_trait;
use charforge_core::character::ValidCharacter;
use charforge_core::types::DbId;
use tokio::sync::RwLock;

use super::CharacterStore;
use crate::models::character::Character;

/// In-process store. Ids start at 1 and are never reused, matching a
/// BIGSERIAL column.
pub struct MemoryCharacterStore {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    rows: BTreeMap<DbId, Character>,
    next_id: DbId,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Clone every row matching `predicate`, in id order.
    async fn filter<F>(&self, predicate: F) -> Vec<Character>
    where
        F: Fn(&Character) -> bool,
    {
        self.state
            .read()
            .await
            .rows
            .values()
            .filter(|c| predicate(*c))
            .cloned()
            .collect()
    }
}

impl Default for MemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn create(&self, input: &ValidCharacter) -> Result<Character, sqlx::Error> {
        let c = input.fields();
        let now = chrono::Utc::now();
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let character = Character {
            id,
            name: c.name.clone(),
            race: c.race.clone(),
            character_class: c.character_class.clone(),
            level: c.level,
            strength: c.strength,
            dexterity: c.dexterity,
            constitution: c.constitution,
            intelligence: c.intelligence,
            wisdom: c.wisdom,
            charisma: c.charisma,
            background: c.background.clone(),
            created_at: now,
            updated_at: now,
        };
        state.rows.insert(id, character.clone());
        tracing::debug!(character_id = id, "Stored character in memory");
        Ok(character)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Character>, sqlx::Error> {
        Ok(self.filter(|_| true).await)
    }

    async fn update(
        &self,
        id: DbId,
        input: &ValidCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let c = input.fields();
        let mut state = self.state.write().await;
        let Some(existing) = state.rows.get_mut(&id) else {
            return Ok(None);
        };

        existing.name = c.name.clone();
        existing.race = c.race.clone();
        existing.character_class = c.character_class.clone();
        existing.level = c.level;
        existing.strength = c.strength;
        existing.dexterity = c.dexterity;
        existing.constitution = c.constitution;
        existing.intelligence = c.intelligence;
        existing.wisdom = c.wisdom;
        existing.charisma = c.charisma;
        existing.background = c.background.clone();
        existing.updated_at = chrono::Utc::now();

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.state.write().await.rows.remove(&id).is_some())
    }

    async fn find_by_race(&self, race: &str) -> Result<Vec<Character>, sqlx::Error> {
        Ok(self.filter(|c| c.race == race).await)
    }

    async fn find_by_class(&self, character_class: &str) -> Result<Vec<Character>, sqlx::Error> {
        Ok(self.filter(|c| c.character_class == character_class).await)
    }

    async fn search_by_name(&self, needle: &str) -> Result<Vec<Character>, sqlx::Error> {
        let needle = needle.to_lowercase();
        Ok(self
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .await)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
