//! Character entity model.

use charforge_core::abilities::AbilityScores;
use charforge_core::character::CharacterDraft;
use charforge_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub race: String,
    pub character_class: String,
    pub level: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub background: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Character {
    pub fn abilities(&self) -> AbilityScores {
        AbilityScores {
            strength: self.strength,
            dexterity: self.dexterity,
            constitution: self.constitution,
            intelligence: self.intelligence,
            wisdom: self.wisdom,
            charisma: self.charisma,
        }
    }

    /// The editable fields, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> CharacterDraft {
        CharacterDraft {
            name: self.name.clone(),
            race: self.race.clone(),
            character_class: self.character_class.clone(),
            level: self.level,
            strength: self.strength,
            dexterity: self.dexterity,
            constitution: self.constitution,
            intelligence: self.intelligence,
            wisdom: self.wisdom,
            charisma: self.charisma,
            background: self.background.clone(),
        }
    }
}
