//! Repository for the `characters` table.

use charforge_core::character::ValidCharacter;
use charforge_core::types::DbId;
use sqlx::PgPool;

use crate::models::character::Character;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, race, character_class, level, \
    strength, dexterity, constitution, intelligence, wisdom, charisma, \
    background, created_at, updated_at";

/// Provides CRUD and lookup operations for characters.
///
/// Only [`ValidCharacter`] values can be written, so every stored row has
/// passed the domain rules.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row with its id.
    pub async fn create(pool: &PgPool, input: &ValidCharacter) -> Result<Character, sqlx::Error> {
        let c = input.fields();
        let query = format!(
            "INSERT INTO characters
                (name, race, character_class, level,
                 strength, dexterity, constitution, intelligence, wisdom, charisma,
                 background)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&c.name)
            .bind(&c.race)
            .bind(&c.character_class)
            .bind(c.level)
            .bind(c.strength)
            .bind(c.dexterity)
            .bind(c.constitution)
            .bind(c.intelligence)
            .bind(c.wisdom)
            .bind(c.charisma)
            .bind(&c.background)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all characters in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Replace every editable field of a character.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ValidCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        let c = input.fields();
        let query = format!(
            "UPDATE characters SET
                name = $2,
                race = $3,
                character_class = $4,
                level = $5,
                strength = $6,
                dexterity = $7,
                constitution = $8,
                intelligence = $9,
                wisdom = $10,
                charisma = $11,
                background = $12,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&c.name)
            .bind(&c.race)
            .bind(&c.character_class)
            .bind(c.level)
            .bind(c.strength)
            .bind(c.dexterity)
            .bind(c.constitution)
            .bind(c.intelligence)
            .bind(c.wisdom)
            .bind(c.charisma)
            .bind(&c.background)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a character by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All characters whose race matches exactly (case-sensitive).
    pub async fn list_by_race(pool: &PgPool, race: &str) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE race = $1 ORDER BY id");
        sqlx::query_as::<_, Character>(&query)
            .bind(race)
            .fetch_all(pool)
            .await
    }

    /// All characters whose class matches exactly (case-sensitive).
    pub async fn list_by_class(
        pool: &PgPool,
        character_class: &str,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM characters WHERE character_class = $1 ORDER BY id");
        sqlx::query_as::<_, Character>(&query)
            .bind(character_class)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the name. `%` and `_` in `needle`
    /// match literally.
    pub async fn search_by_name(pool: &PgPool, needle: &str) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE name ILIKE '%' || $1 || '%' ESCAPE '\\'
             ORDER BY id"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(escape_like(needle))
            .fetch_all(pool)
            .await
    }
}

/// Escape LIKE metacharacters so the needle is matched literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
