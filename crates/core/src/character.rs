//! Character record input and the rules a record must satisfy before it
//! may be persisted.
//!
//! [`CharacterDraft`] is what callers submit (JSON body, HTML form, or the
//! generator). [`ValidCharacter`] can only be obtained by passing every rule,
//! and it is the only type the persistence layer accepts.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::abilities::AbilityScores;
use crate::error::{CoreError, FieldViolation};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;
pub const BACKGROUND_MAX_CHARS: usize = 1000;

/// Order in which violations are reported.
const FIELD_ORDER: &[&str] = &[
    "name",
    "race",
    "character_class",
    "level",
    "strength",
    "dexterity",
    "constitution",
    "intelligence",
    "wisdom",
    "charisma",
    "background",
];

/// Unvalidated character fields.
///
/// Omitted numeric fields default to level 1 and a score of 10; omitted text
/// fields default to empty so they surface as rule violations rather than
/// deserialization failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CharacterDraft {
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "validate_race"))]
    pub race: String,

    #[serde(default)]
    #[validate(custom(function = "validate_character_class"))]
    pub character_class: String,

    #[serde(default = "default_level")]
    #[validate(range(min = 1, max = 20, message = "Level must be between 1 and 20"))]
    pub level: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Strength must be between 1 and 20"))]
    pub strength: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Dexterity must be between 1 and 20"))]
    pub dexterity: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Constitution must be between 1 and 20"))]
    pub constitution: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Intelligence must be between 1 and 20"))]
    pub intelligence: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Wisdom must be between 1 and 20"))]
    pub wisdom: i32,

    #[serde(default = "default_score")]
    #[validate(range(min = 1, max = 20, message = "Charisma must be between 1 and 20"))]
    pub charisma: i32,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Background cannot exceed 1000 characters"))]
    pub background: Option<String>,
}

fn default_level() -> i32 {
    1
}

fn default_score() -> i32 {
    10
}

impl CharacterDraft {
    /// A draft with the given identity and default level and scores.
    pub fn new(
        name: impl Into<String>,
        race: impl Into<String>,
        character_class: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            character_class: character_class.into(),
            level: default_level(),
            strength: default_score(),
            dexterity: default_score(),
            constitution: default_score(),
            intelligence: default_score(),
            wisdom: default_score(),
            charisma: default_score(),
            background: None,
        }
    }

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

    pub fn with_abilities(mut self, scores: AbilityScores) -> Self {
        self.strength = scores.strength;
        self.dexterity = scores.dexterity;
        self.constitution = scores.constitution;
        self.intelligence = scores.intelligence;
        self.wisdom = scores.wisdom;
        self.charisma = scores.charisma;
        self
    }

    /// Run every rule and collect one violation per failed rule, in
    /// [`FIELD_ORDER`]. An empty result means the draft is persistable.
    pub fn violations(&self) -> Vec<FieldViolation> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => flatten_errors(&errors),
        }
    }
}

/// A character that passed every validation rule. Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidCharacter(CharacterDraft);

impl ValidCharacter {
    /// Validate `draft`, reporting all violations at once on failure.
    pub fn new(draft: CharacterDraft) -> Result<Self, CoreError> {
        let violations = draft.violations();
        if violations.is_empty() {
            Ok(Self(draft))
        } else {
            Err(CoreError::Validation(violations))
        }
    }

    /// For records that are valid by construction (the generator).
    pub(crate) fn from_trusted(draft: CharacterDraft) -> Self {
        debug_assert!(draft.violations().is_empty(), "{draft:?}");
        Self(draft)
    }

    pub fn fields(&self) -> &CharacterDraft {
        &self.0
    }

    pub fn into_draft(self) -> CharacterDraft {
        self.0
    }
}

impl TryFrom<CharacterDraft> for ValidCharacter {
    type Error = CoreError;

    fn try_from(draft: CharacterDraft) -> Result<Self, Self::Error> {
        Self::new(draft)
    }
}

/* --------------------------------------------------------------------------
Custom rules
-------------------------------------------------------------------------- */

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(violation("required", "Name is required"));
    }
    let len = trimmed.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Err(violation(
            "length",
            "Name must be between 2 and 100 characters",
        ));
    }
    Ok(())
}

fn validate_race(race: &str) -> Result<(), ValidationError> {
    if race.trim().is_empty() {
        return Err(violation("required", "Race is required"));
    }
    Ok(())
}

fn validate_character_class(class: &str) -> Result<(), ValidationError> {
    if class.trim().is_empty() {
        return Err(violation("required", "Character class is required"));
    }
    Ok(())
}

fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                FieldViolation::new(field.clone(), message)
            })
        })
        .collect();

    violations.sort_by_key(|v| {
        FIELD_ORDER
            .iter()
            .position(|f| *f == v.field)
            .unwrap_or(FIELD_ORDER.len())
    });
    violations
}
