//! Ability scores and their derived modifiers.
//!
//! Modifiers are a display transform: they are recomputed from the score on
//! demand and never persisted.

use serde::Serialize;

/// Lowest ability score (and level) a stored character may have.
pub const MIN_SCORE: i32 = 1;
/// Highest ability score (and level) a stored character may have.
pub const MAX_SCORE: i32 = 20;

/// The six abilities, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Field name as used in JSON bodies, forms and database columns.
    pub fn field(self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    /// Three-letter sheet abbreviation (`STR`, `DEX`, ...).
    pub fn abbreviation(self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

/// The six scores of one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    /// All six scores set to the same value.
    pub fn uniform(score: i32) -> Self {
        Self {
            strength: score,
            dexterity: score,
            constitution: score,
            intelligence: score,
            wisdom: score,
            charisma: score,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Formatted modifier for every ability.
    pub fn modifiers(&self) -> AbilityModifiers {
        AbilityModifiers {
            strength: format_modifier(ability_modifier(self.strength)),
            dexterity: format_modifier(ability_modifier(self.dexterity)),
            constitution: format_modifier(ability_modifier(self.constitution)),
            intelligence: format_modifier(ability_modifier(self.intelligence)),
            wisdom: format_modifier(ability_modifier(self.wisdom)),
            charisma: format_modifier(ability_modifier(self.charisma)),
        }
    }
}

impl Default for AbilityScores {
    /// An unremarkable commoner: 10 in everything.
    fn default() -> Self {
        Self::uniform(10)
    }
}

/// Display-ready modifiers, e.g. `{"strength": "+2", "wisdom": "-1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityModifiers {
    pub strength: String,
    pub dexterity: String,
    pub constitution: String,
    pub intelligence: String,
    pub wisdom: String,
    pub charisma: String,
}

/// `floor((score - 10) / 2)`, rounding toward negative infinity for odd
/// scores below 10 (score 9 gives -1, not 0).
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// `+N` for zero and positive modifiers, the plain signed number otherwise.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}
