//! Fixed enumerations used for choice lists and random generation.
//!
//! Each list is an ordered, index-addressable slice. The generator selects
//! entries by random index, so reordering a list changes which record a
//! given seed produces.

/// Playable races. Validation accepts any non-blank race; these are the
/// values offered in choice lists and produced by the generator.
pub const RACES: &[&str] = &[
    "Human",
    "Elf",
    "Dwarf",
    "Halfling",
    "Dragonborn",
    "Gnome",
    "Half-Elf",
    "Half-Orc",
    "Tiefling",
];

/// Character classes, independent of race.
pub const CLASSES: &[&str] = &[
    "Barbarian",
    "Bard",
    "Cleric",
    "Druid",
    "Fighter",
    "Monk",
    "Paladin",
    "Ranger",
    "Rogue",
    "Sorcerer",
    "Warlock",
    "Wizard",
];

/// First half of a generated name.
pub const NAME_PREFIXES: &[&str] = &[
    "Thorn", "Shadow", "Storm", "Iron", "Silver", "Dark", "Light", "Fire", "Ice", "Stone", "Wind",
    "Thunder", "Moon", "Sun",
];

/// Second half of a generated name, appended without a separator.
pub const NAME_SUFFIXES: &[&str] = &[
    "blade", "heart", "striker", "walker", "seeker", "bringer", "warden", "keeper", "slayer",
    "hunter", "weaver", "caller",
];

/// Where a generated character comes from.
pub const BACKGROUND_ORIGINS: &[&str] = &[
    "a small village",
    "a bustling city",
    "a nomadic tribe",
    "a secluded monastery",
    "a noble house",
];

/// What a generated character is after.
pub const BACKGROUND_MOTIVATIONS: &[&str] = &[
    "seeks glory",
    "searches for lost family",
    "wants revenge",
    "desires knowledge",
    "pursues justice",
];

/// Whether `race` is one of the catalogued races (exact match).
pub fn is_known_race(race: &str) -> bool {
    RACES.contains(&race)
}

/// Whether `class` is one of the catalogued classes (exact match).
pub fn is_known_class(class: &str) -> bool {
    CLASSES.contains(&class)
}
