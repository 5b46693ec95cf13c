//! Random character generator.
//!
//! Every function takes the random source explicitly so callers can pass a
//! seeded [`StdRng`] for reproducible output. Draws happen in a fixed order
//! (name prefix, name suffix, race, class, level, the six abilities in sheet
//! order, origin, motivation), so one seed always yields the same record.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::abilities::AbilityScores;
use crate::catalog::{
    BACKGROUND_MOTIVATIONS, BACKGROUND_ORIGINS, CLASSES, NAME_PREFIXES, NAME_SUFFIXES, RACES,
};
use crate::character::{CharacterDraft, ValidCharacter};

/// Generated characters start between these levels (inclusive), narrower
/// than the 1..=20 a stored character may have.
pub const MIN_GENERATED_LEVEL: i32 = 1;
pub const MAX_GENERATED_LEVEL: i32 = 10;

/// Pick one entry by uniform random index. `list` must not be empty.
fn pick<R: Rng>(rng: &mut R, list: &'static [&'static str]) -> &'static str {
    list[rng.random_range(0..list.len())]
}

/// One six-sided die.
pub fn roll_d6<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(1..=6)
}

/// Sum of the three highest of four dice (the lowest one is dropped).
pub fn sum_highest_three(mut rolls: [i32; 4]) -> i32 {
    rolls.sort_unstable();
    rolls.iter().skip(1).sum()
}

/// 4d6-drop-lowest. Always in `3..=18`.
pub fn roll_ability_score<R: Rng>(rng: &mut R) -> i32 {
    let rolls = [roll_d6(rng), roll_d6(rng), roll_d6(rng), roll_d6(rng)];
    sum_highest_three(rolls)
}

/// Six independent 4d6-drop-lowest scores in sheet order.
pub fn roll_ability_scores<R: Rng>(rng: &mut R) -> AbilityScores {
    AbilityScores {
        strength: roll_ability_score(rng),
        dexterity: roll_ability_score(rng),
        constitution: roll_ability_score(rng),
        intelligence: roll_ability_score(rng),
        wisdom: roll_ability_score(rng),
        charisma: roll_ability_score(rng),
    }
}

/// `"Storm"` + `"walker"` is `"Stormwalker"`.
pub fn compose_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}{suffix}")
}

pub fn random_name<R: Rng>(rng: &mut R) -> String {
    let prefix = pick(rng, NAME_PREFIXES);
    let suffix = pick(rng, NAME_SUFFIXES);
    compose_name(prefix, suffix)
}

/// `"<name> is a <race> <class> from <origin> who <motivation>."`
pub fn render_background(
    name: &str,
    race: &str,
    class: &str,
    origin: &str,
    motivation: &str,
) -> String {
    format!("{name} is a {race} {class} from {origin} who {motivation}.")
}

pub fn random_background<R: Rng>(
    rng: &mut R,
    name: &str,
    race: &str,
    class: &str,
) -> String {
    let origin = pick(rng, BACKGROUND_ORIGINS);
    let motivation = pick(rng, BACKGROUND_MOTIVATIONS);
    render_background(name, race, class, origin, motivation)
}

/// Produce a complete character without an id. The result is valid by
/// construction: level is within 1..=10, scores within 3..=18 and names are
/// 8 to 14 characters long.
pub fn generate_character<R: Rng>(rng: &mut R) -> ValidCharacter {
    let name = random_name(rng);
    let race = pick(rng, RACES);
    let class = pick(rng, CLASSES);
    let level = rng.random_range(MIN_GENERATED_LEVEL..=MAX_GENERATED_LEVEL);
    let scores = roll_ability_scores(rng);
    let background = random_background(rng, &name, race, class);

    let mut draft = CharacterDraft::new(name, race, class).with_abilities(scores);
    draft.level = level;
    draft.background = Some(background);

    ValidCharacter::from_trusted(draft)
}

/// Thread-safe generator owning its random source.
///
/// The lock is held for a single generation only; callers never hold it
/// across an `.await`.
pub struct CharacterGenerator {
    rng: Mutex<StdRng>,
}

impl CharacterGenerator {
    /// Seeded generators repeat the same sequence of characters; without a
    /// seed the source is initialised from the operating system.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self) -> ValidCharacter {
        // A panic mid-generation cannot leave the RNG in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        generate_character(&mut *rng)
    }
}

impl std::fmt::Debug for CharacterGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterGenerator").finish_non_exhaustive()
    }
}
