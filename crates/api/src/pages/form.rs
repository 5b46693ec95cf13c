//! The create/edit form: raw submitted values, conversion to a validated
//! character, and rendering with inline violation messages.

use std::fmt::Write;

use charforge_core::abilities::{Ability, MAX_SCORE, MIN_SCORE};
use charforge_core::catalog::{is_known_class, is_known_race, CLASSES, RACES};
use charforge_core::character::{CharacterDraft, ValidCharacter, BACKGROUND_MAX_CHARS};
use charforge_core::error::{CoreError, FieldViolation};
use serde::Deserialize;

use super::layout::escape;

/// Form fields exactly as the browser submitted them.
///
/// Numbers stay as text so a rejected submission re-renders with what the
/// user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CharacterForm {
    pub name: String,
    pub race: String,
    pub character_class: String,
    pub level: String,
    pub strength: String,
    pub dexterity: String,
    pub constitution: String,
    pub intelligence: String,
    pub wisdom: String,
    pub charisma: String,
    pub background: String,
}

impl From<&CharacterDraft> for CharacterForm {
    fn from(draft: &CharacterDraft) -> Self {
        Self {
            name: draft.name.clone(),
            race: draft.race.clone(),
            character_class: draft.character_class.clone(),
            level: draft.level.to_string(),
            strength: draft.strength.to_string(),
            dexterity: draft.dexterity.to_string(),
            constitution: draft.constitution.to_string(),
            intelligence: draft.intelligence.to_string(),
            wisdom: draft.wisdom.to_string(),
            charisma: draft.charisma.to_string(),
            background: draft.background.clone().unwrap_or_default(),
        }
    }
}

impl CharacterForm {
    /// A blank form with default level and scores.
    pub fn blank() -> Self {
        Self::from(&CharacterDraft::new("", "", ""))
    }

    fn ability(&self, ability: Ability) -> &str {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Constitution => &self.constitution,
            Ability::Intelligence => &self.intelligence,
            Ability::Wisdom => &self.wisdom,
            Ability::Charisma => &self.charisma,
        }
    }

    /// Parse and validate. On failure every violation is returned, with
    /// non-numeric input reported instead of a range error for that field.
    pub fn validate(&self) -> Result<ValidCharacter, Vec<FieldViolation>> {
        let mut parse_errors = Vec::new();
        let mut number = |field: &str, label: &str, raw: &str| -> i32 {
            raw.trim().parse().unwrap_or_else(|_| {
                parse_errors.push(FieldViolation::new(
                    field,
                    format!("{label} must be a whole number"),
                ));
                0
            })
        };

        let draft = CharacterDraft {
            name: self.name.clone(),
            race: self.race.clone(),
            character_class: self.character_class.clone(),
            level: number("level", "Level", &self.level),
            strength: number("strength", "Strength", &self.strength),
            dexterity: number("dexterity", "Dexterity", &self.dexterity),
            constitution: number("constitution", "Constitution", &self.constitution),
            intelligence: number("intelligence", "Intelligence", &self.intelligence),
            wisdom: number("wisdom", "Wisdom", &self.wisdom),
            charisma: number("charisma", "Charisma", &self.charisma),
            background: if self.background.trim().is_empty() {
                None
            } else {
                Some(self.background.clone())
            },
        };

        let mut violations = match ValidCharacter::new(draft) {
            Ok(valid) if parse_errors.is_empty() => return Ok(valid),
            Ok(_) => Vec::new(),
            Err(CoreError::Validation(violations)) => violations,
            Err(other) => vec![FieldViolation::new("form", other.to_string())],
        };
        violations.retain(|v| !parse_errors.iter().any(|p| p.field == v.field));
        violations.extend(parse_errors);
        Err(violations)
    }
}

/* --------------------------------------------------------------------------
Rendering
-------------------------------------------------------------------------- */

/// Render the form posting to `action`, with any `violations` shown in a
/// summary and next to their fields.
pub fn render_form(
    action: &str,
    submit_label: &str,
    form: &CharacterForm,
    violations: &[FieldViolation],
) -> String {
    let mut html = String::new();

    if !violations.is_empty() {
        html.push_str("<ul class=\"errors\">\n");
        for v in violations {
            let _ = writeln!(html, "<li>{}</li>", escape(&v.message));
        }
        html.push_str("</ul>\n");
    }

    let _ = writeln!(html, r#"<form method="post" action="{}">"#, escape(action));

    let _ = writeln!(
        html,
        r#"<label>Name <input type="text" name="name" value="{}" required></label>{}"#,
        escape(&form.name),
        field_errors(violations, "name"),
    );

    html.push_str(&select(
        "race",
        "Race",
        RACES,
        &form.race,
        is_known_race(&form.race),
        violations,
    ));
    html.push_str(&select(
        "character_class",
        "Class",
        CLASSES,
        &form.character_class,
        is_known_class(&form.character_class),
        violations,
    ));

    let _ = writeln!(
        html,
        r#"<label>Level <input type="number" name="level" min="{MIN_SCORE}" max="{MAX_SCORE}" value="{}"></label>{}"#,
        escape(&form.level),
        field_errors(violations, "level"),
    );

    html.push_str("<fieldset>\n<legend>Ability scores</legend>\n");
    for ability in Ability::ALL {
        let _ = writeln!(
            html,
            r#"<label>{label} <input type="number" name="{field}" min="{MIN_SCORE}" max="{MAX_SCORE}" value="{value}"></label>{errors}"#,
            label = ability.label(),
            field = ability.field(),
            value = escape(form.ability(ability)),
            errors = field_errors(violations, ability.field()),
        );
    }
    html.push_str("</fieldset>\n");

    let _ = writeln!(
        html,
        r#"<label>Background <textarea name="background" maxlength="{BACKGROUND_MAX_CHARS}">{}</textarea></label>{}"#,
        escape(&form.background),
        field_errors(violations, "background"),
    );

    let _ = writeln!(html, r#"<button type="submit">{}</button>"#, escape(submit_label));
    html.push_str("</form>\n");
    html
}

/// A `<select>` over `choices`. A current value outside the list is kept as
/// an extra selected option so editing never silently changes it.
fn select(
    field: &str,
    label: &str,
    choices: &[&str],
    current: &str,
    known: bool,
    violations: &[FieldViolation],
) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<label>{label} <select name="{field}">"#);
    let _ = writeln!(html, r#"<option value="">Choose...</option>"#);
    if !known && !current.is_empty() {
        let _ = writeln!(
            html,
            r#"<option value="{v}" selected>{v}</option>"#,
            v = escape(current)
        );
    }
    for choice in choices {
        let selected = if *choice == current { " selected" } else { "" };
        let _ = writeln!(html, r#"<option value="{choice}"{selected}>{choice}</option>"#);
    }
    let _ = writeln!(html, "</select></label>{}", field_errors(violations, field));
    html
}

fn field_errors(violations: &[FieldViolation], field: &str) -> String {
    violations
        .iter()
        .filter(|v| v.field == field)
        .map(|v| format!(r#"<span class="field-error">{}</span>"#, escape(&v.message)))
        .collect()
}
