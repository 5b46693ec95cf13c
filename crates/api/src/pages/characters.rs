//! Browser-facing character pages.
//!
//! Successful writes redirect (303) with a `?notice=` flash code; rejected
//! form submissions re-render the form with status 422.

use std::fmt::Write;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use charforge_core::abilities::{ability_modifier, format_modifier, Ability};
use charforge_core::error::FieldViolation;
use charforge_core::types::DbId;
use charforge_db::models::character::Character;

use super::form::{render_form, CharacterForm};
use super::layout::{escape, page, Notice};
use crate::error::AppResult;
use crate::query::NoticeParams;
use crate::state::AppState;

fn notice_of(params: &NoticeParams) -> Option<Notice> {
    params.notice.as_deref().and_then(Notice::from_code)
}

fn redirect_home(notice: Notice) -> Redirect {
    Redirect::to(&format!("/?notice={}", notice.code()))
}

fn redirect_detail(id: DbId, notice: Notice) -> Redirect {
    Redirect::to(&format!("/characters/{id}?notice={}", notice.code()))
}

/// GET /
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> AppResult<Html<String>> {
    let characters = state.store.list().await?;
    Ok(page(
        "Characters",
        notice_of(&params),
        &render_index(&characters),
    ))
}

/// GET /characters/new
pub async fn new_form() -> Html<String> {
    page(
        "Create Character",
        None,
        &render_form("/characters", "Create", &CharacterForm::blank(), &[]),
    )
}

/// POST /characters
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CharacterForm>,
) -> AppResult<Response> {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(violations) => {
            return Ok(rejected("Create Character", "/characters", "Create", &form, &violations));
        }
    };
    let character = state.store.create(&valid).await?;
    tracing::info!(character_id = character.id, "Character created from form");
    Ok(redirect_home(Notice::Created).into_response())
}

/// GET /characters/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<NoticeParams>,
) -> AppResult<Response> {
    let Some(character) = state.store.find_by_id(id).await? else {
        return Ok(redirect_home(Notice::NotFound).into_response());
    };
    Ok(page(
        &character.name,
        notice_of(&params),
        &render_detail(&character),
    )
    .into_response())
}

/// GET /characters/{id}/edit
pub async fn edit_form(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    let Some(character) = state.store.find_by_id(id).await? else {
        return Ok(redirect_home(Notice::NotFound).into_response());
    };
    let form = CharacterForm::from(&character.to_draft());
    Ok(page(
        &format!("Edit {}", character.name),
        None,
        &render_form(&format!("/characters/{id}"), "Save", &form, &[]),
    )
    .into_response())
}

/// POST /characters/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<CharacterForm>,
) -> AppResult<Response> {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(violations) => {
            let action = format!("/characters/{id}");
            return Ok(rejected("Edit Character", &action, "Save", &form, &violations));
        }
    };
    match state.store.update(id, &valid).await? {
        Some(_) => {
            tracing::info!(character_id = id, "Character updated from form");
            Ok(redirect_detail(id, Notice::Updated).into_response())
        }
        None => Ok(redirect_home(Notice::NotFound).into_response()),
    }
}

/// POST /characters/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Redirect> {
    if state.store.delete(id).await? {
        tracing::info!(character_id = id, "Character deleted from form");
        Ok(redirect_home(Notice::Deleted))
    } else {
        Ok(redirect_home(Notice::NotFound))
    }
}

/// POST /characters/generate
pub async fn generate(State(state): State<AppState>) -> AppResult<Redirect> {
    let generated = state.generator.generate();
    let character = state.store.create(&generated).await?;
    tracing::info!(character_id = character.id, "Random character generated from form");
    Ok(redirect_detail(character.id, Notice::Generated))
}

fn rejected(
    title: &str,
    action: &str,
    submit_label: &str,
    form: &CharacterForm,
    violations: &[FieldViolation],
) -> Response {
    tracing::debug!(count = violations.len(), "Form submission rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        page(title, None, &render_form(action, submit_label, form, violations)),
    )
        .into_response()
}

/* --------------------------------------------------------------------------
Rendering
-------------------------------------------------------------------------- */

fn render_index(characters: &[Character]) -> String {
    let mut html = String::from(
        r#"<p><a href="/characters/new">Create character</a></p>
<form method="post" action="/characters/generate"><button type="submit">Generate random character</button></form>
"#,
    );

    if characters.is_empty() {
        html.push_str("<p class=\"empty\">No characters yet.</p>\n");
        return html;
    }

    html.push_str("<table>\n<tr><th>Name</th><th>Race</th><th>Class</th><th>Level</th></tr>\n");
    for c in characters {
        let _ = writeln!(
            html,
            r#"<tr><td><a href="/characters/{id}">{name}</a></td><td>{race}</td><td>{class}</td><td>{level}</td></tr>"#,
            id = c.id,
            name = escape(&c.name),
            race = escape(&c.race),
            class = escape(&c.character_class),
            level = c.level,
        );
    }
    html.push_str("</table>\n");
    html
}

fn render_detail(c: &Character) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<dl>\n<dt>Race</dt><dd>{}</dd>\n<dt>Class</dt><dd>{}</dd>\n<dt>Level</dt><dd>{}</dd>\n</dl>",
        escape(&c.race),
        escape(&c.character_class),
        c.level,
    );

    html.push_str("<table class=\"abilities\">\n<tr><th>Ability</th><th>Score</th><th>Modifier</th></tr>\n");
    let scores = c.abilities();
    for ability in Ability::ALL {
        let score = scores.get(ability);
        let _ = writeln!(
            html,
            r#"<tr><th title="{label}">{abbr}</th><td>{score}</td><td>{modifier}</td></tr>"#,
            label = ability.label(),
            abbr = ability.abbreviation(),
            modifier = format_modifier(ability_modifier(score)),
        );
    }
    html.push_str("</table>\n");

    match &c.background {
        Some(background) => {
            let _ = writeln!(html, "<h2>Background</h2>\n<p>{}</p>", escape(background));
        }
        None => html.push_str("<p class=\"empty\">No background recorded.</p>\n"),
    }

    let _ = write!(
        html,
        r#"<p><a href="/characters/{id}/edit">Edit</a> | <a href="/">Back to list</a></p>
<form method="post" action="/characters/{id}/delete"><button type="submit">Delete</button></form>
"#,
        id = c.id,
    );
    html
}
