//! HTTP-level integration tests for the `/api/v1/characters` endpoints.
//!
//! Requests go straight into the router via `tower::ServiceExt::oneshot`,
//! backed by the in-memory store.

mod common;

use axum::http::StatusCode;
use charforge_core::catalog::{CLASSES, RACES};
use charforge_db::store::CharacterStore;
use common::{body_json, body_text, delete, get, post_empty, post_json, put_json};
use serde_json::json;

fn aria() -> serde_json::Value {
    json!({
        "name": "Aria",
        "race": "Elf",
        "character_class": "Bard",
        "level": 3,
        "strength": 8,
        "dexterity": 18,
        "constitution": 12,
        "intelligence": 11,
        "wisdom": 10,
        "charisma": 16,
        "background": "A wandering minstrel."
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_returns_201_with_id_and_modifiers() {
    let (app, _) = common::build_test_app();
    let response = post_json(app, "/api/v1/characters", aria()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Aria");
    assert_eq!(json["character_class"], "Bard");
    assert_eq!(json["background"], "A wandering minstrel.");
    assert_eq!(json["modifiers"]["strength"], "-1");
    assert_eq!(json["modifiers"]["dexterity"], "+4");
    assert_eq!(json["modifiers"]["wisdom"], "+0");
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_create_fills_omitted_numbers_with_defaults() {
    let (app, _) = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/characters",
        json!({"name": "Brom", "race": "Dwarf", "character_class": "Monk"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["level"], 1);
    assert_eq!(json["charisma"], 10);
    assert!(json["background"].is_null());
}

#[tokio::test]
async fn test_create_rejects_invalid_record_with_every_violation() {
    let (app, store) = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/characters",
        json!({
            "name": " ",
            "race": "",
            "character_class": "Wizard",
            "level": 21,
            "strength": 0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["details"],
        json!([
            {"field": "name", "message": "Name is required"},
            {"field": "race", "message": "Race is required"},
            {"field": "level", "message": "Level must be between 1 and 20"},
            {"field": "strength", "message": "Strength must be between 1 and 20"}
        ])
    );

    // Nothing was persisted.
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_accepts_boundary_values() {
    let (app, _) = common::build_test_app();
    let mut body = aria();
    body["name"] = json!("Al");
    body["level"] = json!(20);
    body["strength"] = json!(1);
    body["charisma"] = json!(20);
    body["background"] = json!("x".repeat(1000));

    let response = post_json(app, "/api/v1/characters", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_rejects_long_background() {
    let (app, _) = common::build_test_app();
    let mut body = aria();
    body["background"] = json!("x".repeat(1001));

    let response = post_json(app, "/api/v1/characters", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["details"][0]["field"], "background");
    assert_eq!(
        json["details"][0]["message"],
        "Background cannot exceed 1000 characters"
    );
}

// ---------------------------------------------------------------------------
// Read / list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_by_id_round_trips() {
    let (app, _) = common::build_test_app();
    let created = body_json(post_json(app.clone(), "/api/v1/characters", aria()).await).await;
    let id = created["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/characters/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[tokio::test]
async fn test_get_missing_returns_404() {
    let (app, _) = common::build_test_app();
    let response = get(app, "/api/v1/characters/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Character with id 999 not found");
}

#[tokio::test]
async fn test_list_wraps_in_data_envelope() {
    let (app, _) = common::build_test_app();
    let empty = body_json(get(app.clone(), "/api/v1/characters").await).await;
    assert_eq!(empty, json!({"data": []}));

    post_json(app.clone(), "/api/v1/characters", aria()).await;
    post_empty(app.clone(), "/api/v1/characters/generate").await;

    let json = body_json(get(app, "/api/v1/characters").await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Aria");
    assert_eq!(data[1]["id"], 2);
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_replaces_record() {
    let (app, _) = common::build_test_app();
    post_json(app.clone(), "/api/v1/characters", aria()).await;

    let response = put_json(
        app.clone(),
        "/api/v1/characters/1",
        json!({"name": "Aria Swiftfoot", "race": "Half-Elf", "character_class": "Rogue", "level": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Aria Swiftfoot");
    assert_eq!(json["level"], 5);
    // Full replace: omitted scores reset to defaults, background cleared.
    assert_eq!(json["dexterity"], 10);
    assert!(json["background"].is_null());

    let fetched = body_json(get(app, "/api/v1/characters/1").await).await;
    assert_eq!(fetched["race"], "Half-Elf");
}

#[tokio::test]
async fn test_update_invalid_keeps_stored_record() {
    let (app, _) = common::build_test_app();
    let created = body_json(post_json(app.clone(), "/api/v1/characters", aria()).await).await;

    let mut body = aria();
    body["name"] = json!("Renamed");
    body["wisdom"] = json!(0);
    let response = put_json(app.clone(), "/api/v1/characters/1", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let fetched = body_json(get(app, "/api/v1/characters/1").await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_update_missing_returns_404() {
    let (app, _) = common::build_test_app();
    let response = put_json(app, "/api/v1/characters/42", aria()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_then_404() {
    let (app, _) = common::build_test_app();
    post_json(app.clone(), "/api/v1/characters", aria()).await;

    let response = delete(app.clone(), "/api/v1/characters/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_text(response).await.is_empty());

    let response = delete(app.clone(), "/api/v1/characters/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app, "/api/v1/characters/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

async fn seeded() -> axum::Router {
    let (app, _) = common::build_test_app();
    for (name, race, class) in [
        ("Stormwalker", "Elf", "Ranger"),
        ("Ironheart", "Dwarf", "Cleric"),
        ("Moonseeker", "Elf", "Wizard"),
    ] {
        let response = post_json(
            app.clone(),
            "/api/v1/characters",
            json!({"name": name, "race": race, "character_class": class}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    app
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let app = seeded().await;

    let json = body_json(get(app.clone(), "/api/v1/characters/search?name=SEEK").await).await;
    assert_eq!(names(&json), vec!["Moonseeker"]);

    let json = body_json(get(app.clone(), "/api/v1/characters/search?name=zzz").await).await;
    assert!(names(&json).is_empty());

    let json = body_json(get(app, "/api/v1/characters/search").await).await;
    assert_eq!(names(&json).len(), 3);
}

#[tokio::test]
async fn test_filter_by_race_and_class_is_exact() {
    let app = seeded().await;

    let json = body_json(get(app.clone(), "/api/v1/characters/race/Elf").await).await;
    assert_eq!(names(&json), vec!["Stormwalker", "Moonseeker"]);

    let json = body_json(get(app.clone(), "/api/v1/characters/race/elf").await).await;
    assert!(names(&json).is_empty());

    let json = body_json(get(app.clone(), "/api/v1/characters/race/Half-Elf").await).await;
    assert!(names(&json).is_empty());

    let json = body_json(get(app, "/api/v1/characters/class/Cleric").await).await;
    assert_eq!(names(&json), vec!["Ironheart"]);
}

#[tokio::test]
async fn test_options_lists_catalog() {
    let (app, _) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/characters/options").await).await;

    assert_eq!(json["data"]["races"].as_array().unwrap().len(), RACES.len());
    assert_eq!(json["data"]["classes"].as_array().unwrap().len(), CLASSES.len());
    assert_eq!(json["data"]["races"][0], RACES[0]);
    assert_eq!(json["data"]["classes"][11], CLASSES[11]);
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_generate_persists_a_valid_character() {
    let (app, store) = common::build_test_app();
    let response = post_empty(app, "/api/v1/characters/generate").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let id = json["id"].as_i64().unwrap();

    let race = json["race"].as_str().unwrap();
    let class = json["character_class"].as_str().unwrap();
    let name = json["name"].as_str().unwrap();
    assert!(RACES.contains(&race));
    assert!(CLASSES.contains(&class));
    assert!((1..=10).contains(&json["level"].as_i64().unwrap()));
    for field in ["strength", "dexterity", "constitution", "intelligence", "wisdom", "charisma"] {
        let score = json[field].as_i64().unwrap();
        assert!((3..=18).contains(&score), "{field} = {score}");
    }
    let background = json["background"].as_str().unwrap();
    assert!(background.contains(name));
    assert!(background.contains(race));
    assert!(background.contains(class));

    assert!(store.find_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_generate_is_deterministic_for_a_seed() {
    let (first, _) = common::build_test_app();
    let (second, _) = common::build_test_app();

    let a = body_json(post_empty(first, "/api/v1/characters/generate").await).await;
    let b = body_json(post_empty(second, "/api/v1/characters/generate").await).await;

    for field in ["name", "race", "character_class", "level", "strength", "charisma", "background"] {
        assert_eq!(a[field], b[field], "{field}");
    }
}
