//! Tests for `AppError` -> HTTP response mapping.
//!
//! Most cases call `IntoResponse` directly on `AppError` values; the last
//! section drives the router over a store that always fails.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use charforge_core::error::{CoreError, FieldViolation};
use http_body_util::BodyExt;
use serde_json::json;

use charforge_api::error::AppError;
use common::{body_json, get, post_empty, post_json, UnavailableStore};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with NOT_FOUND code
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::not_found(42)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Character with id 42 not found");
    assert!(json.get("details").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with per-field details
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_validation_error_returns_400_with_details() {
    let err = AppError::Core(CoreError::Validation(vec![
        FieldViolation::new("name", "Name is required"),
        FieldViolation::new("level", "Level must be between 1 and 20"),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "Validation failed: Name is required; Level must be between 1 and 20"
    );
    assert_eq!(
        json["details"],
        json!([
            {"field": "name", "message": "Name is required"},
            {"field": "level", "message": "Level must be between 1 and 20"}
        ])
    );
}

// ---------------------------------------------------------------------------
// Test: database errors map to 500 and sanitize the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_database_error_returns_500() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
    assert!(
        !json.to_string().contains("pool"),
        "Database error response must not leak driver details"
    );
}

// ---------------------------------------------------------------------------
// Test: storage failures surface as sanitized 500s through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unavailable_store_yields_500_on_api_routes() {
    let store = Arc::new(UnavailableStore);

    let response = get(common::build_app_with_store(store.clone()), "/api/v1/characters").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");

    let response = post_empty(
        common::build_app_with_store(store.clone()),
        "/api/v1/characters/generate",
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    // The store is down, yet an invalid body still gets its 400.
    let app = common::build_app_with_store(Arc::new(UnavailableStore));
    let response = post_json(app, "/api/v1/characters", json!({"name": "Al"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<_> = json["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["race", "character_class"]);
}
