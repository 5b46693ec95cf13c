#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use charforge_core::character::ValidCharacter;
use charforge_core::generator::CharacterGenerator;
use charforge_core::types::DbId;
use charforge_db::models::character::Character;
use charforge_db::store::{CharacterStore, MemoryCharacterStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

use charforge_api::config::{LogFormat, ServerConfig};
use charforge_api::router::build_app_router;
use charforge_api::state::AppState;

/// Seed used by every test generator, so generated records are stable.
pub const TEST_SEED: u64 = 7;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        database_max_connections: 1,
        generator_seed: Some(TEST_SEED),
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_app_with_store(store: Arc<dyn CharacterStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        generator: Arc::new(CharacterGenerator::new(config.generator_seed)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).unwrap()
}

/// Router plus a handle on its (initially empty) in-memory store.
pub fn build_test_app() -> (Router, Arc<MemoryCharacterStore>) {
    let store = Arc::new(MemoryCharacterStore::new());
    (build_app_with_store(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(
        app,
        Request::delete(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body. Values must already be
/// URL-safe.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// A store whose backend is down
// ---------------------------------------------------------------------------

pub struct UnavailableStore;

fn unavailable<T>() -> Result<T, sqlx::Error> {
    Err(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl CharacterStore for UnavailableStore {
    async fn create(&self, _input: &ValidCharacter) -> Result<Character, sqlx::Error> {
        unavailable()
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Character>, sqlx::Error> {
        unavailable()
    }

    async fn list(&self) -> Result<Vec<Character>, sqlx::Error> {
        unavailable()
    }

    async fn update(
        &self,
        _id: DbId,
        _input: &ValidCharacter,
    ) -> Result<Option<Character>, sqlx::Error> {
        unavailable()
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        unavailable()
    }

    async fn find_by_race(&self, _race: &str) -> Result<Vec<Character>, sqlx::Error> {
        unavailable()
    }

    async fn find_by_class(&self, _class: &str) -> Result<Vec<Character>, sqlx::Error> {
        unavailable()
    }

    async fn search_by_name(&self, _needle: &str) -> Result<Vec<Character>, sqlx::Error> {
        unavailable()
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        unavailable()
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}
