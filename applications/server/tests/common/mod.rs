//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use starter_core::UserRepository;
use starter_server::{build_router, services::UserService, state::AppState};
use starter_storage::{PoolSettings, SqliteUserRepository};
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router backed by a real SQLite file that lives as long as this value
pub struct TestApp {
    pub router: Router,
    _temp_dir: TempDir,
}

impl TestApp {
    /// Create an app over a fresh database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = starter_storage::create_pool(&db_url, &PoolSettings::default())
            .await
            .unwrap();
        starter_storage::run_migrations(&pool).await.unwrap();

        Self {
            router: router_for(Arc::new(SqliteUserRepository::new(pool))),
            _temp_dir: temp_dir,
        }
    }

    /// Send one request and return status plus parsed JSON body (Null when empty)
    pub async fn send(&self, request: Request<Body>) -> (axum::http::StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        into_status_and_json(response).await
    }
}

/// Router over an arbitrary repository with a generous timeout
pub fn router_for(repository: Arc<dyn UserRepository>) -> Router {
    router_with_timeout(repository, Duration::from_secs(30))
}

pub fn router_with_timeout(repository: Arc<dyn UserRepository>, timeout: Duration) -> Router {
    let state = AppState::new(Arc::new(UserService::new(repository)));
    build_router(state, timeout, &[])
}

pub async fn into_status_and_json(
    response: Response<Body>,
) -> (axum::http::StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    raw_json_request(method, uri, &body.to_string())
}

pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test payloads
pub mod fixtures {
    pub const TEST_USERNAME: &str = "alice";
    pub const TEST_EMAIL: &str = "a@x.com";
}
