#![allow(dead_code)]

//! Test infrastructure for pf-server API tests

use pf_access::AccessLayer;
use pf_auth::{HashParams, PasswordHasher, TokenService};
use pf_db::{TableStore, connect_in_memory};
use pf_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"server-test-secret-at-least-32-bytes!";
pub const TEST_PASSWORD: &str = "hunter2hunter2";
pub const TEST_MAX_UPLOAD_BYTES: usize = 1024;

/// Create AppState for testing. Keep the TempDir alive for the test.
pub async fn create_test_app_state() -> (AppState, TempDir) {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test database");
    let hasher = PasswordHasher::new(HashParams {
        memory_kib: 64,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build hasher");
    let upload_dir = TempDir::new().expect("Failed to create upload dir");

    let state = AppState {
        access: AccessLayer::new(
            TableStore::new(pool),
            TokenService::new(TEST_SECRET, "https://portfolio.test", 3600),
            hasher,
        ),
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
    };

    (state, upload_dir)
}

pub async fn create_test_app() -> (Router, TempDir) {
    let (state, dir) = create_test_app_state().await;
    (build_router(state), dir)
}

/// Send one request and decode the JSON body (Null when empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Register `name` over HTTP and return a token
pub async fn register_and_login(app: &Router, name: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        &format!("/api/manage/user/{}", name),
        None,
        Some(json!({
            "userName": name,
            "email": format!("{}@example.com", name),
            "password": TEST_PASSWORD,
            "preferences": { "theme": "dark" },
            "firstname": "Test",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = send(
        app,
        "POST",
        "/api/user/auth",
        None,
        Some(json!({ "userName": name, "password": TEST_PASSWORD })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    json["token"].as_str().unwrap().to_string()
}

/// Create a portfolio over HTTP, returning its id
pub async fn create_portfolio(app: &Router, user: &str, token: &str, name: &str) -> i64 {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/manage/portfolio/{}", name),
        Some(token),
        Some(json!({
            "userName": user,
            "description": "Things I built",
            "technologies": ["rust"],
            "config": { "layout": "grid" },
            "template": "classic",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    json["id"].as_i64().unwrap()
}
