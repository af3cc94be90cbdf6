#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

const TEST_SESSION_SECRET: &str = "an-integration-test-secret-0123456789abcdef";

/// Build a router over a fresh temp SQLite database. The caller removes the
/// returned file when done.
pub async fn spawn_app(tag: &str) -> (Router, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "drawboard-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let storage = drawboard::db::connect(&database_url)
        .await
        .expect("failed to open test database");

    let key = drawboard::router::session_key(Some(TEST_SESSION_SECRET));
    let state = drawboard::router::BoardState::new(storage, key, true);
    (drawboard::router::board_router(state), temp_path)
}

pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("failed to build request");

    app.clone().oneshot(request).await.expect("request failed")
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

/// Cookie header value carrying every cookie the response set.
pub fn cookies_from(resp: &Response<Body>) -> String {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Log in with the seeded default account and return the session cookie.
pub async fn login_default_admin(app: &Router) -> String {
    let resp = send_json(
        app,
        "POST",
        "/api/admin/login",
        None,
        Some(json!({ "username": "admin", "password": "admin123" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK, "seeded admin login failed");
    let cookie = cookies_from(&resp);
    assert!(!cookie.is_empty(), "login response set no cookie");
    cookie
}
