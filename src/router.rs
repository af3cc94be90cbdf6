use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::Key;
use chrono::Utc;
use serde_json::{Value, json};
use tracing::warn;

use crate::db::Storage;
use crate::handlers::{admin, contact, results};

/// Generous for JSON forms; nothing on this API legitimately needs more.
const BODY_LIMIT: usize = 64 * 1024;

/// `Key::derive_from` panics on shorter input.
const MIN_SECRET_LEN: usize = 32;

#[derive(Clone)]
pub struct BoardState {
    pub storage: Storage,
    pub insecure_cookie: bool,
    key: Key,
}

impl BoardState {
    pub fn new(storage: Storage, key: Key, insecure_cookie: bool) -> Self {
        Self {
            storage,
            insecure_cookie,
            key,
        }
    }
}

impl FromRef<BoardState> for Key {
    fn from_ref(state: &BoardState) -> Key {
        state.key.clone()
    }
}

/// Private-cookie key for the admin session. Derived from the configured
/// secret so sessions survive restarts; otherwise generated per process.
pub fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) if secret.len() >= MIN_SECRET_LEN => Key::derive_from(secret.as_bytes()),
        Some(_) => {
            warn!(
                "session secret shorter than {MIN_SECRET_LEN} bytes; generating a per-process key"
            );
            Key::generate()
        }
        None => Key::generate(),
    }
}

pub fn board_router(state: BoardState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/results/today", get(results::today_results))
        .route("/api/results/previous", get(results::previous_results))
        .route("/api/results/recent", get(results::recent_results))
        .route("/api/results/search", get(results::search_results))
        .route("/api/results", post(results::create_result))
        .route("/api/results/{id}", delete(results::delete_result))
        .route(
            "/api/contact",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/check", get(admin::check))
        .route("/api/admin/change-password", post(admin::change_password))
        .route("/api/admin/logout", post(admin::logout))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}
