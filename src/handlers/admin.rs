use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::{Deserialize, Serialize};
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::middleware::AdminSession;
use crate::{BoardError, router::BoardState};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheck {
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// POST /api/admin/login -> verifies credentials and sets the session cookie.
pub async fn login(
    State(state): State<BoardState>,
    jar: PrivateCookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let (Some(username), Some(password)) = (req.username.as_deref(), req.password.as_deref())
    else {
        return Err(BoardError::Validation(
            "Username and password are required".to_string(),
        ));
    };

    let admin = state
        .storage
        .admin_by_username(username)
        .await?
        .filter(|admin| bool::from(admin.password.as_bytes().ct_eq(password.as_bytes())))
        .ok_or(BoardError::Unauthorized("Invalid credentials"))?;

    let session = AdminSession {
        admin_id: admin.id,
        username: admin.username.clone(),
    };
    let jar = jar.add(session.into_cookie(state.insecure_cookie)?);

    info!(username = %admin.username, "admin logged in");
    Ok((
        jar,
        Json(LoginResponse {
            message: "Login successful".to_string(),
            admin: AdminInfo {
                id: admin.id,
                username: admin.username,
            },
        }),
    ))
}

/// GET /api/admin/check -> never fails; reports whether a session is live.
pub async fn check(jar: PrivateCookieJar) -> Json<SessionCheck> {
    match AdminSession::from_jar(&jar) {
        Some(session) => Json(SessionCheck {
            is_admin: true,
            username: Some(session.username),
        }),
        None => Json(SessionCheck {
            is_admin: false,
            username: None,
        }),
    }
}

/// POST /api/admin/change-password (admin)
pub async fn change_password(
    session: AdminSession,
    State(state): State<BoardState>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let (Some(old_password), Some(new_password)) =
        (req.old_password.as_deref(), req.new_password.as_deref())
    else {
        return Err(BoardError::Validation(
            "Both passwords are required".to_string(),
        ));
    };
    if new_password.len() < MIN_PASSWORD_LEN {
        return Err(BoardError::Validation(format!(
            "New password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let admin = state
        .storage
        .admin_by_id(session.admin_id)
        .await?
        .ok_or(BoardError::Unauthorized("Not authorized"))?;
    if !bool::from(admin.password.as_bytes().ct_eq(old_password.as_bytes())) {
        return Err(BoardError::Unauthorized("Current password is incorrect"));
    }

    state
        .storage
        .update_admin_password(session.admin_id, new_password)
        .await?;
    info!(username = %session.username, "admin password changed");
    Ok(Json(json!({ "message": "Password changed successfully" })))
}

/// POST /api/admin/logout -> clears the session cookie unconditionally.
pub async fn logout(jar: PrivateCookieJar) -> impl IntoResponse {
    let jar = jar.remove(AdminSession::removal_cookie());
    (jar, Json(json!({ "message": "Logout successful" })))
}
