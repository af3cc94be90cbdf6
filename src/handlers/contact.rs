use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use crate::db::ContactSubmission;
use crate::middleware::AdminSession;
use crate::{BoardError, router::BoardState};

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// POST /api/contact (public)
pub async fn submit_contact(
    State(state): State<BoardState>,
    Json(req): Json<ContactRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let name = required(req.name.as_deref());
    let email = required(req.email.as_deref());
    let message = required(req.message.as_deref());
    let (Some(name), Some(email), Some(message)) = (name, email, message) else {
        return Err(BoardError::Validation(
            "Name, email, and message are required".to_string(),
        ));
    };
    let phone = required(req.phone.as_deref());

    let row = state
        .storage
        .insert_contact(name, email, phone, message)
        .await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/contact (admin) -> all submissions, newest first.
pub async fn list_contacts(
    _session: AdminSession,
    State(state): State<BoardState>,
) -> Result<Json<Vec<ContactSubmission>>, BoardError> {
    Ok(Json(state.storage.list_contacts().await?))
}

/// Treat absent and blank values alike, trimming what remains.
fn required(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
