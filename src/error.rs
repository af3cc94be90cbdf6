use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum BoardError {
    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("Not found: {0}")]
    NotFound(&'static str),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            BoardError::Database(e) => {
                error!(error = %e, "database error while handling request");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            BoardError::Json(e) => {
                error!(error = %e, "serialization error while handling request");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
            BoardError::Validation(message) => {
                let body = ApiErrorBody {
                    code: "INVALID_INPUT".to_string(),
                    message,
                };
                (StatusCode::BAD_REQUEST, body)
            }
            BoardError::Unauthorized(message) => {
                let body = ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: message.to_string(),
                };
                (StatusCode::UNAUTHORIZED, body)
            }
            BoardError::NotFound(message) => {
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: message.to_string(),
                };
                (StatusCode::NOT_FOUND, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
