use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::BoardError;

pub const SESSION_COOKIE: &str = "board_session";

const SESSION_TTL: Duration = Duration::hours(12);

/// Admin identity carried in the encrypted session cookie. Extracting it
/// from a request enforces authentication: handlers that take an
/// `AdminSession` reject unauthenticated callers with 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub admin_id: i64,
    pub username: String,
}

impl AdminSession {
    /// Decode the session from the jar, if present and well-formed. The
    /// jar already rejects cookies that fail decryption.
    pub fn from_jar(jar: &PrivateCookieJar) -> Option<Self> {
        let cookie = jar.get(SESSION_COOKIE)?;
        serde_json::from_str(cookie.value()).ok()
    }

    pub fn into_cookie(self, insecure: bool) -> Result<Cookie<'static>, BoardError> {
        let value = serde_json::to_string(&self)?;
        Ok(Cookie::build(Cookie::new(SESSION_COOKIE, value))
            .path("/")
            .http_only(true)
            .secure(!insecure)
            .same_site(SameSite::Lax)
            .max_age(SESSION_TTL)
            .build())
    }

    pub fn removal_cookie() -> Cookie<'static> {
        Cookie::build(Cookie::new(SESSION_COOKIE, ""))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|never| match never {})?;
        Self::from_jar(&jar)
            .ok_or_else(|| BoardError::Unauthorized("Not authorized").into_response())
    }
}
