pub mod auth;

pub use auth::{AdminSession, SESSION_COOKIE};
