use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One published draw. Unique per `(result_date, time_slot)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DrawResult {
    pub id: i64,
    pub result_date: NaiveDate,
    pub time_slot: String,
    pub number_1: i64,
    pub number_2: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Panel account row. Passwords are stored as entered; never serialize
/// this struct into a response.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}
