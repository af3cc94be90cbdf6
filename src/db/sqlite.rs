use crate::db::models::{AdminUser, ContactSubmission, DrawResult};
use crate::db::schema::SQLITE_INIT;
use crate::error::BoardError;
use crate::types::slots;
use chrono::NaiveDate;
use sqlx::{Pool, QueryBuilder, Sqlite};
use std::cmp::Reverse;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

const RESULT_COLUMNS: &str = "id, result_date, time_slot, number_1, number_2";
const CONTACT_COLUMNS: &str = "id, name, email, phone, message, created_at";

#[derive(Clone)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), BoardError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the default `admin`/`admin123` account when the table is
    /// empty. Returns whether a row was created.
    pub async fn seed_default_admin(&self) -> Result<bool, BoardError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin_users")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(false);
        }
        sqlx::query("INSERT INTO admin_users (username, password) VALUES (?, ?)")
            .bind("admin")
            .bind("admin123")
            .execute(&self.pool)
            .await?;
        Ok(true)
    }

    pub async fn results_for_date(&self, date: NaiveDate) -> Result<Vec<DrawResult>, BoardError> {
        let mut rows: Vec<DrawResult> = sqlx::query_as(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE result_date = ?"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        sort_board_order(&mut rows);
        debug!(%date, count = rows.len(), "fetched results for date");
        Ok(rows)
    }

    /// Rows strictly before `date`, newest first, capped at `limit`.
    pub async fn results_before(
        &self,
        date: NaiveDate,
        limit: i64,
    ) -> Result<Vec<DrawResult>, BoardError> {
        // The secondary keys make the LIMIT cutoff deterministic when the
        // boundary date only partially fits.
        let mut rows: Vec<DrawResult> = sqlx::query_as(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE result_date < ? \
             ORDER BY result_date DESC, time_slot, id LIMIT ?"
        ))
        .bind(date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        sort_board_order(&mut rows);
        Ok(rows)
    }

    /// Rows on or after `since`, newest first.
    pub async fn results_since(&self, since: NaiveDate) -> Result<Vec<DrawResult>, BoardError> {
        let mut rows: Vec<DrawResult> = sqlx::query_as(&format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE result_date >= ? \
             ORDER BY result_date DESC"
        ))
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        sort_board_order(&mut rows);
        Ok(rows)
    }

    /// Filtered search; `number` matches either drawn number.
    pub async fn search_results(
        &self,
        date: Option<NaiveDate>,
        number: Option<i64>,
    ) -> Result<Vec<DrawResult>, BoardError> {
        let mut qb = QueryBuilder::new(format!(
            "SELECT {RESULT_COLUMNS} FROM results WHERE 1=1"
        ));
        if let Some(date) = date {
            qb.push(" AND result_date = ").push_bind(date);
        }
        if let Some(number) = number {
            qb.push(" AND (number_1 = ")
                .push_bind(number)
                .push(" OR number_2 = ")
                .push_bind(number)
                .push(")");
        }
        qb.push(" ORDER BY result_date DESC");
        let mut rows: Vec<DrawResult> = qb.build_query_as().fetch_all(&self.pool).await?;
        sort_board_order(&mut rows);
        Ok(rows)
    }

    /// Upsert by the unique `(result_date, time_slot)` key. The admin panel
    /// edits a published draw by re-submitting the same date and slot.
    pub async fn upsert_result(
        &self,
        date: NaiveDate,
        slot: &str,
        number_1: i64,
        number_2: i64,
    ) -> Result<DrawResult, BoardError> {
        let row: DrawResult = sqlx::query_as(&format!(
            "INSERT INTO results (result_date, time_slot, number_1, number_2) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT(result_date, time_slot) DO UPDATE SET \
                 number_1 = excluded.number_1, \
                 number_2 = excluded.number_2 \
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(date)
        .bind(slot)
        .bind(number_1)
        .bind(number_2)
        .fetch_one(&self.pool)
        .await?;
        debug!(%date, slot, "stored result");
        Ok(row)
    }

    /// Delete by id. Returns the number of rows removed (0 or 1).
    pub async fn delete_result(&self, id: i64) -> Result<u64, BoardError> {
        let done = sqlx::query("DELETE FROM results WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }

    pub async fn insert_contact(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        message: &str,
    ) -> Result<ContactSubmission, BoardError> {
        let row: ContactSubmission = sqlx::query_as(&format!(
            "INSERT INTO contact_submissions (name, email, phone, message) \
             VALUES (?, ?, ?, ?) \
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(message)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, BoardError> {
        let rows = sqlx::query_as(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_submissions \
             ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn admin_by_username(&self, username: &str) -> Result<Option<AdminUser>, BoardError> {
        let row = sqlx::query_as("SELECT id, username, password FROM admin_users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn admin_by_id(&self, id: i64) -> Result<Option<AdminUser>, BoardError> {
        let row = sqlx::query_as("SELECT id, username, password FROM admin_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update_admin_password(&self, id: i64, password: &str) -> Result<(), BoardError> {
        sqlx::query("UPDATE admin_users SET password = ? WHERE id = ?")
            .bind(password)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// Board order: newest date first, slots in chronological position within a
/// day. Slot labels sort wrong as plain strings ("10:30 AM" after "01:30 PM").
fn sort_board_order(rows: &mut [DrawResult]) {
    rows.sort_by_key(|r| (Reverse(r.result_date), slots::rank(&r.time_slot), r.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::DrawResult;

    fn row(date: &str, slot: &str) -> DrawResult {
        DrawResult {
            id: 0,
            result_date: date.parse().expect("test date"),
            time_slot: slot.to_string(),
            number_1: 1,
            number_2: 2,
        }
    }

    #[test]
    fn board_order_is_date_desc_then_slot_chronological() {
        let mut rows = vec![
            row("2026-08-23", "01:30 PM"),
            row("2026-08-24", "09:00 PM"),
            row("2026-08-24", "10:30 AM"),
            row("2026-08-23", "10:30 AM"),
        ];
        sort_board_order(&mut rows);
        let keys: Vec<(String, &str)> = rows
            .iter()
            .map(|r| (r.result_date.to_string(), r.time_slot.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2026-08-24".to_string(), "10:30 AM"),
                ("2026-08-24".to_string(), "09:00 PM"),
                ("2026-08-23".to_string(), "10:30 AM"),
                ("2026-08-23".to_string(), "01:30 PM"),
            ]
        );
    }
}
