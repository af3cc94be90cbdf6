//! SQL DDL for initializing the result board database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema:
/// - `admin_users`: panel accounts, `username` UNIQUE
/// - `results`: one published draw per `(result_date, time_slot)`
/// - `contact_submissions`: inbound contact-form messages
///
/// `result_date` is ISO `YYYY-MM-DD` text, so range comparisons and
/// ordering on it behave like dates. Timestamps come from
/// `CURRENT_TIMESTAMP`.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS admin_users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    result_date TEXT NOT NULL,
    time_slot TEXT NOT NULL,
    number_1 INTEGER NOT NULL,
    number_2 INTEGER NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    UNIQUE(result_date, time_slot)
);

CREATE INDEX IF NOT EXISTS idx_results_result_date ON results(result_date);

CREATE TABLE IF NOT EXISTS contact_submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NULL,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;
