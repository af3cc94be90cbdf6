//! Runtime configuration, resolved once from the process environment.
//!
//! `dotenvy` loads a local `.env` before the `CONFIG` static is first
//! touched; every field can be overridden by the matching upper-case
//! environment variable (`DATABASE_URL`, `LISTEN_ADDR`, ...).

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| match Config::load() {
    Ok(cfg) => cfg,
    Err(e) => {
        eprintln!("invalid configuration: {e}");
        std::process::exit(1);
    }
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// sqlx connection string, e.g. `sqlite:drawboard.sqlite`.
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    /// Secret the private session cookie key is derived from. A fresh key
    /// is generated per process when unset, invalidating sessions across
    /// restarts.
    pub session_secret: Option<String>,
    /// Drop the `Secure` cookie attribute for plain-HTTP deployments.
    pub insecure_cookie: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:drawboard.sqlite".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            session_secret: None,
            insecure_cookie: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Env::raw().only(&[
                "database_url",
                "listen_addr",
                "loglevel",
                "session_secret",
                "insecure_cookie",
            ]))
            .extract()
    }
}
