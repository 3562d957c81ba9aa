//! Database configuration.

use serde::Deserialize;

use crate::adapter::outbound::sqlite::database::connection::SqlitePragmas;

/// SQLite database configuration.
///
/// The `DATABASE_URL` environment variable overrides `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file path or URL.
    #[serde(default = "default_url")]
    pub url: String,
    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    /// How long a connection waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,
}

fn default_url() -> String {
    "crm-desk.db".to_string()
}

const fn default_pool_size() -> u32 {
    5
}

const fn default_busy_timeout_ms() -> u32 {
    5000
}

impl DatabaseConfig {
    /// Pragmas for every pooled connection.
    #[must_use]
    pub fn pragmas(&self) -> SqlitePragmas {
        SqlitePragmas {
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}
