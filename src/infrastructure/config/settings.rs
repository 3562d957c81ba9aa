//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the database location (`DATABASE_URL`), so credentials and
//! deployment paths can stay out of the file.
//!
//! # Example
//!
//! ```no_run
//! use crm_desk::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use super::database::DatabaseConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// SQLite location and pool sizing.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies the `DATABASE_URL` override from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_database_url(content, std::env::var(DATABASE_URL_ENV).ok())
    }

    /// Parse configuration from TOML content with an explicit database URL
    /// override instead of reading the environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::parse_toml`].
    pub fn parse_toml_with_database_url(
        content: &str,
        database_url: Option<String>,
    ) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(url) = database_url.filter(|url| !url.trim().is_empty()) {
            config.database.url = url;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`], except for a missing file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = self.server.bind.parse::<SocketAddr>() {
            return Err(ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into());
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "url",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pool_size",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        self.logging.validate()?;
        Ok(())
    }

    /// The validated listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
