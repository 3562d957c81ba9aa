//! Logging configuration and initialization.

use std::str::FromStr;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

/// Logging configuration.
///
/// `level` is either a bare level (`info`, `debug`, ...) or a full
/// `EnvFilter` directive list such as `info,crm_desk=debug`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Reject a level that would otherwise be read as a target name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.level.trim();
        let valid = if level.contains(['=', ',']) {
            EnvFilter::try_new(level).is_ok()
        } else {
            LevelFilter::from_str(level).is_ok()
        };
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("unknown log level '{}'", self.level),
            })
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format {
            LogFormat::Json => fmt().json().with_env_filter(filter).init(),
            LogFormat::Pretty => fmt().with_env_filter(filter).init(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}
