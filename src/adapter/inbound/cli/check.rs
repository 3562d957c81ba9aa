use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, DATABASE_URL_ENV};

/// Validate the configuration file without starting the server.
///
/// # Errors
/// Returns an error if the file is missing, malformed or invalid.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Bind", &config.server.bind);
    output::field("Database", &config.database.url);
    output::field("Pool size", config.database.pool_size);
    output::field("Log level", &config.logging.level);
    output::field("Log format", config.logging.format.as_str());

    if std::env::var_os(DATABASE_URL_ENV).is_some() {
        output::warning("DATABASE_URL is set and overrides database.url");
    }

    Ok(())
}
