use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::sqlite::database::connection::run_migrations;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Apply pending migrations to the configured database.
///
/// # Errors
/// Returns an error if the config is invalid or a migration fails.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let pool = bootstrap::open_pool(&config.database)?;
    let applied = run_migrations(&pool)?;

    output::section("Migrations");
    output::field("Database", &config.database.url);
    output::field("Applied", applied);
    if applied == 0 {
        output::success("Schema already up to date");
    } else {
        output::success("Schema migrated");
    }
    Ok(())
}
