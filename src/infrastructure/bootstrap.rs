//! Composition root: turns a [`Config`] into a running store and router.

use axum::Router;
use tracing::info;

use crate::adapter::inbound::http::{build_router, AppState};
use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use crate::adapter::outbound::sqlite::SqliteStore;
use crate::error::Result;
use crate::infrastructure::config::database::DatabaseConfig;

/// Open the connection pool described by the database section.
///
/// # Errors
/// Returns an error if the pool cannot hand out a connection.
pub fn open_pool(config: &DatabaseConfig) -> Result<DbPool> {
    create_pool(&config.url, config.pool_size, config.pragmas())
}

/// Open the pool and bring the schema up to date.
///
/// # Errors
/// Returns an error if the pool cannot be opened or a migration fails.
pub fn migrated_pool(config: &DatabaseConfig) -> Result<DbPool> {
    let pool = open_pool(config)?;
    let applied = run_migrations(&pool)?;
    info!(url = %config.url, applied, "Database ready");
    Ok(pool)
}

/// Build the router on top of a migrated SQLite store.
///
/// # Errors
/// Same as [`migrated_pool`].
pub fn build_app(config: &DatabaseConfig) -> Result<Router> {
    let store = SqliteStore::new(migrated_pool(config)?);
    Ok(build_router(AppState::new(store)))
}
