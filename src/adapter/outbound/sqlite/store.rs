//! SQLite-backed store shared by the customer, company and employee ports.

use diesel::SqliteConnection;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::error::{Error, Result};

/// SQLite store.
///
/// Implements [`CustomerStore`](crate::port::CustomerStore),
/// [`CompanyStore`](crate::port::CompanyStore) and
/// [`EmployeeStore`](crate::port::EmployeeStore). Diesel is synchronous, so
/// every call checks out a pooled connection on the blocking thread pool.
#[derive(Clone)]
pub struct SqliteStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteStore {
    /// Create a new SQLite store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    #[must_use]
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run `f` with a pooled connection off the async executor.
    pub(crate) async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| Error::Connection(e.to_string()))?
    }
}
