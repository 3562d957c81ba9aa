use crm_desk::adapter::outbound::sqlite::database::connection::{
    create_pool, run_migrations, DbPool, SqlitePragmas,
};
use crm_desk::adapter::outbound::sqlite::SqliteStore;
use crm_desk::testkit::seed;
use tempfile::TempDir;

/// Temporary on-disk SQLite database, migrated and seeded with the
/// reference companies, departments and employees.
pub struct TempDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("crm-desk-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let url = dir.path().join("desk.db").to_string_lossy().into_owned();

        let pool = create_pool(&url, 4, SqlitePragmas::default()).expect("create sqlite pool");
        run_migrations(&pool).expect("run migrations");
        seed::reference_data(&pool).expect("seed reference data");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(self.pool.clone())
    }
}
