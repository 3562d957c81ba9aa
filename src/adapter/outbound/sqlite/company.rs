//! SQLite company store implementation.

use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::model::CompanyRow;
use crate::adapter::outbound::sqlite::database::schema::companies;
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::domain::Company;
use crate::error::Result;
use crate::port::outbound::store::CompanyStore;

impl CompanyStore for SqliteStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.with_conn(|conn| {
            let rows: Vec<CompanyRow> = companies::table
                .select(CompanyRow::as_select())
                .order(companies::name.asc())
                .load(conn)?;
            Ok(rows.into_iter().map(Company::from).collect())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{
        create_pool, run_migrations, SqlitePragmas,
    };
    use crate::domain::CompanyId;
    use crate::testkit::seed;

    #[tokio::test]
    async fn lists_companies_by_name() {
        let pool = create_pool(":memory:", 1, SqlitePragmas::default()).unwrap();
        run_migrations(&pool).unwrap();
        seed::reference_data(&pool).unwrap();
        let store = SqliteStore::new(pool);

        let companies = store.list_companies().await.unwrap();
        let names: Vec<_> = companies.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
        assert_eq!(companies[0].id, CompanyId::new(1));
    }

    #[tokio::test]
    async fn empty_database_lists_nothing() {
        let pool = create_pool(":memory:", 1, SqlitePragmas::default()).unwrap();
        run_migrations(&pool).unwrap();
        let store = SqliteStore::new(pool);

        assert!(store.list_companies().await.unwrap().is_empty());
    }
}
