//! SQLite employee and department store implementation.

use diesel::prelude::*;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::model::{
    DepartmentRow, EmployeeRow, LastInsertRowId, NewEmployeeRow,
};
use crate::adapter::outbound::sqlite::database::schema::{departments, employees};
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::domain::{Department, Employee, EmployeeDraft, EmployeeId, EmployeeListing};
use crate::error::Result;
use crate::port::outbound::store::EmployeeStore;

impl EmployeeStore for SqliteStore {
    async fn list_employees(&self) -> Result<Vec<EmployeeListing>> {
        self.with_conn(|conn| {
            let rows: Vec<(EmployeeRow, String)> = employees::table
                .inner_join(departments::table)
                .select((EmployeeRow::as_select(), departments::name))
                .order(employees::employee_id.asc())
                .load(conn)?;
            Ok(rows
                .into_iter()
                .map(|(row, department_name)| EmployeeListing {
                    employee: Employee::from(row),
                    department_name,
                })
                .collect())
        })
        .await
    }

    async fn list_employee_choices(&self) -> Result<Vec<Employee>> {
        self.with_conn(|conn| {
            let rows: Vec<EmployeeRow> = employees::table
                .select(EmployeeRow::as_select())
                .order(employees::employee_id.asc())
                .load(conn)?;
            Ok(rows.into_iter().map(Employee::from).collect())
        })
        .await
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        self.with_conn(|conn| {
            let rows: Vec<DepartmentRow> = departments::table
                .select(DepartmentRow::as_select())
                .order(departments::department_id.asc())
                .load(conn)?;
            Ok(rows.into_iter().map(Department::from).collect())
        })
        .await
    }

    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<EmployeeId> {
        let row = NewEmployeeRow::from(draft);

        let id = self
            .with_conn(move |conn| {
                let id = conn.transaction(|conn| {
                    diesel::insert_into(employees::table)
                        .values(&row)
                        .execute(conn)?;
                    diesel::sql_query("SELECT last_insert_rowid() AS id")
                        .get_result::<LastInsertRowId>(conn)
                        .map(|row| row.id)
                })?;
                Ok(EmployeeId::new(id))
            })
            .await?;

        debug!(employee_id = %id, "Created employee");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{
        create_pool, run_migrations, SqlitePragmas,
    };
    use crate::domain::DepartmentId;
    use crate::testkit::seed;

    fn setup_store() -> SqliteStore {
        let pool = create_pool(":memory:", 1, SqlitePragmas::default()).unwrap();
        run_migrations(&pool).unwrap();
        seed::reference_data(&pool).unwrap();
        SqliteStore::new(pool)
    }

    #[tokio::test]
    async fn lists_employees_with_department_names() {
        let store = setup_store();

        let employees = store.list_employees().await.unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].employee.full_name(), "Mary Jackson");
        assert_eq!(employees[0].department_name, "Sales");
        assert_eq!(employees[2].department_name, "Support");
    }

    #[tokio::test]
    async fn lists_departments_in_key_order() {
        let store = setup_store();

        let departments = store.list_departments().await.unwrap();
        let names: Vec<_> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Sales", "Support"]);
    }

    #[tokio::test]
    async fn create_employee_appears_in_listing() {
        let store = setup_store();
        let draft = EmployeeDraft {
            first_name: "Katherine".into(),
            last_name: "Johnson".into(),
            department_id: DepartmentId::new(2),
        };

        let id = store.create_employee(&draft).await.unwrap();
        assert_eq!(id, EmployeeId::new(4));

        let choices = store.list_employee_choices().await.unwrap();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[3].last_name, "Johnson");
    }

    #[tokio::test]
    async fn create_employee_rejects_unknown_department() {
        let store = setup_store();
        let draft = EmployeeDraft {
            first_name: "Katherine".into(),
            last_name: "Johnson".into(),
            department_id: DepartmentId::new(9),
        };

        assert!(store.create_employee(&draft).await.is_err());
        assert_eq!(store.list_employee_choices().await.unwrap().len(), 3);
    }
}
