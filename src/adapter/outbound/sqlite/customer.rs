//! SQLite customer store implementation.
//!
//! Create and update touch two tables (`customers` and the
//! `employee_customer` join table) and run inside a single transaction, so
//! a failed assignment insert leaves no half-written customer behind.

use diesel::prelude::*;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::model::{
    CustomerFieldsRow, CustomerRow, EmployeeCustomerRow, LastInsertRowId,
};
use crate::adapter::outbound::sqlite::database::schema::{
    companies, customers, employee_customer, sales,
};
use crate::adapter::outbound::sqlite::store::SqliteStore;
use crate::domain::{
    Customer, CustomerDraft, CustomerFilter, CustomerId, CustomerListing, EmployeeId,
};
use crate::error::Result;
use crate::port::outbound::store::CustomerStore;

/// Insert one join row per employee.
fn insert_assignments(
    conn: &mut SqliteConnection,
    customer_id: i32,
    employees: &[EmployeeId],
) -> QueryResult<()> {
    for employee in employees {
        let row = EmployeeCustomerRow {
            employee_id: employee.get(),
            customer_id,
        };
        diesel::insert_into(employee_customer::table)
            .values(&row)
            .execute(conn)?;
    }
    Ok(())
}

/// Load customers joined with companies, appending one predicate per
/// criterion present in the filter.
fn load_listings(
    conn: &mut SqliteConnection,
    filter: &CustomerFilter,
) -> QueryResult<Vec<(CustomerRow, String)>> {
    let mut query = customers::table
        .inner_join(companies::table)
        .select((CustomerRow::as_select(), companies::name))
        .into_boxed();

    if let Some(first_name) = filter.first_name() {
        query = query.filter(customers::first_name.eq(first_name.to_string()));
    }
    if let Some(last_name) = filter.last_name() {
        query = query.filter(customers::last_name.eq(last_name.to_string()));
    }

    query.order(customers::customer_id.asc()).load(conn)
}

impl CustomerStore for SqliteStore {
    async fn list_customers(&self, filter: &CustomerFilter) -> Result<Vec<CustomerListing>> {
        debug!(
            unfiltered = filter.is_empty(),
            first_name = ?filter.first_name(),
            last_name = ?filter.last_name(),
            "Searching customers"
        );
        let filter = filter.clone();
        self.with_conn(move |conn| {
            let rows = load_listings(conn, &filter)?;
            Ok(rows
                .into_iter()
                .map(|(row, company_name)| CustomerListing {
                    customer: Customer::from(row),
                    company_name,
                })
                .collect())
        })
        .await
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.with_conn(move |conn| {
            let row: Option<CustomerRow> = customers::table
                .find(id.get())
                .select(CustomerRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Customer::from))
        })
        .await
    }

    async fn assigned_employees(&self, id: CustomerId) -> Result<Vec<EmployeeId>> {
        self.with_conn(move |conn| {
            let ids: Vec<i32> = employee_customer::table
                .filter(employee_customer::customer_id.eq(id.get()))
                .select(employee_customer::employee_id)
                .order(employee_customer::employee_id.asc())
                .load(conn)?;
            Ok(ids.into_iter().map(EmployeeId::new).collect())
        })
        .await
    }

    async fn create_customer(
        &self,
        draft: &CustomerDraft,
        employees: &[EmployeeId],
    ) -> Result<CustomerId> {
        let row = CustomerFieldsRow::from(draft);
        let employees = employees.to_vec();

        let id = self
            .with_conn(move |conn| {
                let id = conn.transaction(|conn| {
                    diesel::insert_into(customers::table)
                        .values(&row)
                        .execute(conn)?;

                    let id: i32 = diesel::sql_query("SELECT last_insert_rowid() AS id")
                        .get_result::<LastInsertRowId>(conn)
                        .map(|row| row.id)?;

                    insert_assignments(conn, id, &employees)?;

                    Ok::<i32, diesel::result::Error>(id)
                })?;
                Ok(CustomerId::new(id))
            })
            .await?;

        debug!(customer_id = %id, "Created customer");
        Ok(id)
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
        employees: &[EmployeeId],
    ) -> Result<bool> {
        let changes = CustomerFieldsRow::from(draft);
        let employees = employees.to_vec();

        let updated = self
            .with_conn(move |conn| {
                let updated = conn.transaction(|conn| {
                    let updated = diesel::update(customers::table.find(id.get()))
                        .set(&changes)
                        .execute(conn)?;
                    if updated == 0 {
                        return Ok(false);
                    }

                    // Replace the whole assignment set with the submitted one.
                    diesel::delete(
                        employee_customer::table
                            .filter(employee_customer::customer_id.eq(id.get())),
                    )
                    .execute(conn)?;
                    insert_assignments(conn, id.get(), &employees)?;

                    Ok::<bool, diesel::result::Error>(true)
                })?;
                Ok(updated)
            })
            .await?;

        debug!(customer_id = %id, updated, "Updated customer");
        Ok(updated)
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<bool> {
        let deleted = self
            .with_conn(move |conn| {
                let deleted = conn.transaction(|conn| {
                    diesel::delete(sales::table.filter(sales::customer_id.eq(id.get())))
                        .execute(conn)?;
                    diesel::delete(
                        employee_customer::table
                            .filter(employee_customer::customer_id.eq(id.get())),
                    )
                    .execute(conn)?;
                    let deleted = diesel::delete(customers::table.find(id.get())).execute(conn)?;
                    Ok::<bool, diesel::result::Error>(deleted > 0)
                })?;
                Ok(deleted)
            })
            .await?;

        debug!(customer_id = %id, deleted, "Deleted customer");
        Ok(deleted)
    }
}
