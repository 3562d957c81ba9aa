//! Fixture rows for a freshly migrated database.
//!
//! | table         | rows                                                        |
//! |---------------|-------------------------------------------------------------|
//! | `companies`   | 1 Acme, 2 Globex, 3 Initech                                 |
//! | `departments` | 1 Sales, 2 Support                                          |
//! | `employees`   | 1 Mary Jackson (Sales), 2 Dorothy Vaughan (Sales), 3 Grace Hopper (Support) |

use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::adapter::outbound::sqlite::database::connection::DbPool;
use crate::adapter::outbound::sqlite::database::model::NewSaleRow;
use crate::adapter::outbound::sqlite::database::schema::sales;
use crate::domain::{CustomerId, EmployeeId};
use crate::error::Result;

/// Insert the reference companies, departments and employees.
pub fn reference_data(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get()?;
    conn.batch_execute(
        "INSERT INTO companies (company_id, name) VALUES (1, 'Acme'), (2, 'Globex'), (3, 'Initech');
         INSERT INTO departments (department_id, name) VALUES (1, 'Sales'), (2, 'Support');
         INSERT INTO employees (employee_id, first_name, last_name, department_id) VALUES
             (1, 'Mary', 'Jackson', 1),
             (2, 'Dorothy', 'Vaughan', 1),
             (3, 'Grace', 'Hopper', 2);",
    )?;
    Ok(())
}

/// Record a sale against a customer.
pub fn sale(
    pool: &DbPool,
    customer: CustomerId,
    employee: EmployeeId,
    amount_cents: i64,
) -> Result<()> {
    let mut conn = pool.get()?;
    diesel::insert_into(sales::table)
        .values(&NewSaleRow {
            customer_id: customer.get(),
            employee_id: employee.get(),
            amount_cents,
            sold_at: "2024-03-01T09:30:00Z".to_string(),
        })
        .execute(&mut conn)?;
    Ok(())
}

/// Number of sales recorded against a customer.
pub fn sale_count(pool: &DbPool, customer: CustomerId) -> Result<i64> {
    let mut conn = pool.get()?;
    let count = sales::table
        .filter(sales::customer_id.eq(customer.get()))
        .count()
        .get_result(&mut conn)?;
    Ok(count)
}
