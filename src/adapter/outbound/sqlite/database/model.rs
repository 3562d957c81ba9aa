//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{companies, customers, departments, employee_customer, employees, sales};
use crate::domain::{
    Company, CompanyId, Customer, CustomerDraft, CustomerId, Department, DepartmentId, Employee,
    EmployeeDraft, EmployeeId,
};

/// Database row for a customer (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CustomerRow {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: i32,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: CustomerId::new(row.customer_id),
            first_name: row.first_name,
            last_name: row.last_name,
            rating: row.rating,
            company_id: CompanyId::new(row.company_id),
        }
    }
}

/// Customer columns written by create and update.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = customers)]
pub struct CustomerFieldsRow {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: i32,
}

impl From<&CustomerDraft> for CustomerFieldsRow {
    fn from(draft: &CustomerDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            rating: draft.rating,
            company_id: draft.company_id.get(),
        }
    }
}

/// Database row for a company.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = companies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CompanyRow {
    pub company_id: i32,
    pub name: String,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: CompanyId::new(row.company_id),
            name: row.name,
        }
    }
}

/// Database row for a department.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DepartmentRow {
    pub department_id: i32,
    pub name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: DepartmentId::new(row.department_id),
            name: row.name,
        }
    }
}

/// Database row for an employee (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub employee_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub department_id: i32,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: EmployeeId::new(row.employee_id),
            first_name: row.first_name,
            last_name: row.last_name,
            department_id: DepartmentId::new(row.department_id),
        }
    }
}

/// Database row for an employee (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    pub first_name: String,
    pub last_name: String,
    pub department_id: i32,
}

impl From<&EmployeeDraft> for NewEmployeeRow {
    fn from(draft: &EmployeeDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            department_id: draft.department_id.get(),
        }
    }
}

/// Join row linking an employee to a customer they serve.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, Copy)]
#[diesel(table_name = employee_customer)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeCustomerRow {
    pub employee_id: i32,
    pub customer_id: i32,
}

/// Database row for a sale (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sales)]
pub struct NewSaleRow {
    pub customer_id: i32,
    pub employee_id: i32,
    pub amount_cents: i64,
    pub sold_at: String,
}

/// Result of `SELECT last_insert_rowid()`.
#[derive(QueryableByName, Debug)]
pub struct LastInsertRowId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub id: i32,
}
