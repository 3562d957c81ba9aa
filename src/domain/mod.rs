//! Storage-agnostic types for customers, companies and staff.
//!
//! - [`id`] - Integer key newtypes
//! - [`customer`] - Customers, drafts and the search filter
//! - [`company`] - Companies
//! - [`employee`] - Employees and departments
//! - [`error`] - Validation errors

pub mod company;
pub mod customer;
pub mod employee;
pub mod error;
pub mod id;

pub use company::Company;
pub use customer::{Customer, CustomerDraft, CustomerFilter, CustomerListing};
pub use employee::{Department, Employee, EmployeeDraft, EmployeeListing};
pub use error::DomainError;
pub use id::{CompanyId, CustomerId, DepartmentId, EmployeeId};

/// Trim a required text field, rejecting it when nothing is left.
pub(crate) fn required_text(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}
