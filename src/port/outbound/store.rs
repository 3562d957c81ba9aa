//! Persistence ports for customers, companies and staff.

use std::future::Future;

use crate::domain::{
    Company, Customer, CustomerDraft, CustomerFilter, CustomerId, CustomerListing, Department,
    Employee, EmployeeDraft, EmployeeId, EmployeeListing,
};
use crate::error::Result;

/// Storage operations for customers and their employee assignments.
pub trait CustomerStore: Send + Sync {
    /// List customers joined with their company, narrowed by the filter.
    fn list_customers(
        &self,
        filter: &CustomerFilter,
    ) -> impl Future<Output = Result<Vec<CustomerListing>>> + Send;

    /// Get a customer by ID.
    fn get_customer(&self, id: CustomerId) -> impl Future<Output = Result<Option<Customer>>> + Send;

    /// IDs of the employees currently assigned to a customer.
    fn assigned_employees(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Vec<EmployeeId>>> + Send;

    /// Insert a customer and its assignments atomically. Returns the new ID.
    fn create_customer(
        &self,
        draft: &CustomerDraft,
        employees: &[EmployeeId],
    ) -> impl Future<Output = Result<CustomerId>> + Send;

    /// Overwrite a customer and replace its assignments atomically.
    ///
    /// Returns `false` when no customer has this ID.
    fn update_customer(
        &self,
        id: CustomerId,
        draft: &CustomerDraft,
        employees: &[EmployeeId],
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Delete a customer along with its sales and assignments.
    ///
    /// Returns `false` when no customer has this ID.
    fn delete_customer(&self, id: CustomerId) -> impl Future<Output = Result<bool>> + Send;
}

/// Read access to companies.
pub trait CompanyStore: Send + Sync {
    /// List all companies.
    fn list_companies(&self) -> impl Future<Output = Result<Vec<Company>>> + Send;
}

/// Storage operations for employees and departments.
pub trait EmployeeStore: Send + Sync {
    /// List employees joined with their department.
    fn list_employees(&self) -> impl Future<Output = Result<Vec<EmployeeListing>>> + Send;

    /// List employees without department details.
    fn list_employee_choices(&self) -> impl Future<Output = Result<Vec<Employee>>> + Send;

    /// List all departments.
    fn list_departments(&self) -> impl Future<Output = Result<Vec<Department>>> + Send;

    /// Insert an employee. Returns the new ID.
    fn create_employee(&self, draft: &EmployeeDraft)
        -> impl Future<Output = Result<EmployeeId>> + Send;
}
