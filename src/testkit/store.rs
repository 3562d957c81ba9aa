//! A store that fails every call.

use crate::domain::{
    Company, Customer, CustomerDraft, CustomerFilter, CustomerId, CustomerListing, Department,
    Employee, EmployeeDraft, EmployeeId, EmployeeListing,
};
use crate::error::{Error, Result};
use crate::port::{CompanyStore, CustomerStore, EmployeeStore};

/// Store double whose every operation returns a database error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

fn unavailable<T>() -> Result<T> {
    Err(Error::Database("database is unavailable".to_string()))
}

impl CustomerStore for FailingStore {
    async fn list_customers(&self, _filter: &CustomerFilter) -> Result<Vec<CustomerListing>> {
        unavailable()
    }

    async fn get_customer(&self, _id: CustomerId) -> Result<Option<Customer>> {
        unavailable()
    }

    async fn assigned_employees(&self, _id: CustomerId) -> Result<Vec<EmployeeId>> {
        unavailable()
    }

    async fn create_customer(
        &self,
        _draft: &CustomerDraft,
        _employees: &[EmployeeId],
    ) -> Result<CustomerId> {
        unavailable()
    }

    async fn update_customer(
        &self,
        _id: CustomerId,
        _draft: &CustomerDraft,
        _employees: &[EmployeeId],
    ) -> Result<bool> {
        unavailable()
    }

    async fn delete_customer(&self, _id: CustomerId) -> Result<bool> {
        unavailable()
    }
}

impl CompanyStore for FailingStore {
    async fn list_companies(&self) -> Result<Vec<Company>> {
        unavailable()
    }
}

impl EmployeeStore for FailingStore {
    async fn list_employees(&self) -> Result<Vec<EmployeeListing>> {
        unavailable()
    }

    async fn list_employee_choices(&self) -> Result<Vec<Employee>> {
        unavailable()
    }

    async fn list_departments(&self) -> Result<Vec<Department>> {
        unavailable()
    }

    async fn create_employee(&self, _draft: &EmployeeDraft) -> Result<EmployeeId> {
        unavailable()
    }
}
