//! Employees and the departments they belong to.

use super::error::DomainError;
use super::id::{DepartmentId, EmployeeId};
use super::required_text;

/// A persisted employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
}

impl Employee {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee row as shown in the list view, joined with its department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeListing {
    pub employee: Employee,
    pub department_name: String,
}

/// A department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// Validated employee fields submitted from the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub department_id: DepartmentId,
}

impl EmployeeDraft {
    /// Validate raw form values.
    pub fn try_new(
        first_name: &str,
        last_name: &str,
        department_id: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: required_text(first_name, "first_name")?,
            last_name: required_text(last_name, "last_name")?,
            department_id: DepartmentId::parse_field(department_id, "department_id")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_accepts_valid_input() {
        let draft = EmployeeDraft::try_new("Linus", " Torvalds ", "3").unwrap();
        assert_eq!(draft.last_name, "Torvalds");
        assert_eq!(draft.department_id, DepartmentId::new(3));
    }

    #[test]
    fn draft_rejects_empty_first_name() {
        let err = EmployeeDraft::try_new("", "Torvalds", "3").unwrap_err();
        assert_eq!(err, DomainError::EmptyField { field: "first_name" });
    }

    #[test]
    fn draft_rejects_bad_department() {
        let err = EmployeeDraft::try_new("Linus", "Torvalds", "kernel").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidNumber {
                field: "department_id",
                ..
            }
        ));
    }
}
