//! Domain identifier types.
//!
//! Every table key is an integer assigned by the database. The newtypes keep
//! a customer id from being passed where an employee id is expected.

use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw database key.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the raw database key.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }

            /// Parse a submitted form or path value, naming the field on failure.
            pub fn parse_field(value: &str, field: &'static str) -> Result<Self, DomainError> {
                value
                    .trim()
                    .parse::<i32>()
                    .map(Self)
                    .map_err(|_| DomainError::InvalidNumber {
                        field,
                        value: value.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_field(s, $field)
            }
        }
    };
}

row_id!(
    /// Primary key of the `customers` table.
    CustomerId,
    "customer_id"
);

row_id!(
    /// Primary key of the `companies` table.
    CompanyId,
    "company_id"
);

row_id!(
    /// Primary key of the `employees` table.
    EmployeeId,
    "employee_id"
);

row_id!(
    /// Primary key of the `departments` table.
    DepartmentId,
    "department_id"
);
