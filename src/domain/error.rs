//! Domain validation errors for form input.
//!
//! Returned by the `try_new` constructors of drafts and by identifier
//! parsing when submitted values do not satisfy the domain rules.
//!
//! # Examples
//!
//! ```
//! use crm_desk::domain::customer::CustomerDraft;
//! use crm_desk::domain::error::DomainError;
//!
//! let result = CustomerDraft::try_new("  ", "Tan", "3", "1");
//! assert!(matches!(result, Err(DomainError::EmptyField { field: "first_name" })));
//! ```

use thiserror::Error;

/// Errors that occur when submitted values violate domain rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field was empty after trimming.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending form field.
        field: &'static str,
    },

    /// A numeric field could not be parsed.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber {
        /// Name of the offending form field.
        field: &'static str,
        /// The raw submitted value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = DomainError::EmptyField { field: "last_name" };
        assert_eq!(err.to_string(), "last_name cannot be empty");

        let err = DomainError::InvalidNumber {
            field: "rating",
            value: "five".into(),
        };
        assert_eq!(err.to_string(), "rating must be a whole number, got 'five'");
    }
}
