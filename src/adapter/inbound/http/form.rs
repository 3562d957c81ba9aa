//! Decoding of url-encoded form bodies.
//!
//! Bodies are extracted as raw `(name, value)` pairs so repeated fields
//! survive: checkbox groups arrive as `employees=1&employees=3`, or with
//! bracket names (`employees[]=1`) from extended form encoders.

use std::collections::BTreeSet;

use axum::extract::rejection::FormRejection;
use axum::Form;
use tracing::warn;

use crate::domain::{CustomerDraft, DomainError, EmployeeDraft, EmployeeId};

/// Name of the employee checkbox group on customer forms.
pub const EMPLOYEES_FIELD: &str = "employees";

/// Raw submitted form fields in submission order.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    #[must_use]
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Fields of a POST body. A body that cannot be decoded as a url-encoded
    /// form reads as empty, so the submission fails validation downstream.
    #[must_use]
    pub fn from_body(body: Result<Form<Vec<(String, String)>>, FormRejection>) -> Self {
        match body {
            Ok(Form(pairs)) => Self::new(pairs),
            Err(rejection) => {
                warn!(error = %rejection, "Unreadable form body");
                Self::default()
            }
        }
    }

    /// First value submitted under `name`, or `""` when absent.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Every value submitted under `name` or `name[]`.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(key, _)| {
                key == name || key.strip_suffix("[]").is_some_and(|base| base == name)
            })
            .map(|(_, value)| value.as_str())
    }

    /// Checked employee ids, ascending and without duplicates.
    ///
    /// Empty values are skipped; anything else that is not a number is an error.
    pub fn employee_ids(&self) -> Result<Vec<EmployeeId>, DomainError> {
        let mut ids = BTreeSet::new();
        for raw in self.values(EMPLOYEES_FIELD) {
            if raw.trim().is_empty() {
                continue;
            }
            ids.insert(EmployeeId::parse_field(raw, "employees")?);
        }
        Ok(ids.into_iter().collect())
    }

    /// Customer fields plus the employee assignments.
    pub fn customer_submission(&self) -> Result<(CustomerDraft, Vec<EmployeeId>), DomainError> {
        let draft = CustomerDraft::try_new(
            self.value("first_name"),
            self.value("last_name"),
            self.value("rating"),
            self.value("company_id"),
        )?;
        Ok((draft, self.employee_ids()?))
    }

    /// Employee fields.
    pub fn employee_submission(&self) -> Result<EmployeeDraft, DomainError> {
        EmployeeDraft::try_new(
            self.value("first_name"),
            self.value("last_name"),
            self.value("department_id"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CompanyId;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn decoded_body_keeps_pairs() {
        let form = FormFields::from_body(Ok(Form(vec![(
            "first_name".to_string(),
            "Ada".to_string(),
        )])));
        assert_eq!(form.value("first_name"), "Ada");
    }

    #[test]
    fn missing_field_reads_as_empty() {
        assert_eq!(fields(&[]).value("first_name"), "");
    }

    #[test]
    fn value_takes_first_occurrence() {
        let form = fields(&[("rating", "2"), ("rating", "9")]);
        assert_eq!(form.value("rating"), "2");
    }

    #[test]
    fn employee_ids_accept_repeated_and_bracket_names() {
        let form = fields(&[("employees", "3"), ("employees[]", "1"), ("employees", "3")]);
        assert_eq!(
            form.employee_ids().unwrap(),
            vec![EmployeeId::new(1), EmployeeId::new(3)]
        );
    }

    #[test]
    fn single_employee_is_a_list_of_one() {
        let form = fields(&[("employees", "2")]);
        assert_eq!(form.employee_ids().unwrap(), vec![EmployeeId::new(2)]);
    }

    #[test]
    fn no_employees_is_empty() {
        let form = fields(&[("first_name", "Ada"), ("employees", "")]);
        assert!(form.employee_ids().unwrap().is_empty());
    }

    #[test]
    fn unrelated_bracket_fields_are_ignored() {
        let form = fields(&[("managers[]", "4")]);
        assert!(form.employee_ids().unwrap().is_empty());
    }

    #[test]
    fn bad_employee_id_is_an_error() {
        let form = fields(&[("employees", "x")]);
        assert!(matches!(
            form.employee_ids(),
            Err(DomainError::InvalidNumber {
                field: "employees",
                ..
            })
        ));
    }

    #[test]
    fn customer_submission_combines_draft_and_assignments() {
        let form = fields(&[
            ("first_name", "Ada"),
            ("last_name", "Lovelace"),
            ("rating", "5"),
            ("company_id", "2"),
            ("employees", "1"),
        ]);
        let (draft, employees) = form.customer_submission().unwrap();
        assert_eq!(draft.company_id, CompanyId::new(2));
        assert_eq!(employees, vec![EmployeeId::new(1)]);
    }

    #[test]
    fn employee_submission_requires_department() {
        let form = fields(&[("first_name", "Mary"), ("last_name", "Jackson")]);
        assert!(form.employee_submission().is_err());
    }
}
