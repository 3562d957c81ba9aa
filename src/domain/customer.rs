//! Customer records, drafts and search criteria.

use super::error::DomainError;
use super::id::{CompanyId, CustomerId};
use super::required_text;

/// A persisted customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

impl Customer {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer row as shown in the list view, joined with its company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerListing {
    pub customer: Customer,
    pub company_name: String,
}

/// Validated customer fields submitted from the create and update forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub rating: i32,
    pub company_id: CompanyId,
}

impl CustomerDraft {
    /// Validate raw form values.
    ///
    /// Names are trimmed and must not be empty; `rating` and `company_id`
    /// must be whole numbers.
    pub fn try_new(
        first_name: &str,
        last_name: &str,
        rating: &str,
        company_id: &str,
    ) -> Result<Self, DomainError> {
        let first_name = required_text(first_name, "first_name")?;
        let last_name = required_text(last_name, "last_name")?;
        let rating = rating
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::InvalidNumber {
                field: "rating",
                value: rating.to_string(),
            })?;
        let company_id = CompanyId::parse_field(company_id, "company_id")?;

        Ok(Self {
            first_name,
            last_name,
            rating,
            company_id,
        })
    }
}

/// Optional exact-match criteria for the customer search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    first_name: Option<String>,
    last_name: Option<String>,
}

impl CustomerFilter {
    /// Build a filter; absent, empty and blank values all mean "no constraint".
    #[must_use]
    pub fn new(first_name: Option<&str>, last_name: Option<&str>) -> Self {
        Self {
            first_name: non_blank(first_name),
            last_name: non_blank(last_name),
        }
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// True when the filter matches every customer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
