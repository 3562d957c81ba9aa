//! Companies that customers belong to.

use super::id::CompanyId;

/// A company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
}
