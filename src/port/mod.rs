//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   HTTP handlers ──► CustomerStore / CompanyStore / EmployeeStore ◄── SQLite adapter
//! ```

pub mod outbound;

pub use outbound::store::{CompanyStore, CustomerStore, EmployeeStore};
