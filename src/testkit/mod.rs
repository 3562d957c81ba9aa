//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`seed`] - Reference rows (companies, departments, employees) and sales.
//! - [`store`] - A store whose every call fails, for error-path tests.

pub mod seed;
pub mod store;
