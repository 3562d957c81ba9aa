//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed implementation of the store ports using
//! Diesel ORM over an r2d2 connection pool.

pub mod company;
pub mod customer;
pub mod database;
pub mod employee;
pub mod store;

pub use store::SqliteStore;
