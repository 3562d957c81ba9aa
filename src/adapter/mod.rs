//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - Driving side: HTTP routes and the command line
//! - [`outbound`] - Driven side: SQLite persistence

pub mod inbound;
pub mod outbound;
