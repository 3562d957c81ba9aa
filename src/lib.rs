//! crm-desk - a server-rendered desk for customers, companies and employees.
//!
//! Customers belong to a company and are looked after by any number of
//! employees; employees belong to a department. The crate serves HTML pages
//! to list, search, create, update and delete those records, backed by
//! SQLite.
//!
//! # Architecture
//!
//! - [`domain`] - Records, drafts, ids and the customer search filter
//! - [`port`] - Store traits the HTTP layer depends on
//! - [`adapter::outbound::sqlite`] - Diesel implementation of the ports
//! - [`adapter::inbound::http`] - Axum router, handlers and HTML views
//! - [`adapter::inbound::cli`] - `serve`, `migrate` and `check config`
//! - [`infrastructure`] - Configuration and runtime wiring
//!
//! # Example
//!
//! ```no_run
//! use crm_desk::infrastructure::bootstrap;
//! use crm_desk::infrastructure::config::settings::Config;
//!
//! # async fn run() -> crm_desk::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let router = bootstrap::build_app(&config.database)?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
