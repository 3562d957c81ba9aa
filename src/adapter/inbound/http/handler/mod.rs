//! Route handlers, one module per area of the site.

pub mod customer;
pub mod employee;
pub mod page;
