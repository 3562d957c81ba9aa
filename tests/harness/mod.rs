#![allow(dead_code)]

pub mod server;
pub mod temp_db;
