//! Shared infrastructure for the classified listings application
//!
//! This crate holds the pieces every part of the application needs to reach
//! the backing store: database configuration, connection pool setup, a
//! connectivity health check, and the database error type.

pub mod database;
pub mod error;
