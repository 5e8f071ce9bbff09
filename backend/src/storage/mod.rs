//! # Storage Module
//!
//! Handles all data persistence for the budget tracker.
//!
//! The implementation is SQLite via SQLx. The connection is an injected
//! dependency (`DbConnection`) owned for the lifetime of the session, so
//! tests can substitute an in-memory database without touching globals.

pub mod error;
pub mod sqlite;

pub use error::StoreError;
pub use sqlite::{BudgetStore, DbConnection};
