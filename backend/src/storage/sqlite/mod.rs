//! SQLite-based storage implementation.
//!
//! - **connection.rs** - database connection and schema management
//! - **budget_store.rs** - the `BudgetStore`, sole gateway to persistent state

pub mod budget_store;
pub mod connection;

pub use budget_store::BudgetStore;
pub use connection::DbConnection;
