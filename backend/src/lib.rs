//! # Budget Tracker Backend
//!
//! Contains all non-UI logic for the budget tracker application.
//!
//! The backend is designed to be UI-agnostic: a desktop shell, a CLI, or a
//! test harness all drive it the same way — by constructing command objects
//! and handing them to the domain layer. The layers are:
//!
//! - **Domain**: command/query types and the service that dispatches them
//! - **Storage**: the SQLite persistence layer (the `BudgetStore`)
//!
//! Presentation code never talks to the database directly.

pub mod domain;
pub mod storage;

use anyhow::Result;
use tracing::info;

pub use domain::BudgetService;
pub use storage::{BudgetStore, DbConnection, StoreError};

/// Main application state handed to the presentation layer.
#[derive(Clone)]
pub struct AppState {
    pub budget_service: BudgetService,
}

/// Initialize the backend with all required services.
///
/// Opening the database is fatal on failure: there is no degraded mode
/// without a working store.
pub async fn initialize_backend(database_url: &str) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(database_url).await?;

    info!("Setting up domain model");
    let budget_service = BudgetService::new(BudgetStore::new(db));

    Ok(AppState { budget_service })
}

/// Install the process-wide tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info`. Intended to be
/// called once by the embedding application.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
