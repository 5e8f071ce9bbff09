//! # Domain Module
//!
//! Command/query types and the service that dispatches them to storage.
//! The presentation layer (GUI dialogs, CLI) builds intent objects from
//! user input and hands them to `BudgetService`; it never reaches into the
//! store itself.

pub mod budget_service;
pub mod commands;

pub use budget_service::BudgetService;
