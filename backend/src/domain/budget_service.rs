use tracing::{info, warn};

use crate::domain::commands::budgets::{
    AddFundsCommand, BudgetListResult, BudgetTotalQuery, BudgetTotalResult, CreateBudgetCommand,
    DeleteBudgetCommand,
};
use crate::domain::commands::categories::{AddCategoryCommand, DeleteCategoryCommand};
use crate::domain::commands::expenses::RecordExpenseCommand;
use crate::domain::commands::items::{
    AddItemCommand, DeleteItemCommand, ItemListQuery, ItemListResult,
};
use crate::storage::{BudgetStore, StoreError};

/// Service for managing budgets, items, and categories.
///
/// Thin dispatch layer over the store: argument validation and persistence
/// live in `BudgetStore`; this layer logs each operation and gives the
/// presentation shell a single entry point.
#[derive(Clone)]
pub struct BudgetService {
    store: BudgetStore,
}

impl BudgetService {
    pub fn new(store: BudgetStore) -> Self {
        Self { store }
    }

    /// Create a new budget with its initial items (all-or-nothing).
    pub async fn create_budget(&self, command: CreateBudgetCommand) -> Result<(), StoreError> {
        info!(
            "Creating budget: name={}, total={}, items={}",
            command.name,
            command.total,
            command.items.len()
        );
        self.store
            .add_budget(&command.name, command.total, &command.items)
            .await?;
        info!("Created budget: {}", command.name);
        Ok(())
    }

    /// Delete a budget and all of its items.
    pub async fn delete_budget(&self, command: DeleteBudgetCommand) -> Result<(), StoreError> {
        info!("Deleting budget: {}", command.name);
        self.store.delete_budget(&command.name).await
    }

    /// List all budget names currently referenced by items.
    pub async fn list_budgets(&self) -> Result<BudgetListResult, StoreError> {
        let budgets = self.store.list_budgets().await?;
        info!("Found {} budgets", budgets.len());
        Ok(BudgetListResult { budgets })
    }

    /// Get all items for one budget.
    pub async fn get_items(&self, query: ItemListQuery) -> Result<ItemListResult, StoreError> {
        let items = self.store.get_items(&query.budget_name).await?;
        if items.is_empty() {
            warn!("No items found for budget: {}", query.budget_name);
        }
        Ok(ItemListResult { items })
    }

    /// Get the sum of item totals for one budget.
    pub async fn get_total(
        &self,
        query: BudgetTotalQuery,
    ) -> Result<BudgetTotalResult, StoreError> {
        let total = self.store.get_total(&query.budget_name).await?;
        Ok(BudgetTotalResult { total })
    }

    /// Add a single item to an existing budget.
    pub async fn add_item(&self, command: AddItemCommand) -> Result<(), StoreError> {
        info!(
            "Adding item {} to budget {}",
            command.item.name, command.budget_name
        );
        self.store.add_item(&command.budget_name, &command.item).await
    }

    /// Delete one item from one budget. A pair that does not exist is a
    /// no-op, not an error.
    pub async fn delete_item(&self, command: DeleteItemCommand) -> Result<(), StoreError> {
        info!(
            "Deleting item {} from budget {}",
            command.item_name, command.budget_name
        );
        self.store
            .delete_item(&command.item_name, &command.budget_name)
            .await
    }

    /// Add funds to a budget's total.
    pub async fn add_funds(&self, command: AddFundsCommand) -> Result<(), StoreError> {
        info!(
            "Adding {} to budget {}",
            command.amount, command.budget_name
        );
        self.store
            .add_funds(&command.budget_name, command.amount)
            .await
    }

    /// Record an expense against an item, scoped by category match.
    pub async fn record_expense(&self, command: RecordExpenseCommand) -> Result<(), StoreError> {
        info!(
            "Recording expense of {} against {}/{} in category {}",
            command.amount, command.budget_name, command.item_name, command.category_name
        );
        self.store
            .add_expense(
                &command.category_name,
                &command.budget_name,
                &command.item_name,
                command.amount,
            )
            .await
    }

    /// Create a standalone expense category.
    pub async fn add_category(&self, command: AddCategoryCommand) -> Result<(), StoreError> {
        info!("Adding category: {}", command.name);
        self.store.add_category(&command.name).await
    }

    /// Delete a category. Items referencing it by name are left untouched.
    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> Result<(), StoreError> {
        info!("Deleting category: {}", command.name);
        self.store.delete_category(&command.name).await
    }
}
