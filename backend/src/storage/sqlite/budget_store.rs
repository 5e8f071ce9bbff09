use shared::BudgetItem;
use sqlx::Row;

use crate::storage::error::StoreError;
use crate::storage::sqlite::connection::DbConnection;

/// Sole gateway to persistent budget state.
///
/// Every operation validates its arguments before touching the database,
/// then runs a single statement — or a single explicit transaction for
/// multi-statement writes — against the shared connection. Zero rows
/// affected on the delete and expense paths is success, not an error.
#[derive(Clone)]
pub struct BudgetStore {
    db: DbConnection,
}

impl BudgetStore {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List every budget name referenced by at least one item.
    pub async fn list_budgets(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT DISTINCT budget_name FROM items
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(|row| row.get("budget_name")).collect())
    }

    /// Get all items belonging to a budget; empty if none match.
    pub async fn get_items(&self, budget_name: &str) -> Result<Vec<BudgetItem>, StoreError> {
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }

        let rows = sqlx::query(
            r#"
            SELECT name, total, cap
            FROM items
            WHERE budget_name = ?
            "#,
        )
        .bind(budget_name)
        .fetch_all(self.db.pool())
        .await?;

        let items = rows
            .iter()
            .map(|row| BudgetItem {
                name: row.get("name"),
                total: row.get("total"),
                cap: row.get("cap"),
            })
            .collect();

        Ok(items)
    }

    /// Sum of item totals for a budget; 0 when the budget has no items.
    pub async fn get_total(&self, budget_name: &str) -> Result<f64, StoreError> {
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }

        let row = sqlx::query(
            r#"
            SELECT SUM(total) AS total
            FROM items
            WHERE budget_name = ?
            "#,
        )
        .bind(budget_name)
        .fetch_one(self.db.pool())
        .await?;

        // SUM over zero rows is NULL
        let total: Option<f64> = row.get("total");
        Ok(total.unwrap_or(0.0))
    }

    /// Insert a budget and all of its items as one transaction.
    ///
    /// All-or-nothing: an early return drops the transaction, which rolls
    /// back the budget row along with any items inserted so far.
    pub async fn add_budget(
        &self,
        name: &str,
        total: f64,
        items: &[BudgetItem],
    ) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }

        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO budgets (name, total) VALUES (?, ?)
            "#,
        )
        .bind(name)
        .bind(total)
        .execute(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO items (name, total, cap, budget_name)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(&item.name)
            .bind(item.total)
            .bind(item.cap)
            .bind(name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Delete a budget and its items as one transaction, items first.
    pub async fn delete_budget(&self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }

        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            DELETE FROM items WHERE budget_name = ?
            "#,
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            DELETE FROM budgets WHERE name = ?
            "#,
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Add a single item to an existing budget (single statement,
    /// auto-commit).
    pub async fn add_item(&self, budget_name: &str, item: &BudgetItem) -> Result<(), StoreError> {
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }
        if item.name.is_empty() {
            return Err(StoreError::InvalidArgument("Item name cannot be empty"));
        }

        sqlx::query(
            r#"
            INSERT INTO items (name, total, cap, budget_name)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&item.name)
        .bind(item.total)
        .bind(item.cap)
        .bind(budget_name)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete the item matching both names. Deleting a pair that does not
    /// exist is a no-op.
    pub async fn delete_item(&self, item_name: &str, budget_name: &str) -> Result<(), StoreError> {
        if item_name.is_empty() {
            return Err(StoreError::InvalidArgument("Item name cannot be empty"));
        }
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }

        sqlx::query(
            r#"
            DELETE FROM items WHERE name = ? AND budget_name = ?
            "#,
        )
        .bind(item_name)
        .bind(budget_name)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Increment a budget's total by `amount` (additive update).
    pub async fn add_funds(&self, budget_name: &str, amount: f64) -> Result<(), StoreError> {
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }
        if amount < 0.0 {
            return Err(StoreError::InvalidArgument(
                "Amount must be a non-negative number",
            ));
        }

        sqlx::query(
            r#"
            UPDATE budgets SET total = total + ? WHERE name = ?
            "#,
        )
        .bind(amount)
        .bind(budget_name)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Decrement an item's total by `amount`.
    ///
    /// The row must match item name, budget name, AND category
    /// simultaneously; when no row satisfies all three the update is a
    /// silent no-op.
    pub async fn add_expense(
        &self,
        category_name: &str,
        budget_name: &str,
        item_name: &str,
        amount: f64,
    ) -> Result<(), StoreError> {
        if category_name.is_empty() {
            return Err(StoreError::InvalidArgument("Category name cannot be empty"));
        }
        if budget_name.is_empty() {
            return Err(StoreError::InvalidArgument("Budget name cannot be empty"));
        }
        if item_name.is_empty() {
            return Err(StoreError::InvalidArgument("Item name cannot be empty"));
        }
        if amount < 0.0 {
            return Err(StoreError::InvalidArgument(
                "Amount must be a non-negative number",
            ));
        }

        sqlx::query(
            r#"
            UPDATE items SET total = total - ?
            WHERE name = ? AND budget_name = ? AND category = ?
            "#,
        )
        .bind(amount)
        .bind(item_name)
        .bind(budget_name)
        .bind(category_name)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Insert a category, wrapped in its own transaction.
    pub async fn add_category(&self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument("Category name cannot be empty"));
        }

        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO categories (name) VALUES (?)
            "#,
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Delete a category, wrapped in its own transaction. Items referencing
    /// the category by name are left untouched.
    pub async fn delete_category(&self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidArgument("Category name cannot be empty"));
        }

        let mut tx = self.db.pool().begin().await?;

        sqlx::query(
            r#"
            DELETE FROM categories WHERE name = ?
            "#,
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(())
    }
}
