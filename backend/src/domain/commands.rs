//! Domain-level command and query types
//!
//! These structs are the intent objects a presentation layer constructs
//! from user input. Keeping them separate from the storage API means a
//! dialog or CLI subcommand maps to exactly one of these, and the store
//! stays GUI-agnostic.

pub mod budgets {
    use shared::BudgetItem;

    /// Input for creating a budget together with its initial items.
    #[derive(Debug, Clone)]
    pub struct CreateBudgetCommand {
        pub name: String,
        pub total: f64,
        pub items: Vec<BudgetItem>,
    }

    /// Input for deleting a budget and everything in it.
    #[derive(Debug, Clone)]
    pub struct DeleteBudgetCommand {
        pub name: String,
    }

    /// Input for adding funds to a budget's total.
    #[derive(Debug, Clone)]
    pub struct AddFundsCommand {
        pub budget_name: String,
        pub amount: f64,
    }

    /// Query for the sum of a budget's item totals.
    #[derive(Debug, Clone)]
    pub struct BudgetTotalQuery {
        pub budget_name: String,
    }

    /// Result of listing budget names.
    #[derive(Debug, Clone)]
    pub struct BudgetListResult {
        pub budgets: Vec<String>,
    }

    /// Result of summing a budget's item totals.
    #[derive(Debug, Clone)]
    pub struct BudgetTotalResult {
        pub total: f64,
    }
}

pub mod items {
    use shared::BudgetItem;

    /// Input for adding a single item to an existing budget.
    #[derive(Debug, Clone)]
    pub struct AddItemCommand {
        pub budget_name: String,
        pub item: BudgetItem,
    }

    /// Input for deleting one item out of one budget.
    #[derive(Debug, Clone)]
    pub struct DeleteItemCommand {
        pub item_name: String,
        pub budget_name: String,
    }

    /// Query for all items belonging to a budget.
    #[derive(Debug, Clone)]
    pub struct ItemListQuery {
        pub budget_name: String,
    }

    /// Result of listing a budget's items.
    #[derive(Debug, Clone)]
    pub struct ItemListResult {
        pub items: Vec<BudgetItem>,
    }
}

pub mod expenses {
    /// Input for recording an expense against a budget item.
    ///
    /// The expense only lands on an item whose name, budget, and category
    /// all match; otherwise nothing changes.
    #[derive(Debug, Clone)]
    pub struct RecordExpenseCommand {
        pub category_name: String,
        pub budget_name: String,
        pub item_name: String,
        pub amount: f64,
    }
}

pub mod categories {
    /// Input for creating a standalone expense category.
    #[derive(Debug, Clone)]
    pub struct AddCategoryCommand {
        pub name: String,
    }

    /// Input for deleting a category by name.
    #[derive(Debug, Clone)]
    pub struct DeleteCategoryCommand {
        pub name: String,
    }
}
