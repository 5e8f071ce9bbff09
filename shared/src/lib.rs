use serde::{Deserialize, Serialize};

/// A named pool of funds with a running total.
///
/// The name is the primary identifier: budgets are looked up, funded,
/// and deleted by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub name: String,
    /// Funds currently allocated to this budget
    pub total: f64,
}

/// A single line within a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub name: String,
    /// Remaining amount; expenses subtract from this
    pub total: f64,
    /// Spending ceiling for the line
    pub cap: f64,
}

/// An independent label used to classify expenses against items.
///
/// Categories are not enforced as a foreign key: deleting a category
/// leaves items that reference it by name untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}
