//! Budget domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of one budget category for a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategorySnapshot {
    /// Amount allocated to the category. Non-negative by caller precondition.
    pub budgeted: Decimal,
    /// Amount spent so far. Non-negative and unbounded; may exceed
    /// `budgeted`.
    pub spent: Decimal,
}

/// Coarse category status at the dashboard's warning thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

/// Utilization of a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUtilization {
    /// Spent as a percentage of budgeted. A zero budget is 0% utilized
    /// regardless of spend.
    pub utilization_percent: Decimal,
    /// Budgeted minus spent; negative when over budget.
    pub remaining: Decimal,
    /// Whether spend strictly exceeds the allocation.
    pub is_over_budget: bool,
    pub status: BudgetStatus,
}

/// Aggregate across a set of categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budgeted: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
}
