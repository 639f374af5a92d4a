//! Budget utilization math.

use rust_decimal::Decimal;

use crate::constants::{BUDGET_OVER_THRESHOLD, BUDGET_WARNING_THRESHOLD};

use super::budget_model::{
    BudgetCategorySnapshot, BudgetStatus, BudgetSummary, CategoryUtilization,
};

/// Evaluates utilization for a single category.
///
/// A zero budget is defined as 0% utilized regardless of spend, so the
/// percentage never degenerates into infinity. `is_over_budget` is still
/// computed from the raw amounts: any spend against a zero budget exceeds
/// it.
pub fn evaluate_category(category: &BudgetCategorySnapshot) -> CategoryUtilization {
    let utilization_percent = if category.budgeted > Decimal::ZERO {
        category.spent / category.budgeted * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    CategoryUtilization {
        utilization_percent,
        remaining: category.budgeted - category.spent,
        is_over_budget: category.spent > category.budgeted,
        status: classify_utilization(utilization_percent),
    }
}

/// Maps a utilization percentage onto the dashboard's status buckets.
pub fn classify_utilization(utilization_percent: Decimal) -> BudgetStatus {
    if utilization_percent >= BUDGET_OVER_THRESHOLD {
        BudgetStatus::OverBudget
    } else if utilization_percent >= BUDGET_WARNING_THRESHOLD {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    }
}

/// Sums budgeted and spent amounts across a set of categories.
///
/// Addition is commutative; no input ordering is assumed.
pub fn summarize_budget(categories: &[BudgetCategorySnapshot]) -> BudgetSummary {
    let total_budgeted: Decimal = categories.iter().map(|c| c.budgeted).sum();
    let total_spent: Decimal = categories.iter().map(|c| c.spent).sum();

    BudgetSummary {
        total_budgeted,
        total_spent,
        total_remaining: total_budgeted - total_spent,
    }
}

/// Income left after all category allocations; negative when the caller has
/// budgeted more than it earns.
pub fn unbudgeted_income(monthly_income: Decimal, summary: &BudgetSummary) -> Decimal {
    monthly_income - summary.total_budgeted
}
