//! Budget module - category utilization and aggregate summaries.

mod budget_calculator;
mod budget_model;

pub use budget_calculator::{
    classify_utilization, evaluate_category, summarize_budget, unbudgeted_income,
};
pub use budget_model::{
    BudgetCategorySnapshot, BudgetStatus, BudgetSummary, CategoryUtilization,
};
