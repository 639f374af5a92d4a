//! Insights domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of aggregated cash flow, supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFlow {
    /// Display label for the month (e.g. "2025-09"); opaque to the engine.
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub savings: Decimal,
}

/// Arithmetic means across a month series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverages {
    pub avg_income: Decimal,
    pub avg_expenses: Decimal,
    pub avg_savings: Decimal,
    /// Average savings as a percentage of average income; zero when the
    /// series is empty or income is non-positive.
    pub savings_rate: Decimal,
}

/// Savings-rate rating shown on the reports dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancialHealth {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

/// Direction of month-over-month spending movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

/// Month-over-month spending trend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingTrend {
    pub direction: TrendDirection,
    /// Signed percentage change versus the previous month.
    pub change_percent: Decimal,
}

/// Income split under the 50/30/20 budgeting rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRuleSplit {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}
