//! Pure aggregates behind the reports and savings-calculator views.
//!
//! The month series these operate on may legitimately be empty; every
//! operation returns a well-defined zero result in that case.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{
    EMERGENCY_FUND_MONTHS, HEALTH_EXCELLENT_THRESHOLD, HEALTH_FAIR_THRESHOLD,
    HEALTH_GOOD_THRESHOLD, RULE_NEEDS_FRACTION, RULE_SAVINGS_FRACTION, RULE_WANTS_FRACTION,
    TREND_STABLE_BAND_PERCENT,
};

use super::insights_model::{
    BudgetRuleSplit, FinancialHealth, MonthlyAverages, MonthlyFlow, SpendingTrend, TrendDirection,
};

/// Income left over after fixed expenses; negative when expenses exceed
/// income.
pub fn disposable_income(income: Decimal, expenses: Decimal) -> Decimal {
    income - expenses
}

/// Saved amount as a percentage of income; zero for non-positive income.
pub fn savings_rate(income: Decimal, saved: Decimal) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    saved / income * Decimal::ONE_HUNDRED
}

/// Arithmetic means across a month series; an empty series yields zeros.
pub fn summarize_months(months: &[MonthlyFlow]) -> MonthlyAverages {
    if months.is_empty() {
        debug!("summarizing an empty month series");
        return MonthlyAverages {
            avg_income: Decimal::ZERO,
            avg_expenses: Decimal::ZERO,
            avg_savings: Decimal::ZERO,
            savings_rate: Decimal::ZERO,
        };
    }

    let count = Decimal::from(months.len() as u64);
    let avg_income = months.iter().map(|m| m.income).sum::<Decimal>() / count;
    let avg_expenses = months.iter().map(|m| m.expenses).sum::<Decimal>() / count;
    let avg_savings = months.iter().map(|m| m.savings).sum::<Decimal>() / count;

    MonthlyAverages {
        avg_income,
        avg_expenses,
        avg_savings,
        savings_rate: savings_rate(avg_income, avg_savings),
    }
}

/// Rates a savings percentage against the dashboard thresholds.
pub fn classify_financial_health(savings_rate: Decimal) -> FinancialHealth {
    if savings_rate >= HEALTH_EXCELLENT_THRESHOLD {
        FinancialHealth::Excellent
    } else if savings_rate >= HEALTH_GOOD_THRESHOLD {
        FinancialHealth::Good
    } else if savings_rate >= HEALTH_FAIR_THRESHOLD {
        FinancialHealth::Fair
    } else {
        FinancialHealth::NeedsImprovement
    }
}

/// Month-over-month spending movement from the last two entries of the
/// series.
///
/// Fewer than two months, or a non-positive baseline month, reads as stable
/// with zero change.
pub fn spending_trend(months: &[MonthlyFlow]) -> SpendingTrend {
    let stable = SpendingTrend {
        direction: TrendDirection::Stable,
        change_percent: Decimal::ZERO,
    };

    if months.len() < 2 {
        return stable;
    }

    let previous = &months[months.len() - 2];
    let latest = &months[months.len() - 1];

    if previous.expenses <= Decimal::ZERO {
        return stable;
    }

    let change_percent =
        (latest.expenses - previous.expenses) / previous.expenses * Decimal::ONE_HUNDRED;

    let direction = if change_percent > TREND_STABLE_BAND_PERCENT {
        TrendDirection::Increasing
    } else if change_percent < -TREND_STABLE_BAND_PERCENT {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    SpendingTrend {
        direction,
        change_percent,
    }
}

/// Recommended emergency fund: six months of expenses.
pub fn emergency_fund_target(monthly_expenses: Decimal) -> Decimal {
    monthly_expenses * Decimal::from(EMERGENCY_FUND_MONTHS)
}

/// Splits income under the 50/30/20 rule.
pub fn budget_rule_split(income: Decimal) -> BudgetRuleSplit {
    BudgetRuleSplit {
        needs: income * RULE_NEEDS_FRACTION,
        wants: income * RULE_WANTS_FRACTION,
        savings: income * RULE_SAVINGS_FRACTION,
    }
}
