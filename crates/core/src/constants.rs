use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Utilization percentage at which a category is flagged as nearing its budget.
pub const BUDGET_WARNING_THRESHOLD: Decimal = dec!(80);

/// Utilization percentage at which a category has consumed its budget.
pub const BUDGET_OVER_THRESHOLD: Decimal = dec!(100);

/// Savings-rate thresholds for the financial health rating, in percent.
pub const HEALTH_EXCELLENT_THRESHOLD: Decimal = dec!(20);
pub const HEALTH_GOOD_THRESHOLD: Decimal = dec!(15);
pub const HEALTH_FAIR_THRESHOLD: Decimal = dec!(10);

/// Absolute month-over-month expense change, in percent, inside which
/// spending is considered stable.
pub const TREND_STABLE_BAND_PERCENT: Decimal = dec!(5);

/// Fractions of disposable income used by the stock scenario ladder.
pub const SCENARIO_CONSERVATIVE_FRACTION: Decimal = dec!(0.5);
pub const SCENARIO_MODERATE_FRACTION: Decimal = dec!(0.7);
pub const SCENARIO_AGGRESSIVE_FRACTION: Decimal = dec!(0.9);

/// Fifty/thirty/twenty budgeting rule fractions.
pub const RULE_NEEDS_FRACTION: Decimal = dec!(0.5);
pub const RULE_WANTS_FRACTION: Decimal = dec!(0.3);
pub const RULE_SAVINGS_FRACTION: Decimal = dec!(0.2);

/// Months of expenses an emergency fund should cover.
pub const EMERGENCY_FUND_MONTHS: u32 = 6;

/// Day-count approximations used when deriving period counts from dates.
pub const DAYS_PER_MONTH_APPROX: i64 = 30;
pub const DAYS_PER_YEAR_APPROX: i64 = 365;
