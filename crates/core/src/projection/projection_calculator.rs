//! Balance projection over discrete compounding periods.
//!
//! The recurrence adds the contribution before applying the period's growth:
//! `balance[i] = (balance[i-1] + contribution) * (1 + rate)`. The ordering
//! materially changes the projected value for non-trivial rates and must not
//! be swapped for the growth-then-contribution convention.

use rust_decimal::Decimal;

use super::projection_model::ProjectionInput;

/// Projects the balance after each period.
///
/// Returns one entry per period; an empty vector for a zero horizon. The
/// series is re-derivable from the same input, not a stateful stream.
pub fn project_series(input: &ProjectionInput) -> Vec<Decimal> {
    let growth = Decimal::ONE + input.periodic_rate;
    let mut series = Vec::with_capacity(input.horizon as usize);
    let mut balance = input.starting_balance;

    for _ in 0..input.horizon {
        balance = (balance + input.periodic_contribution) * growth;
        series.push(balance);
    }

    series
}

/// Projects the final balance at the end of the horizon.
///
/// Agrees with the last element of [`project_series`]; a zero horizon yields
/// the starting balance unchanged.
pub fn project_balance(input: &ProjectionInput) -> Decimal {
    project_series(input)
        .last()
        .copied()
        .unwrap_or(input.starting_balance)
}

/// Derives the fractional per-period rate from an annual percentage.
///
/// A 3.5% annual return compounded monthly is
/// `periodic_rate_from_annual_percent(dec!(3.5), 12)`. A zero
/// `periods_per_year` is clamped to one.
pub fn periodic_rate_from_annual_percent(
    annual_percent: Decimal,
    periods_per_year: u32,
) -> Decimal {
    let periods = Decimal::from(periods_per_year.max(1));
    annual_percent / Decimal::ONE_HUNDRED / periods
}
