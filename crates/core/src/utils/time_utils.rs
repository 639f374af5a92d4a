//! Calendar helpers for deriving compounding periods from deadline dates.
//!
//! The engine has no clock dependency; callers pass their own "today" and
//! feed the derived period counts into the calculators.

use chrono::NaiveDate;

use crate::constants::{DAYS_PER_MONTH_APPROX, DAYS_PER_YEAR_APPROX};

/// Coarse time-remaining bucket for a goal deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Overdue,
    Today,
    Days(u32),
    Months(u32),
    Years(u32),
}

/// Number of whole compounding periods (months) between `today` and
/// `deadline`.
///
/// Uses the 30-day month approximation, rounding up, and clamps to at least
/// one period so a past or same-day deadline never produces a division by
/// zero downstream.
pub fn periods_until(today: NaiveDate, deadline: NaiveDate) -> u32 {
    let days = (deadline - today).num_days();
    if days <= 0 {
        return 1;
    }
    let months = (days + DAYS_PER_MONTH_APPROX - 1) / DAYS_PER_MONTH_APPROX;
    months as u32
}

/// Classifies the distance to a deadline into the dashboard's display
/// buckets.
pub fn classify_time_remaining(today: NaiveDate, deadline: NaiveDate) -> TimeRemaining {
    let days = (deadline - today).num_days();

    if days < 0 {
        TimeRemaining::Overdue
    } else if days == 0 {
        TimeRemaining::Today
    } else if days < DAYS_PER_MONTH_APPROX {
        TimeRemaining::Days(days as u32)
    } else if days < DAYS_PER_YEAR_APPROX {
        TimeRemaining::Months((days / DAYS_PER_MONTH_APPROX) as u32)
    } else {
        TimeRemaining::Years((days / DAYS_PER_YEAR_APPROX) as u32)
    }
}
