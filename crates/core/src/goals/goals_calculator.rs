//! Goal feasibility evaluation.
//!
//! A best-effort estimate, not a validating system: out-of-range inputs are
//! clamped to sane defaults rather than rejected.

use log::debug;
use rust_decimal::Decimal;

use super::goals_model::{GoalFeasibility, GoalSnapshot};

/// Evaluates progress and required contribution for a goal snapshot.
///
/// A non-positive target counts as fully complete, and a period count of
/// zero is treated as one period, so neither percentage nor contribution
/// math can divide by zero.
pub fn evaluate_goal(goal: &GoalSnapshot) -> GoalFeasibility {
    let percent_complete = if goal.target_amount <= Decimal::ZERO {
        Decimal::ONE_HUNDRED
    } else {
        (goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED)
            .min(Decimal::ONE_HUNDRED)
    };

    let remaining_amount = (goal.target_amount - goal.current_amount).max(Decimal::ZERO);

    let periods = if goal.periods_remaining == 0 {
        debug!("goal has no periods remaining, clamping to one period");
        1
    } else {
        goal.periods_remaining
    };

    let required_periodic_contribution = remaining_amount / Decimal::from(periods);

    GoalFeasibility {
        percent_complete,
        remaining_amount,
        required_periodic_contribution,
    }
}
