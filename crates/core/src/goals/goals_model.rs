//! Goals domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Immutable snapshot of a savings goal at evaluation time.
///
/// The caller derives `periods_remaining` from its own notion of "today"
/// (see [`crate::utils::time_utils::periods_until`]); the engine never reads
/// a clock.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalSnapshot {
    /// Amount saved so far. Non-negative by caller precondition.
    pub current_amount: Decimal,
    /// Target amount. May be below `current_amount` when the goal is
    /// already met.
    pub target_amount: Decimal,
    /// Whole compounding periods left before the deadline. A value of zero
    /// is clamped to one during evaluation.
    pub periods_remaining: u32,
}

/// Result of evaluating a goal snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalFeasibility {
    /// Progress toward the target, capped at 100.
    pub percent_complete: Decimal,
    /// Amount still to be saved; never negative.
    pub remaining_amount: Decimal,
    /// Contribution per period needed to close the gap by the deadline.
    /// Kept at full decimal precision; display rounding is the caller's
    /// concern.
    pub required_periodic_contribution: Decimal,
}
