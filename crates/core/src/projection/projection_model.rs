//! Projection domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a balance projection over a fixed horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    /// Balance at period zero.
    pub starting_balance: Decimal,
    /// Amount added at the start of every period. Negative values model
    /// withdrawals and may drive the balance negative; that is accepted,
    /// not clamped.
    pub periodic_contribution: Decimal,
    /// Fractional growth applied once per period, e.g. a monthly rate
    /// derived from an annual percentage via
    /// [`super::periodic_rate_from_annual_percent`].
    pub periodic_rate: Decimal,
    /// Number of compounding periods to project.
    pub horizon: u32,
}
