//! Scenario domain models.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One candidate monthly contribution level, usually a fraction of
/// disposable income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCandidate {
    pub label: String,
    pub monthly_amount: Decimal,
}

/// Outcome for a candidate, returned in the candidate's input position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub label: String,
    pub monthly_amount: Decimal,
    pub periods_to_goal: PeriodsToGoal,
}

/// Periods needed to reach the target, or a displayable sentinel for a
/// candidate that can never get there. Not an error: the calculator always
/// returns a display-safe result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodsToGoal {
    Reachable(u32),
    Unreachable,
}

impl PeriodsToGoal {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PeriodsToGoal::Unreachable)
    }
}

/// Serialized as a bare period count, or the string `"unreachable"`.
impl Serialize for PeriodsToGoal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PeriodsToGoal::Reachable(periods) => serializer.serialize_u32(*periods),
            PeriodsToGoal::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

impl<'de> Deserialize<'de> for PeriodsToGoal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PeriodsToGoalVisitor;

        impl<'de> Visitor<'de> for PeriodsToGoalVisitor {
            type Value = PeriodsToGoal;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a period count or the string \"unreachable\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                u32::try_from(value)
                    .map(PeriodsToGoal::Reachable)
                    .map_err(|_| E::custom("period count out of range"))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                u32::try_from(value)
                    .map(PeriodsToGoal::Reachable)
                    .map_err(|_| E::custom("period count out of range"))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                if value == "unreachable" {
                    Ok(PeriodsToGoal::Unreachable)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(PeriodsToGoalVisitor)
    }
}
