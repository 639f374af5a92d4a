//! Time-to-goal evaluation across candidate contribution levels.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::constants::{
    SCENARIO_AGGRESSIVE_FRACTION, SCENARIO_CONSERVATIVE_FRACTION, SCENARIO_MODERATE_FRACTION,
};

use super::scenario_model::{PeriodsToGoal, ScenarioCandidate, ScenarioOutcome};

/// Computes time-to-goal for each candidate, preserving input order.
///
/// The dashboard displays scenarios in their fixed conservative/moderate/
/// aggressive order, never sorted by speed.
pub fn rank_scenarios(
    target: Decimal,
    current: Decimal,
    candidates: &[ScenarioCandidate],
) -> Vec<ScenarioOutcome> {
    let remaining = (target - current).max(Decimal::ZERO);

    candidates
        .iter()
        .map(|candidate| ScenarioOutcome {
            label: candidate.label.clone(),
            monthly_amount: candidate.monthly_amount,
            periods_to_goal: periods_to_goal(remaining, candidate.monthly_amount),
        })
        .collect()
}

fn periods_to_goal(remaining: Decimal, monthly_amount: Decimal) -> PeriodsToGoal {
    if monthly_amount <= Decimal::ZERO {
        return PeriodsToGoal::Unreachable;
    }

    let periods = (remaining / monthly_amount).ceil();
    // Saturates for absurdly distant goals; still display-safe.
    PeriodsToGoal::Reachable(periods.to_u32().unwrap_or(u32::MAX))
}

/// The dashboard's stock candidate ladder: conservative, moderate, and
/// aggressive fractions of disposable income.
pub fn default_candidates(disposable_income: Decimal) -> Vec<ScenarioCandidate> {
    vec![
        ScenarioCandidate {
            label: "Conservative (Save 50% of disposable income)".to_string(),
            monthly_amount: disposable_income * SCENARIO_CONSERVATIVE_FRACTION,
        },
        ScenarioCandidate {
            label: "Moderate (Save 70% of disposable income)".to_string(),
            monthly_amount: disposable_income * SCENARIO_MODERATE_FRACTION,
        },
        ScenarioCandidate {
            label: "Aggressive (Save 90% of disposable income)".to_string(),
            monthly_amount: disposable_income * SCENARIO_AGGRESSIVE_FRACTION,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn candidate(label: &str, monthly_amount: Decimal) -> ScenarioCandidate {
        ScenarioCandidate {
            label: label.to_string(),
            monthly_amount,
        }
    }

    #[test]
    fn test_zero_contribution_is_unreachable() {
        let outcomes = rank_scenarios(dec!(15000), dec!(3200), &[candidate("A", dec!(0))]);

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Unreachable);
    }

    #[test]
    fn test_negative_contribution_is_unreachable() {
        let outcomes = rank_scenarios(dec!(5000), dec!(0), &[candidate("A", dec!(-100))]);

        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Unreachable);
    }

    #[test]
    fn test_exact_division() {
        let outcomes = rank_scenarios(dec!(10000), dec!(0), &[candidate("B", dec!(500))]);

        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Reachable(20));
    }

    #[test]
    fn test_partial_period_rounds_up() {
        let outcomes = rank_scenarios(dec!(1000), dec!(0), &[candidate("C", dec!(300))]);

        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Reachable(4));
    }

    #[test]
    fn test_already_met_goal_needs_zero_periods() {
        let outcomes = rank_scenarios(dec!(1000), dec!(2500), &[candidate("D", dec!(100))]);

        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Reachable(0));
    }

    #[test]
    fn test_input_order_is_preserved() {
        let candidates = vec![
            candidate("slow", dec!(10)),
            candidate("never", dec!(0)),
            candidate("fast", dec!(1000)),
        ];

        let outcomes = rank_scenarios(dec!(2000), dec!(0), &candidates);

        let labels: Vec<&str> = outcomes.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["slow", "never", "fast"]);
        assert_eq!(outcomes[0].periods_to_goal, PeriodsToGoal::Reachable(200));
        assert_eq!(outcomes[1].periods_to_goal, PeriodsToGoal::Unreachable);
        assert_eq!(outcomes[2].periods_to_goal, PeriodsToGoal::Reachable(2));
    }

    #[test]
    fn test_default_candidates_ladder() {
        let candidates = default_candidates(dec!(2420.45));

        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[0].monthly_amount, dec!(1210.225));
        assert_eq!(candidates[1].monthly_amount, dec!(1694.315));
        assert_eq!(candidates[2].monthly_amount, dec!(2178.405));
        assert!(candidates[0].label.starts_with("Conservative"));
        assert!(candidates[1].label.starts_with("Moderate"));
        assert!(candidates[2].label.starts_with("Aggressive"));
    }

    #[test]
    fn test_periods_to_goal_serialization() {
        let reachable = serde_json::to_value(PeriodsToGoal::Reachable(20)).unwrap();
        let unreachable = serde_json::to_value(PeriodsToGoal::Unreachable).unwrap();

        assert_eq!(reachable, json!(20));
        assert_eq!(unreachable, json!("unreachable"));
    }

    #[test]
    fn test_periods_to_goal_deserialization() {
        let reachable: PeriodsToGoal = serde_json::from_value(json!(20)).unwrap();
        let unreachable: PeriodsToGoal = serde_json::from_value(json!("unreachable")).unwrap();

        assert_eq!(reachable, PeriodsToGoal::Reachable(20));
        assert_eq!(unreachable, PeriodsToGoal::Unreachable);
        assert!(unreachable.is_unreachable());
    }
}
