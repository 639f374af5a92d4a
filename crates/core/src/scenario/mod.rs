//! Scenario module - time-to-goal across candidate contribution levels.

mod scenario_calculator;
mod scenario_model;

pub use scenario_calculator::{default_candidates, rank_scenarios};
pub use scenario_model::{PeriodsToGoal, ScenarioCandidate, ScenarioOutcome};
