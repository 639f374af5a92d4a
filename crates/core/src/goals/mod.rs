//! Goals module - domain models and feasibility evaluation.

mod goals_calculator;
mod goals_model;

pub use goals_calculator::evaluate_goal;
pub use goals_model::{GoalFeasibility, GoalSnapshot};
