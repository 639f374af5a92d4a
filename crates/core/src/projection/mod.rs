//! Projection module - compound balance projection over discrete periods.

mod projection_calculator;
mod projection_model;


pub use projection_calculator::{
    periodic_rate_from_annual_percent, project_balance, project_series,
};
pub use projection_model::ProjectionInput;
