//! Fintrack Core - the calculation engine behind the Fintrack dashboard.
//!
//! This crate contains the financial math the dashboard renders: goal
//! feasibility, compound balance projection, budget utilization, savings
//! scenarios, and report aggregates. Every operation is a pure, stateless
//! function over caller-supplied value snapshots; the crate owns no storage,
//! performs no I/O, and has no clock dependency.

pub mod budget;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod insights;
pub mod projection;
pub mod scenario;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
