//! Route and solution scoring.
//!
//! Scalarizes travel cost, unreliability, and idle capacity into one
//! minimization target, weighted by [`ScoreWeights`](crate::models::ScoreWeights).

mod evaluator;

pub use evaluator::{evaluate_solution, route_cost};
