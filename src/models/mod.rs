//! Domain model types for the routing engine.
//!
//! Provides the core records shared by every component: demand locations,
//! capacity-limited vehicles with their route state, scoring weights, and
//! the derived cost snapshots.

mod metrics;
mod node;
mod vehicle;

pub use metrics::{RouteCost, ScoreWeights, SolutionMetrics};
pub use node::Node;
pub use vehicle::Vehicle;
