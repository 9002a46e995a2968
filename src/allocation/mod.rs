//! Assignment of demand locations to the fleet.
//!
//! - [`allocate`] — greedy priority-first, capacity-constrained, O(K·V)
//!   path queries
//! - [`select_by_priority`] — 0/1 knapsack re-selection of a route's
//!   stops under its vehicle's capacity

mod greedy;
mod knapsack;

pub use greedy::allocate;
pub use knapsack::select_by_priority;
