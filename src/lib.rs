//! # relief-routing
//!
//! Routing engine for capacity-limited fleets on reliability-annotated
//! road networks: assigns demand locations to vehicles, orders each
//! vehicle's stops, scores routes on a multi-objective function, and
//! replans incrementally when road segments become unusable.
//!
//! The engine produces heuristic solutions (the underlying assignment
//! problem is NP-hard) and runs as a single-threaded, synchronous batch
//! computation. Reading and writing problem data, CLI handling, and
//! reporting belong to the caller; the engine works purely on in-memory
//! [`graph::Graph`] and [`models::Vehicle`] state.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Node, Vehicle, ScoreWeights, cost snapshots)
//! - [`graph`] — Road network with reliability-weighted edges
//! - [`search`] — Dijkstra and heuristic-guided single-pair search
//! - [`allocation`] — Greedy capacity-constrained assignment, knapsack refinement
//! - [`local_search`] — 2-opt route improvement
//! - [`scoring`] — Multi-objective route and fleet evaluation
//! - [`replan`] — Rerouting around removed edges
//! - [`solver`] — End-to-end pipeline over all of the above

pub mod allocation;
pub mod graph;
pub mod local_search;
pub mod models;
pub mod replan;
pub mod scoring;
pub mod search;
pub mod solver;
