//! Graph construction errors.

use thiserror::Error;

/// Rejection reasons for graph construction.
///
/// Malformed input is rejected when the graph is built; the engine never
/// silently merges conflicting edges. Runtime conditions ("no path",
/// "no edge") are not errors and are represented as `Option`/empty
/// results instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GraphError {
    /// A node with this id already exists.
    #[error("node {0} already exists")]
    DuplicateNode(usize),
    /// An edge between this unordered pair already exists.
    #[error("edge between {0} and {1} already exists")]
    DuplicateEdge(usize, usize),
    /// Both endpoints are the same node.
    #[error("self-loop on node {0}")]
    SelfLoop(usize),
    /// An endpoint references a node that was never added.
    #[error("unknown node {0}")]
    UnknownNode(usize),
    /// Edge cost is negative or not finite.
    #[error("invalid edge cost {0}")]
    InvalidCost(f64),
    /// Edge reliability is outside (0, 1].
    #[error("invalid edge reliability {0}")]
    InvalidReliability(f64),
}
