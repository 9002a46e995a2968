//! Road network model: nodes, reliability-weighted edges, adjacency.
//!
//! The graph is shared read-mostly state: searches, allocation, and
//! scoring take `&Graph`, while replanning takes `&mut Graph` for edge
//! removal, so a mutation can never interleave with an in-flight query.

mod error;
mod network;

pub use error::GraphError;
pub use network::{CostModel, Graph, Neighbor};
