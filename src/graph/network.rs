//! Weighted undirected graph with reliability-annotated edges.

use rustc_hash::FxHashMap;

use super::GraphError;
use crate::models::Node;

/// Selects how an edge is costed by queries.
///
/// `Weighted` inflates the base cost by unreliability: a perfectly
/// reliable edge is unpenalized, an edge near zero reliability approaches
/// double cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostModel {
    /// The raw traversal cost.
    Base,
    /// `cost * (2 - reliability)`.
    Weighted,
}

impl CostModel {
    /// Applies this model to a base cost and reliability.
    pub fn weight(self, cost: f64, reliability: f64) -> f64 {
        match self {
            CostModel::Base => cost,
            CostModel::Weighted => cost * (2.0 - reliability),
        }
    }
}

/// One adjacency entry: a directly connected node and the edge to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// The adjacent node id.
    pub node: usize,
    /// Base traversal cost of the connecting edge.
    pub cost: f64,
    /// Probability in (0, 1] that the connecting edge is usable.
    pub reliability: f64,
}

/// A weighted undirected graph of locations and road segments.
///
/// Edges are bidirectional with symmetric cost, and at most one edge
/// connects any unordered pair. The adjacency index is kept consistent
/// with the edge set: every edge appears in both endpoints' lists exactly
/// once per direction.
///
/// Node and adjacency lookups are O(1) amortized; neighbor enumeration is
/// O(degree). Edge removal is permanent for the session unless the edge
/// is explicitly re-added.
///
/// # Examples
///
/// ```
/// use relief_routing::graph::{CostModel, Graph};
/// use relief_routing::models::Node;
///
/// let mut g = Graph::new();
/// g.add_node(Node::depot()).unwrap();
/// g.add_node(Node::new(1, 3, 5)).unwrap();
/// g.add_edge(0, 1, 4.0, 0.5).unwrap();
///
/// assert_eq!(g.edge_cost(0, 1, CostModel::Base), Some(4.0));
/// assert_eq!(g.edge_cost(0, 1, CostModel::Weighted), Some(6.0));
/// assert_eq!(g.edge_cost(1, 2, CostModel::Base), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: FxHashMap<usize, Node>,
    adjacency: FxHashMap<usize, Vec<Neighbor>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    ///
    /// Rejects a node whose id is already present.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.nodes.contains_key(&node.id()) {
            return Err(GraphError::DuplicateNode(node.id()));
        }
        self.adjacency.entry(node.id()).or_default();
        self.nodes.insert(node.id(), node);
        Ok(())
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Rejects self-loops, endpoints that were never added, duplicate
    /// unordered pairs, negative or non-finite costs, and reliabilities
    /// outside (0, 1].
    pub fn add_edge(
        &mut self,
        u: usize,
        v: usize,
        cost: f64,
        reliability: f64,
    ) -> Result<(), GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if !self.nodes.contains_key(&u) {
            return Err(GraphError::UnknownNode(u));
        }
        if !self.nodes.contains_key(&v) {
            return Err(GraphError::UnknownNode(v));
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost(cost));
        }
        if !reliability.is_finite() || reliability <= 0.0 || reliability > 1.0 {
            return Err(GraphError::InvalidReliability(reliability));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(u, v));
        }

        self.adjacency.entry(u).or_default().push(Neighbor {
            node: v,
            cost,
            reliability,
        });
        self.adjacency.entry(v).or_default().push(Neighbor {
            node: u,
            cost,
            reliability,
        });
        self.edge_count += 1;
        Ok(())
    }

    /// The adjacency list of `id`.
    ///
    /// Unknown or isolated nodes yield an empty slice, never an error.
    pub fn neighbors(&self, id: usize) -> &[Neighbor] {
        self.adjacency.get(&id).map_or(&[], |list| list.as_slice())
    }

    /// Returns `true` if an edge connects `u` and `v`.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).iter().any(|n| n.node == v)
    }

    /// Cost of the edge between `u` and `v` under the given model.
    ///
    /// `None` when no such edge exists.
    pub fn edge_cost(&self, u: usize, v: usize, model: CostModel) -> Option<f64> {
        self.neighbors(u)
            .iter()
            .find(|n| n.node == v)
            .map(|n| model.weight(n.cost, n.reliability))
    }

    /// Reliability of the edge between `u` and `v`.
    ///
    /// `None` when no such edge exists.
    pub fn edge_reliability(&self, u: usize, v: usize) -> Option<f64> {
        self.neighbors(u)
            .iter()
            .find(|n| n.node == v)
            .map(|n| n.reliability)
    }

    /// Removes the edge between `u` and `v` from both adjacency lists.
    ///
    /// Idempotent: removing a missing edge is a no-op. The endpoints stay
    /// valid nodes even if this leaves them isolated.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if !self.has_edge(u, v) {
            return;
        }
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.retain(|n| n.node != v);
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.retain(|n| n.node != u);
        }
        self.edge_count -= 1;
    }

    /// Looks up a node by id.
    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// All node ids, ascending.
    pub fn node_ids(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
