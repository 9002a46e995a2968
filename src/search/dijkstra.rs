//! Dijkstra single-source shortest paths.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::{CostModel, Graph};

/// Distance and parent labels produced by [`dijkstra`].
///
/// The source has distance 0 and no parent; nodes the search never
/// reached have neither a distance nor a parent.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: usize,
    distances: FxHashMap<usize, f64>,
    parents: FxHashMap<usize, usize>,
}

impl ShortestPathTree {
    /// The query's source node.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest known distance to `node`, or `None` if unreached.
    pub fn distance(&self, node: usize) -> Option<f64> {
        self.distances.get(&node).copied()
    }

    /// The node preceding `node` on its shortest path.
    ///
    /// `None` for the source and for unreached nodes.
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(&node).copied()
    }

    /// Returns `true` if the search reached `node`.
    pub fn reached(&self, node: usize) -> bool {
        self.distances.contains_key(&node)
    }

    /// Reconstructs the path from the source to `goal`.
    ///
    /// Returns `None` when `goal` was not reached. The path includes both
    /// endpoints; for `goal == source` it is the single-node path.
    pub fn path_to(&self, goal: usize) -> Option<Vec<usize>> {
        if !self.reached(goal) {
            return None;
        }
        Some(super::walk_parents(&self.parents, self.source, goal))
    }
}

/// Shortest paths from `source` to every reachable node.
///
/// Standard label-correcting search with a binary-heap frontier and a
/// settled set; edge weights follow `model`. O((V + E) log V).
///
/// A source with no incident edges (or absent from the graph entirely)
/// yields a tree containing only the source itself.
///
/// # Examples
///
/// ```
/// use relief_routing::graph::{CostModel, Graph};
/// use relief_routing::models::Node;
/// use relief_routing::search::dijkstra;
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_node(Node::transit(id)).unwrap();
/// }
/// g.add_edge(0, 1, 1.0, 1.0).unwrap();
/// g.add_edge(1, 2, 2.0, 1.0).unwrap();
///
/// let tree = dijkstra(&g, 0, CostModel::Base);
/// assert_eq!(tree.distance(2), Some(3.0));
/// assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
/// ```
pub fn dijkstra(graph: &Graph, source: usize, model: CostModel) -> ShortestPathTree {
    let mut distances = FxHashMap::default();
    let mut parents = FxHashMap::default();
    let mut settled = FxHashSet::default();

    distances.insert(source, 0.0);

    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), source)));

    while let Some(Reverse((OrderedFloat(dist), u))) = heap.pop() {
        if !settled.insert(u) {
            continue;
        }

        for neighbor in graph.neighbors(u) {
            let v = neighbor.node;
            if settled.contains(&v) {
                continue;
            }
            let alt = dist + model.weight(neighbor.cost, neighbor.reliability);
            if distances.get(&v).is_none_or(|&known| alt < known) {
                distances.insert(v, alt);
                parents.insert(v, u);
                heap.push(Reverse((OrderedFloat(alt), v)));
            }
        }
    }

    ShortestPathTree {
        source,
        distances,
        parents,
    }
}
