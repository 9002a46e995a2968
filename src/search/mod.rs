//! Shortest-path primitives over the road network.
//!
//! - [`dijkstra`] — single-source labels over all reachable nodes
//! - [`astar`] — heuristic-guided single-pair search (best-first)
//!
//! Both share the same relaxation discipline: a binary-heap frontier
//! keyed by `(priority, node id)` so ties break deterministically on the
//! lower node id, and a settled set so each node is expanded once.

mod astar;
mod dijkstra;

pub use astar::{astar, SearchPath};
pub use dijkstra::{dijkstra, ShortestPathTree};

use rustc_hash::FxHashMap;

use crate::graph::{CostModel, Graph};

/// Walks parent links from `goal` back to `source` and reverses.
///
/// Callers check reachability first; an incomplete chain yields the
/// partial suffix that was reachable.
fn walk_parents(parents: &FxHashMap<usize, usize>, source: usize, goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != source {
        match parents.get(&current) {
            Some(&p) => {
                path.push(p);
                current = p;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Sums edge costs along a node path under the given model.
///
/// Returns `None` if any consecutive pair is not connected by an edge
/// (the path is unusable for this purpose). Paths with fewer than two
/// nodes cost zero.
pub fn path_cost(graph: &Graph, path: &[usize], model: CostModel) -> Option<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        total += graph.edge_cost(pair[0], pair[1], model)?;
    }
    Some(total)
}
