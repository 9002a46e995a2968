//! Heuristic-guided single-pair search.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;

/// Weight of the priority bonus in the search guidance.
const PRIORITY_BONUS: f64 = 1.0;
/// Weight of the unreliability term in the search guidance.
const RISK_PENALTY: f64 = 1.0;

/// A node path found by [`astar`], with its accumulated base cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath {
    /// Visited nodes from start to goal, both inclusive.
    pub nodes: Vec<usize>,
    /// Sum of base edge costs along `nodes`.
    pub cost: f64,
}

/// Search guidance for a node.
///
/// Combines the cheapest incident edge cost, the Euclidean distance to
/// the goal when both nodes carry positions, a bonus for high-priority
/// nodes, and a penalty for unreliable surroundings, clamped to be
/// non-negative. The priority bonus makes this estimate inadmissible, so
/// the search is best-first rather than provably optimal.
fn guidance(graph: &Graph, node: usize, goal: usize) -> f64 {
    let mut min_cost = f64::INFINITY;
    let mut max_reliability: f64 = 0.0;
    for neighbor in graph.neighbors(node) {
        min_cost = min_cost.min(neighbor.cost);
        max_reliability = max_reliability.max(neighbor.reliability);
    }
    if !min_cost.is_finite() {
        min_cost = 0.0;
    }

    let euclidean = match (graph.node(node), graph.node(goal)) {
        (Some(a), Some(b)) => a.distance_to(b).unwrap_or(0.0),
        _ => 0.0,
    };
    let priority = graph.node(node).map_or(0, |n| n.priority()) as f64;

    let h = min_cost + euclidean - PRIORITY_BONUS * priority
        + RISK_PENALTY * (1.0 - max_reliability);
    h.max(0.0)
}

/// Best-first search from `start` to `goal` over base edge costs.
///
/// Relaxation works exactly as in Dijkstra; the frontier is ordered by
/// `g + guidance` instead of `g` alone. Because the guidance mixes a
/// priority bonus into the estimate it is not an admissible lower bound,
/// so the returned path is a good path, not a guaranteed shortest one.
/// The goal test happens when the goal is first settled.
///
/// Returns `None` when the search space is exhausted without reaching
/// `goal`; the caller decides how to degrade (skip the stop, mark the
/// vehicle infeasible).
///
/// # Examples
///
/// ```
/// use relief_routing::graph::Graph;
/// use relief_routing::models::Node;
/// use relief_routing::search::astar;
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_node(Node::transit(id)).unwrap();
/// }
/// g.add_edge(0, 1, 1.0, 1.0).unwrap();
/// g.add_edge(1, 2, 2.0, 1.0).unwrap();
///
/// let path = astar(&g, 0, 2).unwrap();
/// assert_eq!(path.nodes, vec![0, 1, 2]);
/// assert_eq!(path.cost, 3.0);
///
/// assert!(astar(&g, 2, 0).is_some());
/// ```
pub fn astar(graph: &Graph, start: usize, goal: usize) -> Option<SearchPath> {
    let mut g_score = FxHashMap::default();
    let mut parents = FxHashMap::default();
    let mut settled = FxHashSet::default();

    g_score.insert(start, 0.0);

    let mut frontier: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
    frontier.push(Reverse((OrderedFloat(guidance(graph, start, goal)), start)));

    while let Some(Reverse((_, current))) = frontier.pop() {
        if !settled.insert(current) {
            continue;
        }

        if current == goal {
            let nodes = super::walk_parents(&parents, start, goal);
            let cost = g_score[&goal];
            return Some(SearchPath { nodes, cost });
        }

        let current_g = g_score[&current];
        for neighbor in graph.neighbors(current) {
            let v = neighbor.node;
            if settled.contains(&v) {
                continue;
            }
            let tentative = current_g + neighbor.cost;
            if g_score.get(&v).is_none_or(|&known| tentative < known) {
                g_score.insert(v, tentative);
                parents.insert(v, current);
                let f = tentative + guidance(graph, v, goal);
                frontier.push(Reverse((OrderedFloat(f), v)));
            }
        }
    }

    None
}
