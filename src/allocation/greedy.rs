//! Greedy priority-first assignment of locations to vehicles.

use std::cmp::Reverse;

use log::{debug, warn};

use crate::graph::{CostModel, Graph};
use crate::models::Vehicle;
use crate::search::{astar, path_cost};

/// Assigns demand locations to vehicles, cheapest feasible vehicle first.
///
/// Every vehicle is reset to a fresh depot-seeded route, then all
/// non-depot nodes are considered once, in priority order (descending,
/// ties broken by node id ascending). For each node, every vehicle with
/// enough remaining capacity is costed by a heuristic search from its
/// current last stop to the node; the candidate's cost is the sum of base
/// edge costs along the returned path, and a vehicle whose path is absent
/// or crosses a missing edge is skipped. The node goes to the cheapest
/// feasible vehicle (the first one on ties) and is never reconsidered.
/// Finally every route is closed with the depot.
///
/// Nodes no vehicle can take are left unserved and returned; that is a
/// normal heuristic outcome, not an error. The procedure is greedy with no
/// backtracking: O(K·V) path queries for K vehicles and V nodes, at the
/// cost of global optimality.
///
/// # Examples
///
/// ```
/// use relief_routing::allocation::allocate;
/// use relief_routing::graph::Graph;
/// use relief_routing::models::{Node, Vehicle};
///
/// let mut g = Graph::new();
/// g.add_node(Node::depot()).unwrap();
/// g.add_node(Node::new(1, 2, 5)).unwrap();
/// g.add_edge(0, 1, 1.0, 1.0).unwrap();
///
/// let mut fleet = vec![Vehicle::new(0, 10)];
/// let unserved = allocate(&g, &mut fleet, 0);
/// assert!(unserved.is_empty());
/// assert_eq!(fleet[0].route(), &[0, 1, 0]);
/// ```
pub fn allocate(graph: &Graph, vehicles: &mut [Vehicle], depot: usize) -> Vec<usize> {
    for vehicle in vehicles.iter_mut() {
        vehicle.reset_route(depot);
    }

    let mut candidates: Vec<usize> = graph
        .node_ids()
        .into_iter()
        .filter(|&id| id != depot)
        .collect();
    candidates.sort_by_key(|&id| {
        let priority = graph.node(id).map_or(0, |n| n.priority());
        (Reverse(priority), id)
    });

    let mut unserved = Vec::new();

    for node_id in candidates {
        let Some(node) = graph.node(node_id) else {
            continue;
        };

        let mut best: Option<(usize, f64)> = None;
        for (index, vehicle) in vehicles.iter().enumerate() {
            if !vehicle.can_serve(node.demand()) {
                continue;
            }
            let Some(last) = vehicle.last_stop() else {
                continue;
            };
            let Some(path) = astar(graph, last, node_id) else {
                continue;
            };
            // Re-cost the path edge by edge; a path that crosses a
            // now-missing edge is unusable for this assignment.
            let Some(cost) = path_cost(graph, &path.nodes, CostModel::Base) else {
                continue;
            };
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((index, cost));
            }
        }

        match best {
            Some((index, cost)) => {
                debug!(
                    "node {node_id} -> vehicle {} (path cost {cost:.3})",
                    vehicles[index].id()
                );
                vehicles[index].assign(node_id, node.demand());
            }
            None => {
                warn!("node {node_id} left unserved: no feasible vehicle");
                unserved.push(node_id);
            }
        }
    }

    for vehicle in vehicles.iter_mut() {
        vehicle.close_route(depot);
    }

    unserved
}
