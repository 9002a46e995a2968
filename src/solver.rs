//! End-to-end solve pipeline.

use log::debug;

use crate::allocation::{allocate, select_by_priority};
use crate::graph::{CostModel, Graph};
use crate::local_search::two_opt;
use crate::models::{ScoreWeights, SolutionMetrics, Vehicle};
use crate::replan::replan;
use crate::scoring::evaluate_solution;

/// Orders stops as a greedy nearest-neighbor chain from `start`.
///
/// Only direct edges are consulted; when no unvisited stop is directly
/// reachable the remainder is appended in its given order. Good enough
/// as a seed for the 2-opt pass that follows.
fn nearest_neighbor_order(graph: &Graph, stops: &[usize], start: usize) -> Vec<usize> {
    let mut order = vec![start];
    let mut remaining: Vec<usize> = stops.to_vec();
    let mut current = start;

    while !remaining.is_empty() {
        let nearest = remaining
            .iter()
            .enumerate()
            .filter_map(|(i, &stop)| {
                graph
                    .edge_cost(current, stop, CostModel::Base)
                    .map(|cost| (i, cost))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1));

        match nearest {
            Some((i, _)) => {
                current = remaining.remove(i);
                order.push(current);
            }
            None => {
                order.extend(remaining.drain(..));
            }
        }
    }

    order
}

/// One-shot batch solver owning the graph and the fleet.
///
/// Runs the full pipeline (greedy allocation, per-route 2-opt, fleet
/// scoring) as a single-threaded, synchronous computation. Replanning
/// for a vehicle goes through [`Solver::replan_vehicle`], which holds the
/// graph exclusively while edges are removed.
///
/// # Examples
///
/// ```
/// use relief_routing::graph::Graph;
/// use relief_routing::models::{Node, Vehicle};
/// use relief_routing::solver::Solver;
///
/// let mut g = Graph::new();
/// g.add_node(Node::depot()).unwrap();
/// g.add_node(Node::new(1, 2, 4)).unwrap();
/// g.add_edge(0, 1, 1.0, 0.9).unwrap();
///
/// let mut solver = Solver::new(g, vec![Vehicle::new(0, 5)], 0);
/// let metrics = solver.solve();
/// assert_eq!(metrics.served, 1);
/// assert!(metrics.unserved.is_empty());
/// ```
pub struct Solver {
    graph: Graph,
    vehicles: Vec<Vehicle>,
    depot: usize,
    weights: ScoreWeights,
}

impl Solver {
    /// Creates a solver with default scoring weights.
    pub fn new(graph: Graph, vehicles: Vec<Vehicle>, depot: usize) -> Self {
        Self {
            graph,
            vehicles,
            depot,
            weights: ScoreWeights::default(),
        }
    }

    /// Overrides the scoring weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The shared road network.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The fleet with its current route state.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Runs allocation, improves every route with 2-opt, and scores the
    /// result.
    ///
    /// Can be called again after replanning or graph mutation; vehicle
    /// state is reset by the allocation phase.
    pub fn solve(&mut self) -> SolutionMetrics {
        debug!("allocating {} vehicles", self.vehicles.len());
        let unserved = allocate(&self.graph, &mut self.vehicles, self.depot);
        if !unserved.is_empty() {
            debug!("{} nodes left unserved", unserved.len());
        }

        debug!("improving routes");
        for vehicle in &mut self.vehicles {
            let improved = two_opt(&self.graph, vehicle.route());
            vehicle.set_route(improved);
        }

        debug!("evaluating solution");
        evaluate_solution(&self.graph, &self.vehicles, self.weights)
    }

    /// Re-selects every route's stops by priority under capacity and
    /// reorders them, then rescores.
    ///
    /// For each vehicle the assigned stops are put through a 0/1 knapsack
    /// (maximizing priority within capacity; stops that no longer make
    /// the cut are dropped), chained nearest-neighbor from the depot, and
    /// polished with 2-opt. Useful when allocation overshot the
    /// highest-value mix; routes the knapsack leaves empty stay empty.
    pub fn refine_capacity(&mut self) -> SolutionMetrics {
        for vehicle in &mut self.vehicles {
            let stops: Vec<usize> = vehicle
                .route()
                .iter()
                .copied()
                .filter(|&stop| stop != self.depot)
                .collect();
            if stops.is_empty() {
                continue;
            }

            let (selected, priority) =
                select_by_priority(&self.graph, &stops, vehicle.capacity());
            debug!(
                "vehicle {}: kept {}/{} stops (priority {priority})",
                vehicle.id(),
                selected.len(),
                stops.len()
            );

            let ordered = nearest_neighbor_order(&self.graph, &selected, self.depot);
            vehicle.reset_route(self.depot);
            for &stop in &ordered[1..] {
                let demand = self.graph.node(stop).map_or(0, |n| n.demand());
                vehicle.assign(stop, demand);
            }
            vehicle.close_route(self.depot);

            let improved = two_opt(&self.graph, vehicle.route());
            vehicle.set_route(improved);
        }

        evaluate_solution(&self.graph, &self.vehicles, self.weights)
    }

    /// Replans one vehicle's remaining route around blocked edges.
    ///
    /// Returns the new route, or `None` for an unknown vehicle id. See
    /// [`replan`] for the procedure; the removed edges stay removed for
    /// every later query on this solver.
    pub fn replan_vehicle(
        &mut self,
        vehicle_id: usize,
        current_location: usize,
        blocked_edges: &[(usize, usize)],
    ) -> Option<Vec<usize>> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id() == vehicle_id)?;
        Some(replan(
            &mut self.graph,
            vehicle,
            current_location,
            self.depot,
            blocked_edges,
        ))
    }
}
