//! Multi-objective route and solution evaluation.

use rustc_hash::FxHashSet;

use crate::graph::{CostModel, Graph};
use crate::models::{RouteCost, ScoreWeights, SolutionMetrics, Vehicle};

/// Scores a finalized route against the three objectives.
///
/// `total_time` sums base edge costs along the route; a consecutive pair
/// with no connecting edge contributes nothing (the leg was already
/// replanned or degenerate, not an error). The reliability penalty is
/// `1 - product(reliability)` over the edges that do exist: each segment
/// must independently hold, so the route survives with the product
/// probability. Idle time is the unused capacity. The final score is the
/// weighted sum, recomputed from scratch on every call.
///
/// Routes with fewer than two stops score zero.
///
/// # Examples
///
/// ```
/// use relief_routing::graph::Graph;
/// use relief_routing::models::{Node, ScoreWeights};
/// use relief_routing::scoring::route_cost;
///
/// let mut g = Graph::new();
/// g.add_node(Node::depot()).unwrap();
/// g.add_node(Node::new(1, 4, 2)).unwrap();
/// g.add_edge(0, 1, 3.0, 0.5).unwrap();
///
/// let w = ScoreWeights::new(1.0, 1.0, 1.0).unwrap();
/// let cost = route_cost(&g, &[0, 1, 0], 10, 4, w);
/// assert_eq!(cost.total_time, 6.0);
/// assert_eq!(cost.reliability_penalty, 0.75);
/// assert_eq!(cost.idle_time, 6.0);
/// ```
pub fn route_cost(
    graph: &Graph,
    route: &[usize],
    capacity: i32,
    delivered_load: i32,
    weights: ScoreWeights,
) -> RouteCost {
    if route.len() < 2 {
        return RouteCost::default();
    }

    let mut total_time = 0.0;
    let mut reliability = 1.0;
    for pair in route.windows(2) {
        if let Some(cost) = graph.edge_cost(pair[0], pair[1], CostModel::Base) {
            total_time += cost;
            if let Some(r) = graph.edge_reliability(pair[0], pair[1]) {
                reliability *= r;
            }
        }
    }

    let reliability_penalty = 1.0 - reliability;
    let idle_time = (capacity - delivered_load).max(0) as f64;
    let final_score = weights.alpha() * total_time
        + weights.beta() * reliability_penalty
        + weights.gamma() * idle_time;

    RouteCost {
        total_time,
        reliability_penalty,
        idle_time,
        final_score,
    }
}

/// Aggregates route costs and coverage over the whole fleet.
///
/// Coverage counts distinct priority nodes (priority > 0) that appear on
/// some route; priority nodes on no route are listed in
/// [`SolutionMetrics::unserved`], ascending. Leaving a node unserved is a
/// normal heuristic outcome, reported rather than raised.
pub fn evaluate_solution(
    graph: &Graph,
    vehicles: &[Vehicle],
    weights: ScoreWeights,
) -> SolutionMetrics {
    let mut total_score = 0.0;
    let mut total_distance = 0.0;
    let mut served: FxHashSet<usize> = FxHashSet::default();
    let mut served_priority = 0;

    for vehicle in vehicles {
        let cost = route_cost(
            graph,
            vehicle.route(),
            vehicle.capacity(),
            vehicle.current_load(),
            weights,
        );
        total_score += cost.final_score;

        for pair in vehicle.route().windows(2) {
            if let Some(c) = graph.edge_cost(pair[0], pair[1], CostModel::Base) {
                total_distance += c;
            }
        }

        for &stop in vehicle.route() {
            let Some(node) = graph.node(stop) else {
                continue;
            };
            if node.priority() > 0 && served.insert(stop) {
                served_priority += node.priority();
            }
        }
    }

    let unserved: Vec<usize> = graph
        .node_ids()
        .into_iter()
        .filter(|id| {
            graph
                .node(*id)
                .is_some_and(|n| n.priority() > 0 && !served.contains(id))
        })
        .collect();

    SolutionMetrics {
        total_score,
        total_distance,
        served: served.len(),
        served_priority,
        unserved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;
    use proptest::prelude::*;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        g.add_node(Node::depot()).expect("depot");
        g.add_node(Node::new(1, 3, 5)).expect("node 1");
        g.add_node(Node::new(2, 2, 3)).expect("node 2");
        g.add_edge(0, 1, 4.0, 0.9).expect("edge");
        g.add_edge(1, 2, 1.0, 0.8).expect("edge");
        g.add_edge(2, 0, 2.0, 1.0).expect("edge");
        g
    }

    #[test]
    fn test_trivial_routes_score_zero() {
        let g = sample_graph();
        let w = ScoreWeights::default();
        assert_eq!(route_cost(&g, &[], 10, 0, w), RouteCost::default());
        assert_eq!(route_cost(&g, &[0], 10, 0, w), RouteCost::default());
    }

    #[test]
    fn test_route_cost_breakdown() {
        let g = sample_graph();
        let w = ScoreWeights::new(1.0, 1.0, 1.0).expect("valid");
        let cost = route_cost(&g, &[0, 1, 2, 0], 10, 5, w);

        assert!((cost.total_time - 7.0).abs() < 1e-10);
        let expected_penalty = 1.0 - 0.9 * 0.8 * 1.0;
        assert!((cost.reliability_penalty - expected_penalty).abs() < 1e-10);
        assert_eq!(cost.idle_time, 5.0);
        let expected = cost.total_time + cost.reliability_penalty + cost.idle_time;
        assert!((cost.final_score - expected).abs() < 1e-10);
    }

    #[test]
    fn test_missing_edges_contribute_nothing() {
        let g = sample_graph();
        let w = ScoreWeights::new(1.0, 1.0, 0.0).expect("valid");
        // 0 -> 2 exists, 2 -> 1 exists, 1 -> 0 exists; 0 -> 9 and 9 -> 1 do not.
        let cost = route_cost(&g, &[0, 9, 1, 2, 0], 10, 10, w);
        assert!((cost.total_time - 3.0).abs() < 1e-10);
        let expected_penalty = 1.0 - 0.8 * 1.0;
        assert!((cost.reliability_penalty - expected_penalty).abs() < 1e-10);
    }

    #[test]
    fn test_idle_never_negative() {
        let g = sample_graph();
        let w = ScoreWeights::new(0.0, 0.0, 1.0).expect("valid");
        let cost = route_cost(&g, &[0, 1, 0], 5, 9, w);
        assert_eq!(cost.idle_time, 0.0);
        assert_eq!(cost.final_score, 0.0);
    }

    #[test]
    fn test_evaluate_solution_coverage() {
        let g = sample_graph();
        let mut full = Vehicle::new(0, 5);
        full.reset_route(0);
        full.assign(1, 3);
        full.assign(2, 2);
        full.close_route(0);
        let idle = Vehicle::new(1, 4);

        let metrics = evaluate_solution(&g, &[full, idle], ScoreWeights::default());
        assert_eq!(metrics.served, 2);
        assert_eq!(metrics.served_priority, 8);
        assert!(metrics.unserved.is_empty());
        assert!((metrics.total_distance - 7.0).abs() < 1e-10);
        assert!(metrics.total_score > 0.0);
    }

    #[test]
    fn test_evaluate_solution_reports_unserved() {
        let mut g = sample_graph();
        g.add_node(Node::new(7, 1, 9)).expect("stranded");
        let mut v = Vehicle::new(0, 5);
        v.reset_route(0);
        v.assign(1, 3);
        v.close_route(0);

        let metrics = evaluate_solution(&g, &[v], ScoreWeights::default());
        assert_eq!(metrics.served, 1);
        assert_eq!(metrics.unserved, vec![2, 7]);
    }

    proptest! {
        /// The reliability penalty stays within [0, 1] for any route over
        /// edges with reliability in (0, 1].
        #[test]
        fn prop_penalty_in_unit_interval(
            stops in proptest::collection::vec(0usize..6, 0..12),
            rels in proptest::collection::vec(0.05f64..1.0, 15),
        ) {
            let mut g = Graph::new();
            for id in 0..6 {
                g.add_node(Node::transit(id)).expect("add");
            }
            let mut k = 0;
            for u in 0..6 {
                for v in (u + 1)..6 {
                    if (u + v) % 2 == 0 {
                        g.add_edge(u, v, 1.0 + k as f64, rels[k]).expect("edge");
                        k += 1;
                    }
                }
            }

            let w = ScoreWeights::default();
            let cost = route_cost(&g, &stops, 10, 3, w);
            prop_assert!(cost.reliability_penalty >= 0.0);
            prop_assert!(cost.reliability_penalty <= 1.0);
        }
    }
}
