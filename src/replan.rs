//! Dynamic replanning around blocked road segments.

use log::{debug, warn};

use crate::graph::Graph;
use crate::models::Vehicle;
use crate::search::astar;

/// Reroutes a vehicle after some of its edges became unusable.
///
/// The blocked edges are removed from the graph first, permanently for
/// the session, which is why this takes `&mut Graph`: edge removal must
/// not interleave with queries on the same graph, and the exclusive
/// borrow enforces that scope.
///
/// The remainder of the vehicle's stored route (every stop after
/// `current_location` that is not the depot) is then rebuilt by chaining
/// heuristic searches: current location to first remaining stop, that
/// stop to the next, and so on, splicing each found path in without its
/// duplicated head. A stop the search cannot reach is dropped with a
/// warning and replanning continues; partial failure never aborts the
/// procedure. A final search leads back to the depot.
///
/// The new route replaces the vehicle's stored route and is also
/// returned; subsequent scoring runs against it. If `current_location`
/// does not appear in the stored route there is nothing left to serve
/// and the result is the best-effort path home.
///
/// # Examples
///
/// ```
/// use relief_routing::graph::Graph;
/// use relief_routing::models::{Node, Vehicle};
/// use relief_routing::replan::replan;
///
/// let mut g = Graph::new();
/// for id in 0..3 {
///     g.add_node(Node::transit(id)).unwrap();
/// }
/// g.add_edge(0, 1, 1.0, 1.0).unwrap();
/// g.add_edge(1, 2, 1.0, 1.0).unwrap();
/// g.add_edge(0, 2, 1.0, 1.0).unwrap();
///
/// let mut v = Vehicle::new(0, 10);
/// v.set_route(vec![0, 1, 2, 0]);
///
/// // Block the leg the vehicle was about to take.
/// let route = replan(&mut g, &mut v, 0, 0, &[(0, 1)]);
/// assert_eq!(route.first(), Some(&0));
/// assert_eq!(route.last(), Some(&0));
/// assert!(!route.windows(2).any(|w| w == [0, 1] || w == [1, 0]));
/// ```
pub fn replan(
    graph: &mut Graph,
    vehicle: &mut Vehicle,
    current_location: usize,
    depot: usize,
    blocked_edges: &[(usize, usize)],
) -> Vec<usize> {
    for &(u, v) in blocked_edges {
        debug!("removing blocked edge {u}-{v}");
        graph.remove_edge(u, v);
    }

    let remaining: Vec<usize> = match vehicle
        .route()
        .iter()
        .position(|&stop| stop == current_location)
    {
        Some(at) => vehicle.route()[at + 1..]
            .iter()
            .copied()
            .filter(|&stop| stop != depot)
            .collect(),
        None => Vec::new(),
    };

    let mut new_route = vec![current_location];
    let mut position = current_location;

    for stop in remaining {
        match astar(graph, position, stop) {
            Some(path) => {
                new_route.extend(&path.nodes[1..]);
                position = stop;
            }
            None => {
                warn!(
                    "vehicle {}: no path from {position} to stop {stop}, dropping it",
                    vehicle.id()
                );
            }
        }
    }

    match astar(graph, position, depot) {
        Some(path) => new_route.extend(&path.nodes[1..]),
        None => {
            warn!(
                "vehicle {}: no path from {position} back to depot {depot}",
                vehicle.id()
            );
        }
    }

    vehicle.set_route(new_route.clone());
    new_route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Node;

    /// The allocator's cluster graph: depot plus four demand nodes.
    fn cluster_graph() -> Graph {
        let mut g = Graph::new();
        g.add_node(Node::depot()).expect("depot");
        g.add_node(Node::new(1, 3, 5)).expect("node 1");
        g.add_node(Node::new(2, 2, 3)).expect("node 2");
        g.add_node(Node::new(3, 4, 4)).expect("node 3");
        g.add_node(Node::new(4, 1, 2)).expect("node 4");
        g.add_edge(0, 1, 4.0, 0.9).expect("edge");
        g.add_edge(0, 2, 2.0, 0.95).expect("edge");
        g.add_edge(1, 2, 1.0, 0.85).expect("edge");
        g.add_edge(1, 3, 5.0, 0.8).expect("edge");
        g.add_edge(2, 4, 3.0, 0.9).expect("edge");
        g.add_edge(3, 4, 2.0, 0.75).expect("edge");
        g
    }

    #[test]
    fn test_detours_around_blocked_edge() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 5);
        v.set_route(vec![0, 1, 2, 0]);

        let route = replan(&mut g, &mut v, 0, 0, &[(0, 1)]);

        assert_eq!(route, vec![0, 2, 1, 2, 0]);
        assert_eq!(v.route(), route.as_slice());
        assert!(!route.windows(2).any(|w| w == [0, 1] || w == [1, 0]));
        assert!(!g.has_edge(0, 1));
    }

    #[test]
    fn test_unreachable_stop_dropped() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 10);
        v.set_route(vec![0, 3, 4, 0]);

        // Severing 1-3 and 3-4 strands node 3 entirely.
        let route = replan(&mut g, &mut v, 0, 0, &[(1, 3), (3, 4)]);

        assert!(!route.contains(&3));
        assert!(route.contains(&4));
        assert_eq!(route.last(), Some(&0));
    }

    #[test]
    fn test_resumes_mid_route() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 10);
        v.set_route(vec![0, 1, 2, 4, 0]);

        // Already at node 1; only 2 and 4 remain.
        let route = replan(&mut g, &mut v, 1, 0, &[]);

        assert_eq!(route.first(), Some(&1));
        assert_eq!(route.last(), Some(&0));
        assert!(route.contains(&2));
        assert!(route.contains(&4));
        assert!(!route[1..].contains(&1));
    }

    #[test]
    fn test_unknown_location_goes_home() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 10);
        v.set_route(vec![0, 1, 0]);

        let route = replan(&mut g, &mut v, 4, 0, &[]);
        assert_eq!(route.first(), Some(&4));
        assert_eq!(route.last(), Some(&0));
        assert!(!route.contains(&1));
    }

    #[test]
    fn test_stranded_vehicle_keeps_partial_route() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 10);
        v.set_route(vec![0, 2, 0]);

        // Cutting both depot edges leaves no way back.
        let route = replan(&mut g, &mut v, 2, 0, &[(0, 1), (0, 2)]);
        assert_eq!(route.first(), Some(&2));
        assert_ne!(route.last(), Some(&0));
    }

    #[test]
    fn test_removal_is_permanent() {
        let mut g = cluster_graph();
        let mut v = Vehicle::new(0, 10);
        v.set_route(vec![0, 2, 0]);
        let _ = replan(&mut g, &mut v, 0, 0, &[(1, 2)]);
        assert!(!g.has_edge(1, 2));
        assert!(!g.has_edge(2, 1));
    }
}
