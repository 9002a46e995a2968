//! Priority-maximal stop selection under a capacity bound.

use crate::graph::Graph;

/// Picks the subset of `candidates` that maximizes total priority without
/// the summed demand exceeding `capacity` (0/1 knapsack).
///
/// Returns the chosen node ids in their input order together with the
/// priority they add up to. Ids unknown to the graph are ignored. An
/// empty candidate list or non-positive capacity selects nothing.
///
/// DP table of O(n × capacity) entries; intended for the per-route
/// refinement pass where both stay small.
///
/// # Examples
///
/// ```
/// use relief_routing::allocation::select_by_priority;
/// use relief_routing::graph::Graph;
/// use relief_routing::models::Node;
///
/// let mut g = Graph::new();
/// g.add_node(Node::new(1, 3, 5)).unwrap();
/// g.add_node(Node::new(2, 4, 4)).unwrap();
/// g.add_node(Node::new(3, 2, 3)).unwrap();
///
/// // Capacity 5: {1, 3} beats {2} (priority 8 vs 4).
/// let (chosen, priority) = select_by_priority(&g, &[1, 2, 3], 5);
/// assert_eq!(chosen, vec![1, 3]);
/// assert_eq!(priority, 8);
/// ```
pub fn select_by_priority(
    graph: &Graph,
    candidates: &[usize],
    capacity: i32,
) -> (Vec<usize>, i32) {
    if candidates.is_empty() || capacity <= 0 {
        return (Vec::new(), 0);
    }

    let n = candidates.len();
    let cap = capacity as usize;
    let mut table = vec![vec![0i32; cap + 1]; n + 1];

    for i in 1..=n {
        let (demand, priority) = match graph.node(candidates[i - 1]) {
            Some(node) => (node.demand(), node.priority()),
            None => {
                table[i] = table[i - 1].clone();
                continue;
            }
        };
        let demand = demand.max(0) as usize;

        for w in 0..=cap {
            table[i][w] = table[i - 1][w];
            if demand <= w {
                table[i][w] = table[i][w].max(table[i - 1][w - demand] + priority);
            }
        }
    }

    // Backtrack: a row change at width w means item i was taken.
    let mut selected = Vec::new();
    let mut w = cap;
    for i in (1..=n).rev() {
        if table[i][w] != table[i - 1][w] {
            selected.push(candidates[i - 1]);
            if let Some(node) = graph.node(candidates[i - 1]) {
                w -= node.demand().max(0) as usize;
            }
        }
    }
    selected.reverse();

    (selected, table[n][cap])
}
