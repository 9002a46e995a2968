//! Vehicle type with capacity and route state.

use serde::{Deserialize, Serialize};

/// A capacity-limited vehicle and its assigned route.
///
/// The route is an ordered sequence of node ids. Allocation seeds it with
/// the depot, appends assigned stops, and closes it with the depot again;
/// route improvement reorders the interior in place, and replanning
/// replaces the whole sequence. `current_load` grows monotonically during
/// one allocation run and is reset only by the next run.
///
/// # Examples
///
/// ```
/// use relief_routing::models::Vehicle;
///
/// let mut v = Vehicle::new(0, 10);
/// v.reset_route(0);
/// assert!(v.can_serve(4));
/// v.assign(3, 4);
/// v.close_route(0);
/// assert_eq!(v.route(), &[0, 3, 0]);
/// assert_eq!(v.current_load(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
    current_load: i32,
    route: Vec<usize>,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and capacity.
    ///
    /// `capacity` must be positive. The route starts empty; allocation
    /// seeds it with the depot.
    pub fn new(id: usize, capacity: i32) -> Self {
        debug_assert!(capacity > 0, "vehicle capacity must be positive");
        Self {
            id,
            capacity,
            current_load: 0,
            route: Vec::new(),
        }
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Load accumulated by the current allocation run.
    pub fn current_load(&self) -> i32 {
        self.current_load
    }

    /// Capacity still available.
    pub fn remaining_capacity(&self) -> i32 {
        self.capacity - self.current_load
    }

    /// Returns `true` if a stop with the given demand still fits.
    pub fn can_serve(&self, demand: i32) -> bool {
        self.current_load + demand <= self.capacity
    }

    /// The assigned route, in visit order.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// The most recently appended stop, if any.
    pub fn last_stop(&self) -> Option<usize> {
        self.route.last().copied()
    }

    /// Clears the route to a fresh depot seed and zeroes the load.
    pub fn reset_route(&mut self, depot: usize) {
        self.route.clear();
        self.route.push(depot);
        self.current_load = 0;
    }

    /// Appends a stop and accounts for its demand.
    pub fn assign(&mut self, node: usize, demand: i32) {
        self.route.push(node);
        self.current_load += demand;
    }

    /// Closes the route by returning to the depot.
    pub fn close_route(&mut self, depot: usize) {
        self.route.push(depot);
    }

    /// Replaces the stored route (route improvement, replanning).
    pub fn set_route(&mut self, route: Vec<usize>) {
        self.route = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(1, 50);
        assert_eq!(v.id(), 1);
        assert_eq!(v.capacity(), 50);
        assert_eq!(v.current_load(), 0);
        assert!(v.route().is_empty());
        assert!(v.last_stop().is_none());
    }

    #[test]
    fn test_can_serve_boundary() {
        let mut v = Vehicle::new(0, 5);
        v.reset_route(0);
        assert!(v.can_serve(5));
        v.assign(1, 5);
        assert!(v.can_serve(0));
        assert!(!v.can_serve(1));
        assert_eq!(v.remaining_capacity(), 0);
    }

    #[test]
    fn test_route_lifecycle() {
        let mut v = Vehicle::new(0, 10);
        v.reset_route(0);
        v.assign(4, 3);
        v.assign(2, 5);
        v.close_route(0);
        assert_eq!(v.route(), &[0, 4, 2, 0]);
        assert_eq!(v.current_load(), 8);

        v.reset_route(0);
        assert_eq!(v.route(), &[0]);
        assert_eq!(v.current_load(), 0);
    }

    #[test]
    fn test_set_route_keeps_load() {
        let mut v = Vehicle::new(0, 10);
        v.reset_route(0);
        v.assign(1, 6);
        v.close_route(0);
        v.set_route(vec![0, 5, 1, 0]);
        assert_eq!(v.route(), &[0, 5, 1, 0]);
        assert_eq!(v.current_load(), 6);
    }
}
