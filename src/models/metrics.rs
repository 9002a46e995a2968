//! Scoring configuration and derived cost snapshots.

use serde::{Deserialize, Serialize};

/// Weights of the multi-objective route score.
///
/// The score is a linear scalarization
/// `alpha * total_time + beta * reliability_penalty + gamma * idle_time`.
/// Different deployments legitimately weigh the objectives differently,
/// so the weights are configuration, not constants.
///
/// # Examples
///
/// ```
/// use relief_routing::models::ScoreWeights;
///
/// let w = ScoreWeights::new(1.0, 0.5, 0.3).unwrap();
/// assert_eq!(w.alpha(), 1.0);
///
/// // At least one weight must be positive.
/// assert!(ScoreWeights::new(0.0, 0.0, 0.0).is_none());
/// assert!(ScoreWeights::new(-1.0, 0.5, 0.3).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    alpha: f64,
    beta: f64,
    gamma: f64,
}

impl ScoreWeights {
    /// Creates a weight set.
    ///
    /// Returns `None` unless all three weights are finite and
    /// non-negative and at least one is positive.
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Option<Self> {
        let all_valid = [alpha, beta, gamma]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);
        if !all_valid || alpha + beta + gamma <= 0.0 {
            return None;
        }
        Some(Self { alpha, beta, gamma })
    }

    /// Weight on total travel cost.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Weight on route unreliability.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Weight on unused vehicle capacity.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for ScoreWeights {
    /// Balanced weighting that favors travel cost: (0.6, 0.3, 0.1).
    fn default() -> Self {
        Self {
            alpha: 0.6,
            beta: 0.3,
            gamma: 0.1,
        }
    }
}

/// Multi-objective cost breakdown of a single route.
///
/// A derived snapshot: recomputed on demand, never cached across route
/// mutations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteCost {
    /// Sum of base traversal costs along the route.
    pub total_time: f64,
    /// `1 - product(edge reliabilities)`; the chance the route breaks.
    pub reliability_penalty: f64,
    /// Unused capacity after allocation.
    pub idle_time: f64,
    /// Weighted sum of the three objectives.
    pub final_score: f64,
}

/// Fleet-level summary of a finished solve.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolutionMetrics {
    /// Combined `final_score` over all vehicles.
    pub total_score: f64,
    /// Combined base traversal cost over all routes.
    pub total_distance: f64,
    /// Distinct priority nodes visited by some route.
    pub served: usize,
    /// Priority sum over the served nodes.
    pub served_priority: i32,
    /// Priority nodes no route visits.
    pub unserved: Vec<usize>,
}
