//! Local search operators for improving computed routes.
//!
//! - [`two_opt`] — intra-route 2-opt edge reversal, first-improvement

mod two_opt;

pub use two_opt::two_opt;
