//! Constructive heuristics for ordering points into a route.
//!
//! - [`optimize`] — Greedy nearest-neighbor ordering, O(n²)
//! - [`nearest_neighbor_order`] — Same ordering expressed as input indices
//! - [`optimize_route`] — Ordering wrapped as a [`Route`](crate::models::Route)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_order, optimize, optimize_route};
