//! Nearest-neighbor constructive heuristic for the open-path TSP.
//!
//! Starts at the first input point and greedily appends the nearest
//! unvisited point to the end of the path until every point is placed.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in input order and the best is replaced only by a
//! strictly smaller distance, so among equidistant candidates the one that
//! appears first in the input wins. A NaN distance never compares smaller,
//! so a NaN candidate is only chosen when it is the first one scanned, and
//! then nothing later can replace it.
//!
//! # Complexity
//!
//! O(n²) time, O(n) extra space.

use log::debug;

use crate::models::{Located, Point, Route};

/// Returns the nearest-neighbor visiting order as indices into `points`.
///
/// The first index is always `0` for non-empty input, and the result is a
/// permutation of `0..points.len()`.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::Point;
/// use u_route_nn::constructive::nearest_neighbor_order;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 5.0),
///     Point::new(1.0, 1.0),
/// ];
/// assert_eq!(nearest_neighbor_order(&points), vec![0, 2, 1]);
/// ```
pub fn nearest_neighbor_order<P: Located>(points: &[P]) -> Vec<usize> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    visited[0] = true;
    order.push(0);
    let mut current = 0;

    for _ in 1..n {
        let last = &points[current];
        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = last.distance_to(candidate);
            let better = match best {
                None => true,
                Some((_, best_d)) => d < best_d,
            };
            if better {
                best = Some((i, d));
            }
        }

        // n - 1 passes, one unvisited point consumed per pass.
        let Some((next, _)) = best else { break };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

/// Reorders `points` with the nearest-neighbor heuristic.
///
/// Returns a new vector; the input slice is left untouched. Any
/// [`Located`] type works, so labels attached by the caller travel with
/// their coordinates.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::Point;
/// use u_route_nn::constructive::optimize;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let ordered = optimize(&points);
/// assert_eq!(ordered.len(), 3);
/// assert_eq!(ordered[0], points[0]);
/// assert_eq!(ordered[2], Point::new(1.0, 1.0));
/// ```
pub fn optimize<P: Located + Clone>(points: &[P]) -> Vec<P> {
    debug!("nearest-neighbor ordering of {} points", points.len());
    nearest_neighbor_order(points)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Reorders `points` and wraps the result as a [`Route`].
pub fn optimize_route(points: &[Point]) -> Route {
    Route::new(optimize(points))
}
