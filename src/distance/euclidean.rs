//! Euclidean distance and open-path length.

use crate::models::Located;

/// Euclidean distance `sqrt(Δlat² + Δlng²)` between two coordinate pairs.
///
/// NaN and infinite inputs propagate per IEEE-754.
///
/// # Examples
///
/// ```
/// use u_route_nn::distance::euclidean;
///
/// assert!((euclidean(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dlat = lat1 - lat2;
    let dlng = lng1 - lng2;
    (dlat * dlat + dlng * dlng).sqrt()
}

/// Total length of the open path `points[0] → points[1] → ... → points[n-1]`.
///
/// Zero for fewer than two points.
pub fn path_length<P: Located>(points: &[P]) -> f64 {
    points
        .windows(2)
        .map(|w| w[0].distance_to(&w[1]))
        .sum()
}
