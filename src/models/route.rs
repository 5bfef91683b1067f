//! Route type.

use serde::{Deserialize, Serialize};

use super::Point;
use crate::distance::path_length;

/// An ordered sequence of points: a finished visiting order.
///
/// A route is open (it does not return to its first point) and is not
/// modified after construction. Serializes as its list of points.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::{Point, Route};
///
/// let route = Route::new(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
/// assert_eq!(route.len(), 2);
/// assert!((route.total_distance() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    points: Vec<Point>,
}

impl Route {
    /// Wraps an already ordered list of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points in visit order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the route has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point visited.
    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    /// Last point visited.
    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Iterates over the points in visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Sum of Euclidean distances between consecutive points.
    pub fn total_distance(&self) -> f64 {
        path_length(&self.points)
    }

    /// Consumes the route, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl From<Vec<Point>> for Route {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
