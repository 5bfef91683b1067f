//! Point type and the coordinate access trait.

use serde::{Deserialize, Serialize};

/// Anything with a 2-D position the optimizer can order.
///
/// Implement this for your own labeled types to carry ids or payloads
/// through [`optimize`](crate::constructive::optimize) unchanged.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::Located;
///
/// #[derive(Clone)]
/// struct Stop {
///     name: &'static str,
///     lat: f64,
///     lng: f64,
/// }
///
/// impl Located for Stop {
///     fn lat(&self) -> f64 { self.lat }
///     fn lng(&self) -> f64 { self.lng }
/// }
///
/// let a = Stop { name: "a", lat: 0.0, lng: 0.0 };
/// let b = Stop { name: "b", lat: 3.0, lng: 4.0 };
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
pub trait Located {
    /// Latitude (first coordinate).
    fn lat(&self) -> f64;

    /// Longitude (second coordinate).
    fn lng(&self) -> f64;

    /// Euclidean distance in coordinate space to another location.
    fn distance_to<O: Located + ?Sized>(&self, other: &O) -> f64 {
        crate::distance::euclidean(self.lat(), self.lng(), other.lat(), other.lng())
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }

    fn lng(&self) -> f64 {
        (**self).lng()
    }
}

/// A latitude/longitude pair.
///
/// Plain value with no identity beyond its coordinates. Serializes as
/// `{"lat": .., "lng": ..}`.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::{Located, Point};
///
/// let p = Point::new(55.75, 37.62);
/// assert_eq!(p.lat(), 55.75);
/// assert_eq!(p.lng(), 37.62);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    /// Creates a point. Any `f64` is accepted, including NaN and infinities.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Located for Point {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}
