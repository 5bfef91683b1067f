//! Distance functions.
//!
//! Plain Euclidean distance in coordinate space. Latitude and longitude are
//! treated as planar values; no geodesic correction is applied.

mod euclidean;

pub use euclidean::{euclidean, path_length};
