//! Domain model types for route ordering.
//!
//! Provides the point value type, the [`Located`] seam that lets callers
//! order their own labeled types, and the finished [`Route`].

mod point;
mod route;

pub use point::{Located, Point};
pub use route::Route;
