//! Route persistence.
//!
//! [`RouteStore`] is the seam between the route service and whatever keeps
//! routes around. [`MemoryRouteStore`] is the in-process implementation.

mod memory;

pub use memory::MemoryRouteStore;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Route;

/// Opaque identifier assigned to a stored route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(u64);

impl RouteId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RouteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Keeps optimized routes keyed by [`RouteId`].
///
/// Implementations assign ids on insert and must be safe to share between
/// threads.
///
/// # Examples
///
/// ```
/// use u_route_nn::models::{Point, Route};
/// use u_route_nn::store::{MemoryRouteStore, RouteStore};
///
/// let store = MemoryRouteStore::new();
/// let id = store.insert(Route::new(vec![Point::new(1.0, 2.0)])).unwrap();
/// assert_eq!(store.get(id).unwrap().map(|r| r.len()), Some(1));
/// assert!(store.delete(id).unwrap());
/// assert!(store.get(id).unwrap().is_none());
/// ```
pub trait RouteStore: Send + Sync {
    /// Stores a route under a freshly assigned id.
    fn insert(&self, route: Route) -> Result<RouteId>;

    /// Looks up a route by id.
    fn get(&self, id: RouteId) -> Result<Option<Route>>;

    /// Removes a route. Returns `true` if a route was removed.
    fn delete(&self, id: RouteId) -> Result<bool>;

    /// Number of stored routes.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
