//! In-memory route store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use log::info;

use super::{RouteId, RouteStore};
use crate::error::{Error, Result};
use crate::models::Route;

/// Route store backed by a map in process memory.
///
/// Ids start at 1 and are never reused, even after deletion. Nothing
/// survives the process.
#[derive(Debug)]
pub struct MemoryRouteStore {
    routes: RwLock<BTreeMap<RouteId, Route>>,
    next_id: AtomicU64,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self {
            routes: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Ids of all stored routes, ascending.
    pub fn ids(&self) -> Result<Vec<RouteId>> {
        let routes = self.routes.read().map_err(poisoned)?;
        Ok(routes.keys().copied().collect())
    }
}

impl Default for MemoryRouteStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::store("route map lock poisoned")
}

impl RouteStore for MemoryRouteStore {
    fn insert(&self, route: Route) -> Result<RouteId> {
        let mut routes = self.routes.write().map_err(poisoned)?;
        let id = RouteId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        info!("storing route {id} with {} points", route.len());
        routes.insert(id, route);
        Ok(id)
    }

    fn get(&self, id: RouteId) -> Result<Option<Route>> {
        let routes = self.routes.read().map_err(poisoned)?;
        Ok(routes.get(&id).cloned())
    }

    fn delete(&self, id: RouteId) -> Result<bool> {
        let mut routes = self.routes.write().map_err(poisoned)?;
        let removed = routes.remove(&id).is_some();
        if removed {
            info!("deleted route {id}");
        }
        Ok(removed)
    }

    fn len(&self) -> Result<usize> {
        let routes = self.routes.read().map_err(poisoned)?;
        Ok(routes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;
    use std::sync::Arc;
    use std::thread;

    fn sample_route() -> Route {
        Route::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
    }

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let store = MemoryRouteStore::new();
        let a = store.insert(sample_route()).expect("insert");
        let b = store.insert(Route::default()).expect("insert");
        assert_eq!(a, RouteId::new(1));
        assert_eq!(b, RouteId::new(2));
        assert_eq!(store.len().expect("len"), 2);
    }

    #[test]
    fn test_get_roundtrip() {
        let store = MemoryRouteStore::new();
        let id = store.insert(sample_route()).expect("insert");
        assert_eq!(store.get(id).expect("get"), Some(sample_route()));
        assert_eq!(store.get(RouteId::new(99)).expect("get"), None);
    }

    #[test]
    fn test_delete() {
        let store = MemoryRouteStore::new();
        let id = store.insert(sample_route()).expect("insert");
        assert!(store.delete(id).expect("delete"));
        assert!(!store.delete(id).expect("delete"));
        assert!(store.is_empty().expect("is_empty"));
    }

    #[test]
    fn test_ids_not_reused() {
        let store = MemoryRouteStore::new();
        let a = store.insert(sample_route()).expect("insert");
        store.delete(a).expect("delete");
        let b = store.insert(sample_route()).expect("insert");
        assert_ne!(a, b);
        assert_eq!(store.ids().expect("ids"), vec![b]);
    }

    #[test]
    fn test_concurrent_inserts_unique_ids() {
        let store = Arc::new(MemoryRouteStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.insert(sample_route()).expect("insert"))
            })
            .collect();
        let mut ids: Vec<RouteId> = handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(store.len().expect("len"), 8);
    }
}
