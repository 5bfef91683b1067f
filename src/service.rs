//! Route service: ingest, optimize, persist.
//!
//! Ties CSV ingestion, nearest-neighbor ordering and a [`RouteStore`]
//! together behind upload / get / delete operations. Transport concerns
//! (HTTP, status codes) belong to whoever embeds this.

use std::io::Read;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::constructive::optimize_route;
use crate::error::{Error, Result};
use crate::ingest::{parse_points, read_points};
use crate::models::{Point, Route};
use crate::store::{RouteId, RouteStore};

/// A stored route together with its id.
///
/// Serializes as `{"id": 1, "points": [{"lat": .., "lng": ..}, ..]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub id: RouteId,
    #[serde(rename = "points")]
    pub route: Route,
}

/// Upload / fetch / delete facade over a [`RouteStore`].
///
/// # Examples
///
/// ```
/// use u_route_nn::models::Point;
/// use u_route_nn::service::RouteService;
/// use u_route_nn::store::MemoryRouteStore;
///
/// let service = RouteService::with_defaults(MemoryRouteStore::new());
/// let record = service.upload_csv("lat,lng\n0,0\n5,5\n1,1\n").unwrap();
/// assert_eq!(
///     record.route.points(),
///     &[Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(5.0, 5.0)]
/// );
/// assert_eq!(service.get(record.id).unwrap(), record);
/// ```
#[derive(Debug)]
pub struct RouteService<S: RouteStore> {
    store: S,
    config: ServiceConfig,
}

impl<S: RouteStore> RouteService<S> {
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, ServiceConfig::default())
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parses CSV text, orders the points and stores the route.
    pub fn upload_csv(&self, input: &str) -> Result<RouteRecord> {
        let points = parse_points(input, &self.config.columns).inspect_err(log_rejected)?;
        self.upload_points(&points)
    }

    /// Same as [`upload_csv`](Self::upload_csv), reading from a byte stream.
    pub fn upload_reader<R: Read>(&self, reader: R) -> Result<RouteRecord> {
        let points = read_points(reader, &self.config.columns).inspect_err(log_rejected)?;
        self.upload_points(&points)
    }

    /// Orders already parsed points and stores the route.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyPoints`] when the configured limit is exceeded; the
    /// ordering is not attempted in that case.
    pub fn upload_points(&self, points: &[Point]) -> Result<RouteRecord> {
        if let Some(limit) = self.config.point_limit() {
            if points.len() > limit {
                let err = Error::TooManyPoints {
                    count: points.len(),
                    limit,
                };
                log_rejected(&err);
                return Err(err);
            }
        }

        let route = optimize_route(points);
        let id = self.store.insert(route.clone())?;
        info!("uploaded route {id} ({} points)", route.len());
        Ok(RouteRecord { id, route })
    }

    /// Fetches a stored route.
    pub fn get(&self, id: RouteId) -> Result<RouteRecord> {
        let route = self.store.get(id)?.ok_or(Error::RouteNotFound(id))?;
        Ok(RouteRecord { id, route })
    }

    /// Deletes a stored route.
    pub fn delete(&self, id: RouteId) -> Result<()> {
        if self.store.delete(id)? {
            Ok(())
        } else {
            Err(Error::RouteNotFound(id))
        }
    }
}

fn log_rejected(err: &Error) {
    warn!("rejected route upload: {err}");
}
