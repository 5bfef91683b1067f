//! Service configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ingest::ColumnNames;

/// Environment variable naming the latitude column.
pub const ENV_LAT_COLUMN: &str = "ROUTES_LAT_COLUMN";
/// Environment variable naming the longitude column.
pub const ENV_LNG_COLUMN: &str = "ROUTES_LNG_COLUMN";
/// Environment variable holding the per-upload point limit.
pub const ENV_MAX_POINTS: &str = "ROUTES_MAX_POINTS";

/// Configuration for [`RouteService`](crate::service::RouteService).
///
/// # Examples
///
/// ```
/// use u_route_nn::config::ServiceConfig;
///
/// let config = ServiceConfig::default()
///     .with_columns("latitude", "longitude")
///     .with_max_points(10_000);
/// assert_eq!(config.columns.lat, "latitude");
/// assert_eq!(config.point_limit(), Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Header names of the coordinate columns in uploaded CSV.
    pub columns: ColumnNames,

    /// Maximum points per upload. 0 = no limit.
    ///
    /// Ordering is O(n²), so this is the knob for bounding request cost.
    pub max_points: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            columns: ColumnNames::default(),
            max_points: 0,
        }
    }
}

impl ServiceConfig {
    pub fn with_columns(mut self, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        self.columns = ColumnNames::new(lat, lng);
        self
    }

    pub fn with_max_points(mut self, n: usize) -> Self {
        self.max_points = n;
        self
    }

    /// The point limit, or `None` when unlimited.
    pub fn point_limit(&self) -> Option<usize> {
        (self.max_points > 0).then_some(self.max_points)
    }

    /// Builds a config from `ROUTES_*` environment variables, falling back
    /// to defaults for unset ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(lat) = non_empty(lookup(ENV_LAT_COLUMN)) {
            config.columns.lat = lat;
        }
        if let Some(lng) = non_empty(lookup(ENV_LNG_COLUMN)) {
            config.columns.lng = lng;
        }
        if let Some(raw) = non_empty(lookup(ENV_MAX_POINTS)) {
            config.max_points = raw.parse().map_err(|_| {
                Error::config(format!("{ENV_MAX_POINTS} must be a non-negative integer, got {raw:?}"))
            })?;
        }
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
