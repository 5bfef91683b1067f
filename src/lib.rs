//! # u-route-nn
//!
//! Greedy nearest-neighbor ordering of 2-D points into a short open route,
//! plus the thin collaborators needed to use it: CSV ingestion, a route
//! store keyed by integer ids, and a service facade tying them together.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, Located trait)
//! - [`distance`] — Euclidean distance and path length
//! - [`constructive`] — Nearest-neighbor ordering
//! - [`ingest`] — CSV parsing of `lat`/`lng` columns
//! - [`store`] — Route store trait and in-memory implementation
//! - [`service`] — Upload / get / delete over a store
//! - [`config`] — Service configuration
//! - [`error`] — Crate error type

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ingest;
pub mod models;
pub mod service;
pub mod store;

pub use constructive::optimize;
pub use error::{Error, Result};
