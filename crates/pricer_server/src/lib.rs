//! REST API server for the option pricing engines.
//!
//! Exposes the Monte Carlo, finite-difference, and binomial lattice engines
//! over HTTP with JSON bodies, including the price-curve sweep endpoints
//! used for charting. This crate owns everything the engines deliberately
//! do not: request validation, error mapping, CORS, logging, and
//! configuration.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;

/// Server version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
