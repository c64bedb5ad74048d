//! Monte Carlo pricing of European options.
//!
//! Simulates independent asset-price paths under risk-neutral geometric
//! Brownian motion with one multiplicative update per trading day, then
//! averages discounted terminal payoffs into a call and a put price.
//!
//! The estimator is deliberately naive: no antithetic sampling, no control
//! variates, no early termination. Standard error shrinks as
//! `1/sqrt(path_count)` and nothing faster.
//!
//! - [`config`]: [`SimulationConfig`] governing precision and cost
//! - [`engine`]: [`MonteCarloPricer`], the path loop itself

pub mod config;
pub mod engine;

pub use config::SimulationConfig;
pub use engine::{MonteCarloPricer, TRADING_DAYS_PER_YEAR};
