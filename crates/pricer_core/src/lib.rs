//! # Pricer Core (Layer 1: Domain Types)
//!
//! Shared domain types for the option pricing workspace:
//!
//! - [`OptionContract`]: immutable contract parameters for one pricing call
//! - [`PricingResult`]: output common to every engine
//! - [`ContractError`]: boundary validation failure
//!
//! ## Design
//!
//! This crate is a leaf dependency with no I/O and no randomness. The
//! pricing engines in `pricer_engines` consume these types without
//! re-validating them; validation happens exactly once, at the service
//! boundary, via [`OptionContract::validate`].
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::OptionContract;
//!
//! let contract = OptionContract::new(100.0, 100.0, 0.2, 0.05, 1.0);
//! assert!(contract.validate().is_ok());
//! assert_eq!(contract.dividend_yield, 0.0);
//! ```

pub mod contract;
pub mod result;

pub use contract::{ContractError, OptionContract};
pub use result::PricingResult;
