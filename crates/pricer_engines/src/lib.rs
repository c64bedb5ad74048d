//! # Pricer Engines (Layer 2: Pricing Kernel)
//!
//! Three independent numerical pricing engines plus the random number
//! infrastructure that feeds the Monte Carlo engine:
//!
//! - [`rng`]: injectable uniform-sample capability and the Box-Muller
//!   standard-normal source built on top of it
//! - [`mc`]: naive Monte Carlo simulation of risk-neutral GBM paths,
//!   producing European call and put prices
//! - [`fdm`]: explicit finite-difference grid solver for the American call
//! - [`lattice`]: recombining binomial tree solver for the American call
//!   with dividend-adjusted risk-neutral probability
//!
//! ## Design
//!
//! Every engine is synchronous, CPU-bound, and free of shared mutable
//! state: each invocation allocates its own buffers and owns them for the
//! call's duration, so concurrent invocations on independent inputs need no
//! locking. None of the engines validates its input; the service boundary
//! does that once, and degenerate parameters surface as degenerate floats
//! (see `pricer_core::OptionContract::validate`).
//!
//! Randomness enters through the [`rng::UniformSource`] trait rather than
//! any process-wide generator, so simulations are seedable and fully
//! deterministic under test.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::OptionContract;
//! use pricer_engines::mc::{MonteCarloPricer, SimulationConfig};
//! use pricer_engines::rng::{NormalVariateSource, SeededUniform};
//!
//! let contract = OptionContract::new(100.0, 100.0, 0.2, 0.05, 1.0);
//! let pricer = MonteCarloPricer::new(SimulationConfig::new(10_000));
//! let mut normals = NormalVariateSource::new(SeededUniform::from_seed(42));
//!
//! let result = pricer.price(&contract, &mut normals);
//! assert!(result.call_price > 0.0);
//! ```

pub mod fdm;
pub mod lattice;
pub mod mc;
pub mod rng;
