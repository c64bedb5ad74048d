//! Random number infrastructure for Monte Carlo simulation.
//!
//! Randomness is injected as a capability: the Monte Carlo engine takes a
//! [`NormalVariateSource`] built over any [`UniformSource`], never touching
//! process-wide state. Seeding the underlying source makes a whole
//! simulation reproducible draw for draw.
//!
//! - [`uniform`]: the [`UniformSource`] trait and the seeded
//!   [`SeededUniform`] implementation over `rand::StdRng`
//! - [`normal`]: [`NormalVariateSource`], the Box-Muller transform over an
//!   injected uniform source

pub mod normal;
pub mod uniform;

pub use normal::NormalVariateSource;
pub use uniform::{SeededUniform, UniformSource};
