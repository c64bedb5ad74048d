//! Binomial lattice pricing of the American call.
//!
//! Builds a recombining Cox-Ross-Rubinstein tree, evaluates the call payoff
//! at the leaves, and backward-induces node values under the
//! dividend-adjusted risk-neutral probability with the early-exercise floor
//! applied at every node.

pub mod engine;

pub use engine::{BinomialLatticePricer, LatticeSpec};
