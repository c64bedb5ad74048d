//! Explicit finite-difference pricing of the American call.
//!
//! Builds a two-dimensional (asset price × time) grid, pins the terminal
//! and boundary conditions, then backward-induces an explicit discretisation
//! of the pricing PDE with the early-exercise floor enforced at every
//! interior node. Time stepping uses alternating one-sided (Saul'yev)
//! sweeps, which keep every update explicit without the `dt`-versus-`ds²`
//! restriction a single-level scheme would impose.
//!
//! No grid parameter is validated or guarded: degenerate resolutions and
//! non-finite contract fields propagate as degenerate floats, the same as
//! the other engines. Callers pick their grids.
//!
//! - [`grid`]: [`PriceGrid`], the contiguous row-major value buffer
//! - [`engine`]: [`FiniteDifferencePricer`] and [`GridSpec`]

pub mod engine;
pub mod grid;

pub use engine::{FiniteDifferencePricer, GridSpec};
pub use grid::PriceGrid;
