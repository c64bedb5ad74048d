//! Standard-normal variates via the Box-Muller transform.

use std::f64::consts::TAU;

use super::uniform::UniformSource;

/// Produces one standard-normal sample per call from an injected uniform
/// source using the basic (polar-free) Box-Muller transform.
///
/// Each call draws two uniforms `u, v` strictly inside (0, 1) and returns
/// `sqrt(-2·ln u) · cos(2π·v)`. Only the cosine branch is used; the
/// companion sine-branch sample is discarded, so one normal costs two
/// uniform draws. That contract is deliberate and callers budget for it.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::rng::{NormalVariateSource, SeededUniform};
///
/// let mut normals = NormalVariateSource::new(SeededUniform::from_seed(42));
/// let z = normals.next_normal();
/// assert!(z.is_finite());
/// ```
pub struct NormalVariateSource<U> {
    uniforms: U,
}

impl<U: UniformSource> NormalVariateSource<U> {
    /// Wraps a uniform source.
    #[inline]
    pub fn new(uniforms: U) -> Self {
        Self { uniforms }
    }

    /// Consumes the wrapper, returning the underlying uniform source.
    #[inline]
    pub fn into_inner(self) -> U {
        self.uniforms
    }

    /// Returns the next standard-normal sample.
    #[inline]
    pub fn next_normal(&mut self) -> f64 {
        let u = self.nonzero_uniform();
        let v = self.nonzero_uniform();
        (-2.0 * u.ln()).sqrt() * (TAU * v).cos()
    }

    /// Draws a uniform strictly inside (0, 1), re-sampling on the boundary
    /// value 0 so that `ln(u)` never sees zero.
    #[inline]
    fn nonzero_uniform(&mut self) -> f64 {
        loop {
            let x = self.uniforms.next_uniform();
            if x > 0.0 {
                return x;
            }
        }
    }
}
