//! Pricing output shared by every engine.

use serde::{Deserialize, Serialize};

/// Result of one pricing invocation.
///
/// The Monte Carlo engine populates every field; the finite-difference and
/// binomial lattice engines price the American call only and leave
/// `put_price` and `terminal_prices` unset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Present value of the call.
    pub call_price: f64,
    /// Present value of the put, when the engine computes one.
    pub put_price: Option<f64>,
    /// Terminal asset prices per simulated path, when collection was
    /// requested (Monte Carlo only).
    pub terminal_prices: Option<Vec<f64>>,
}

impl PricingResult {
    /// Result carrying a call price only, as produced by the grid and
    /// lattice engines.
    #[inline]
    pub fn call_only(call_price: f64) -> Self {
        Self {
            call_price,
            put_price: None,
            terminal_prices: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_only_leaves_other_fields_unset() {
        let result = PricingResult::call_only(10.45);
        assert_eq!(result.call_price, 10.45);
        assert!(result.put_price.is_none());
        assert!(result.terminal_prices.is_none());
    }
}
