//! Recombining binomial tree solver.

use pricer_core::{OptionContract, PricingResult};

/// Binomial tree depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeSpec {
    steps: usize,
}

impl LatticeSpec {
    /// Creates a specification for a tree of the given depth.
    #[inline]
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Number of time steps in the tree.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Binomial lattice pricer for the American call.
///
/// Uses Cox-Ross-Rubinstein factors `u = exp(σ√dt)`, `d = 1/u` and the
/// dividend-adjusted risk-neutral probability
/// `p = (exp((r − q)·dt) − d) / (u − d)`. Backward induction mutates two
/// `steps + 1` arrays in place, recovering each node's asset price by
/// dividing the stored leaf price by `u` instead of rebuilding the tree.
///
/// With zero dividend yield early exercise is never optimal for the call,
/// and the price converges to the European value as `steps` grows.
///
/// # Examples
///
/// ```rust
/// use pricer_core::OptionContract;
/// use pricer_engines::lattice::{BinomialLatticePricer, LatticeSpec};
///
/// let contract = OptionContract::new(100.0, 100.0, 0.2, 0.05, 1.0);
/// let pricer = BinomialLatticePricer::new(LatticeSpec::new(500));
///
/// let result = pricer.price(&contract);
/// assert!(result.call_price >= contract.call_intrinsic());
/// ```
pub struct BinomialLatticePricer {
    spec: LatticeSpec,
}

impl BinomialLatticePricer {
    /// Creates a pricer with the given tree depth.
    #[inline]
    pub fn new(spec: LatticeSpec) -> Self {
        Self { spec }
    }

    /// Returns the lattice specification.
    #[inline]
    pub fn spec(&self) -> &LatticeSpec {
        &self.spec
    }

    /// Prices the American call at the contract spot.
    pub fn price(&self, contract: &OptionContract) -> PricingResult {
        let steps = self.spec.steps();

        let dt = contract.time_to_expiration / steps as f64;
        let up = (contract.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = ((contract.risk_free_rate - contract.dividend_yield) * dt).exp();
        let p_up = (growth - down) / (up - down);
        let p_down = 1.0 - p_up;
        let step_discount = (-contract.risk_free_rate * dt).exp();

        // Leaf asset prices and call payoffs.
        let mut prices: Vec<f64> = (0..=steps)
            .map(|i| contract.spot * up.powi((steps - i) as i32) * down.powi(i as i32))
            .collect();
        let mut values: Vec<f64> = prices
            .iter()
            .map(|&s| (s - contract.strike).max(0.0))
            .collect();

        // Backward induction, reusing both arrays. Dividing a node's stored
        // price by `u` steps it back one level on the recombining tree.
        for j in (0..steps).rev() {
            for i in 0..=j {
                prices[i] /= up;

                let hold = step_discount * (p_up * values[i] + p_down * values[i + 1]);
                let exercise = prices[i] - contract.strike;
                values[i] = hold.max(exercise);
            }
        }

        PricingResult::call_only(values[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_contract() -> OptionContract {
        OptionContract::new(100.0, 100.0, 0.2, 0.05, 1.0)
    }

    #[test]
    fn single_step_matches_hand_computation() {
        let contract = atm_contract();
        let pricer = BinomialLatticePricer::new(LatticeSpec::new(1));

        let dt = 1.0_f64;
        let up = (0.2_f64 * dt.sqrt()).exp();
        let down = 1.0 / up;
        let p_up = ((0.05_f64 * dt).exp() - down) / (up - down);

        // Two leaves: payoff only on the up move for an ATM call.
        let up_payoff = (100.0 * up - 100.0_f64).max(0.0);
        let down_payoff = (100.0 * down - 100.0_f64).max(0.0);
        let hold = (-0.05_f64 * dt).exp() * (p_up * up_payoff + (1.0 - p_up) * down_payoff);
        let expected = hold.max(100.0 - 100.0);

        let result = pricer.price(&contract);
        assert_relative_eq!(result.call_price, expected, epsilon = 1e-12);
    }

    #[test]
    fn price_is_at_least_intrinsic() {
        let contract = OptionContract::new(130.0, 100.0, 0.25, 0.03, 0.75);
        let pricer = BinomialLatticePricer::new(LatticeSpec::new(200));

        let result = pricer.price(&contract);
        assert!(result.call_price >= contract.call_intrinsic());
    }

    #[test]
    fn dividend_yield_lowers_the_call() {
        let no_dividends = atm_contract();
        let with_dividends = no_dividends.with_dividend_yield(0.04);
        let pricer = BinomialLatticePricer::new(LatticeSpec::new(300));

        let plain = pricer.price(&no_dividends).call_price;
        let adjusted = pricer.price(&with_dividends).call_price;
        assert!(adjusted < plain);
    }

    #[test]
    fn deeper_tree_changes_price_smoothly() {
        let contract = atm_contract();
        let coarse = BinomialLatticePricer::new(LatticeSpec::new(50))
            .price(&contract)
            .call_price;
        let fine = BinomialLatticePricer::new(LatticeSpec::new(800))
            .price(&contract)
            .call_price;

        // Both must be in the right neighbourhood; the fine tree moves at
        // most a few cents from the coarse one.
        assert!((coarse - fine).abs() < 0.2, "coarse {coarse}, fine {fine}");
    }

    #[test]
    fn result_carries_call_price_only() {
        let result = BinomialLatticePricer::new(LatticeSpec::new(10)).price(&atm_contract());
        assert!(result.put_price.is_none());
        assert!(result.terminal_prices.is_none());
    }
}
