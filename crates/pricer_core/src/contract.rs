//! Option contract parameters.
//!
//! An [`OptionContract`] is constructed per pricing call and discarded
//! afterwards. The engines treat it as trusted input: malformed values are
//! not rejected there and propagate as degenerate floats. Callers that sit
//! on an untrusted boundary should run [`OptionContract::validate`] first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boundary validation failure for an [`OptionContract`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    /// Spot must be a finite, strictly positive price.
    #[error("spot price must be finite and positive, got {0}")]
    InvalidSpot(f64),

    /// Strike must be a finite, strictly positive price.
    #[error("strike price must be finite and positive, got {0}")]
    InvalidStrike(f64),

    /// Volatility must be finite and strictly positive (annualised).
    #[error("volatility must be finite and positive, got {0}")]
    InvalidVolatility(f64),

    /// The risk-free rate may be any finite value, including negative.
    #[error("risk-free rate must be finite, got {0}")]
    InvalidRate(f64),

    /// Time to expiration must be finite and strictly positive (years).
    #[error("time to expiration must be finite and positive, got {0}")]
    InvalidExpiry(f64),

    /// Dividend yield must be finite and non-negative (annualised).
    #[error("dividend yield must be finite and non-negative, got {0}")]
    InvalidDividendYield(f64),
}

/// Immutable contract parameters for a single pricing call.
///
/// All quantities are annualised; `time_to_expiration` is in years.
///
/// # Examples
///
/// ```rust
/// use pricer_core::OptionContract;
///
/// // At-the-money one-year contract, no dividends.
/// let contract = OptionContract::new(100.0, 100.0, 0.2, 0.05, 1.0);
///
/// // Same contract on a dividend-paying underlying.
/// let with_dividends = contract.with_dividend_yield(0.03);
/// assert_eq!(with_dividends.dividend_yield, 0.03);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Current price of the underlying (S₀).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Risk-free rate (r), annualised, continuously compounded.
    pub risk_free_rate: f64,
    /// Time to expiration (T), in years.
    pub time_to_expiration: f64,
    /// Continuous dividend yield (q), annualised.
    pub dividend_yield: f64,
}

impl OptionContract {
    /// Creates a contract with no dividend yield.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        risk_free_rate: f64,
        time_to_expiration: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            volatility,
            risk_free_rate,
            time_to_expiration,
            dividend_yield: 0.0,
        }
    }

    /// Returns a copy of the contract with the given dividend yield.
    #[inline]
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Validates the contract once at the service boundary.
    ///
    /// The pricing engines never call this; they assume well-formed input
    /// and let degenerate parameters surface as degenerate output.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContractError`] encountered, checking fields in
    /// declaration order.
    pub fn validate(&self) -> Result<(), ContractError> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(ContractError::InvalidSpot(self.spot));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(ContractError::InvalidStrike(self.strike));
        }
        if !self.volatility.is_finite() || self.volatility <= 0.0 {
            return Err(ContractError::InvalidVolatility(self.volatility));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ContractError::InvalidRate(self.risk_free_rate));
        }
        if !self.time_to_expiration.is_finite() || self.time_to_expiration <= 0.0 {
            return Err(ContractError::InvalidExpiry(self.time_to_expiration));
        }
        if !self.dividend_yield.is_finite() || self.dividend_yield < 0.0 {
            return Err(ContractError::InvalidDividendYield(self.dividend_yield));
        }
        Ok(())
    }

    /// Intrinsic value of the call at the current spot: `max(S − K, 0)`.
    #[inline]
    pub fn call_intrinsic(&self) -> f64 {
        (self.spot - self.strike).max(0.0)
    }

    /// Discount factor over the full contract life: `exp(−r·T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiration).exp()
    }
}
