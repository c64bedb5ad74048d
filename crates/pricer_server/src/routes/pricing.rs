//! Option pricing endpoints.
//!
//! camelCase JSON bodies; the `/monte-carlo` single-point endpoint, the
//! single-point American FDM endpoint, and the two chart endpoints that
//! sweep a pricer over a stock-price range. All numeric validation lives
//! here; the engines receive only well-formed contracts.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};

use pricer_core::OptionContract;
use pricer_engines::fdm::{FiniteDifferencePricer, GridSpec};
use pricer_engines::lattice::{BinomialLatticePricer, LatticeSpec};
use pricer_engines::mc::{MonteCarloPricer, SimulationConfig};
use pricer_engines::rng::{NormalVariateSource, SeededUniform};

use super::AppState;
use crate::error::ApiError;

/// Upper bound on Monte Carlo paths accepted from clients. The engines
/// have no way to abort a run, so cost is capped before invocation.
const MAX_SIMULATIONS: u64 = 10_000_000;

/// Upper bound on grid/lattice step counts accepted from clients.
const MAX_STEPS: u64 = 10_000;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Monte Carlo pricing request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloRequest {
    pub stock_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub time_to_expiration: Option<f64>,
    pub simulations: Option<u64>,
}

/// Monte Carlo pricing response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonteCarloResponse {
    pub call_price: f64,
    pub put_price: f64,
    pub terminal_prices: Vec<f64>,
}

/// Single-point American FDM pricing request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdmRequest {
    pub stock_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub time_to_expiration: Option<f64>,
    pub space_steps: Option<u64>,
    pub time_steps: Option<u64>,
}

/// Call-price-only response for the grid and lattice endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPriceResponse {
    pub call_price: f64,
}

/// American FDM price-curve request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FdmChartRequest {
    pub min_stock_price: Option<f64>,
    pub max_stock_price: Option<f64>,
    pub stock_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub time_to_expiration: Option<f64>,
    pub space_steps: Option<u64>,
    pub time_steps: Option<u64>,
}

/// Binomial price-curve request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinomialChartRequest {
    pub min_stock_price: Option<f64>,
    pub max_stock_price: Option<f64>,
    pub strike_price: Option<f64>,
    pub volatility: Option<f64>,
    pub risk_free_rate: Option<f64>,
    pub time_to_expiration: Option<f64>,
    /// Absent means a non-dividend-paying underlying.
    pub dividend_yield: Option<f64>,
    pub steps: Option<u64>,
}

/// One point on a price curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurvePoint {
    pub stock_price: f64,
    pub call_price: f64,
}

// ============================================================================
// Validation helpers
// ============================================================================

/// Extracts a required field, rejecting absent parameters with a 400.
fn require(name: &'static str, value: Option<f64>) -> Result<f64, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("Missing required parameter: {name}")))
}

/// A required field that must be finite and strictly positive.
fn require_positive(name: &'static str, value: Option<f64>) -> Result<f64, ApiError> {
    let value = require(name, value)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ApiError::Validation(format!(
            "{name} must be finite and positive, got {value}"
        )));
    }
    Ok(value)
}

/// A required field that must merely be finite (rates may be negative).
fn require_finite(name: &'static str, value: Option<f64>) -> Result<f64, ApiError> {
    let value = require(name, value)?;
    if !value.is_finite() {
        return Err(ApiError::Validation(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(value)
}

/// A required integer count in `[1, max]`.
fn require_count(name: &'static str, value: Option<u64>, max: u64) -> Result<usize, ApiError> {
    let value = value
        .ok_or_else(|| ApiError::Validation(format!("Missing required parameter: {name}")))?;
    if value == 0 || value > max {
        return Err(ApiError::Validation(format!(
            "{name} must be between 1 and {max}, got {value}"
        )));
    }
    Ok(value as usize)
}

/// Validates a `[min, max]` sweep range.
fn require_range(min: f64, max: f64) -> Result<(f64, f64), ApiError> {
    if min >= max {
        return Err(ApiError::Validation(format!(
            "minStockPrice ({min}) must be less than maxStockPrice ({max})"
        )));
    }
    Ok((min, max))
}

/// Sweeps `price_at` over `samples + 1` evenly spaced stock prices from
/// `min` to `max` inclusive, one pricer invocation per sample.
fn sweep(
    min: f64,
    max: f64,
    samples: usize,
    mut price_at: impl FnMut(f64) -> f64,
) -> Vec<CurvePoint> {
    let step = (max - min) / samples as f64;
    (0..=samples)
        .map(|i| {
            let stock_price = min + i as f64 * step;
            CurvePoint {
                stock_price,
                call_price: price_at(stock_price),
            }
        })
        .collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// Build the pricing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/monte-carlo", post(monte_carlo))
        .route("/american-option-fdm", post(american_option_fdm))
        .route("/american-option-fdm-chart", post(american_option_fdm_chart))
        .route("/binomial-option-chart", post(binomial_option_chart))
}

/// POST /monte-carlo - European call and put via Monte Carlo simulation.
async fn monte_carlo(
    Json(request): Json<MonteCarloRequest>,
) -> Result<Json<MonteCarloResponse>, ApiError> {
    let contract = OptionContract::new(
        require_positive("stockPrice", request.stock_price)?,
        require_positive("strikePrice", request.strike_price)?,
        require_positive("volatility", request.volatility)?,
        require_finite("riskFreeRate", request.risk_free_rate)?,
        require_positive("timeToExpiration", request.time_to_expiration)?,
    );
    contract.validate()?;
    let simulations = require_count("simulations", request.simulations, MAX_SIMULATIONS)?;

    let config = SimulationConfig::new(simulations).collect_terminal_prices(true);
    let pricer = MonteCarloPricer::new(config);

    // Fresh entropy per request; the recorded seed makes a run reproducible.
    let uniforms = SeededUniform::from_entropy();
    tracing::debug!(simulations, seed = uniforms.seed(), "running Monte Carlo");
    let mut normals = NormalVariateSource::new(uniforms);

    let result = pricer.price(&contract, &mut normals);
    Ok(Json(MonteCarloResponse {
        call_price: result.call_price,
        put_price: result.put_price.unwrap_or_default(),
        terminal_prices: result.terminal_prices.unwrap_or_default(),
    }))
}

/// POST /american-option-fdm - American call at the requested spot.
async fn american_option_fdm(
    Json(request): Json<FdmRequest>,
) -> Result<Json<CallPriceResponse>, ApiError> {
    let contract = OptionContract::new(
        require_positive("stockPrice", request.stock_price)?,
        require_positive("strikePrice", request.strike_price)?,
        require_positive("volatility", request.volatility)?,
        require_finite("riskFreeRate", request.risk_free_rate)?,
        require_positive("timeToExpiration", request.time_to_expiration)?,
    );
    contract.validate()?;

    let spec = GridSpec::new(
        require_count("spaceSteps", request.space_steps, MAX_STEPS)?,
        require_count("timeSteps", request.time_steps, MAX_STEPS)?,
    );

    let result = FiniteDifferencePricer::new(spec).price(&contract);
    Ok(Json(CallPriceResponse {
        call_price: result.call_price,
    }))
}

/// POST /american-option-fdm-chart - American call curve over a spot range.
async fn american_option_fdm_chart(
    State(state): State<AppState>,
    Json(request): Json<FdmChartRequest>,
) -> Result<Json<Vec<CurvePoint>>, ApiError> {
    let (min, max) = require_range(
        require_positive("minStockPrice", request.min_stock_price)?,
        require_positive("maxStockPrice", request.max_stock_price)?,
    )?;
    require_positive("stockPrice", request.stock_price)?;
    let strike = require_positive("strikePrice", request.strike_price)?;
    let volatility = require_positive("volatility", request.volatility)?;
    let rate = require_finite("riskFreeRate", request.risk_free_rate)?;
    let expiry = require_positive("timeToExpiration", request.time_to_expiration)?;

    let spec = GridSpec::new(
        require_count("spaceSteps", request.space_steps, MAX_STEPS)?,
        require_count("timeSteps", request.time_steps, MAX_STEPS)?,
    );
    let pricer = FiniteDifferencePricer::new(spec);

    let points = sweep(min, max, state.config.curve_samples, |spot| {
        let contract = OptionContract::new(spot, strike, volatility, rate, expiry);
        pricer.price(&contract).call_price
    });

    Ok(Json(points))
}

/// POST /binomial-option-chart - binomial American call curve.
async fn binomial_option_chart(
    State(state): State<AppState>,
    Json(request): Json<BinomialChartRequest>,
) -> Result<Json<Vec<CurvePoint>>, ApiError> {
    let (min, max) = require_range(
        require_positive("minStockPrice", request.min_stock_price)?,
        require_positive("maxStockPrice", request.max_stock_price)?,
    )?;
    let strike = require_positive("strikePrice", request.strike_price)?;
    let volatility = require_positive("volatility", request.volatility)?;
    let rate = require_finite("riskFreeRate", request.risk_free_rate)?;
    let expiry = require_positive("timeToExpiration", request.time_to_expiration)?;
    let dividend_yield = match request.dividend_yield {
        Some(q) => {
            if !q.is_finite() || q < 0.0 {
                return Err(ApiError::Validation(format!(
                    "dividendYield must be finite and non-negative, got {q}"
                )));
            }
            q
        }
        None => 0.0,
    };

    let steps = require_count("steps", request.steps, MAX_STEPS)?;
    let pricer = BinomialLatticePricer::new(LatticeSpec::new(steps));

    let points = sweep(min, max, state.config.curve_samples, |spot| {
        let contract = OptionContract::new(spot, strike, volatility, rate, expiry)
            .with_dividend_yield(dividend_yield);
        pricer.price(&contract).call_price
    });

    Ok(Json(points))
}
