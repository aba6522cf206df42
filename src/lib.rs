//! # bsm-heatmap: Black-Scholes-Merton Pricing and Sensitivity Grids
//!
//! `bsm-heatmap` prices European call and put options with the closed-form
//! Black-Scholes-Merton formula and sweeps those prices over a grid of spot
//! prices and volatilities, holding strike, maturity and rate fixed.
//!
//! ## Core Features
//!
//! - **Closed-form pricing**: call and put from one set of market inputs
//! - **Exact expiry handling**: intrinsic value at zero time to maturity
//! - **Sensitivity grids**: `N × N` call and put matrices with their axes
//! - **Validated inputs**: every entry point rejects bad parameters up front
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_heatmap::{build_grid, evaluate, GridConfig, PricingParameters};
//!
//! let quote = evaluate(100.0, 100.0, 1.0, 0.05, 0.2)?;
//! assert!((quote.call_price - 10.45).abs() < 0.01);
//!
//! let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let grid = build_grid(&params, GridConfig::default())?;
//! assert_eq!(grid.call_values.len(), 10);
//! # Ok::<(), bsm_heatmap::PricingError>(())
//! ```
//!
//! ## Grid Layout
//!
//! `call_values[i][j]` and `put_values[i][j]` are priced at `spot_axis[i]` and
//! `volatility_axis[j]`. Spot runs down the rows, volatility across the columns.
//!
//! ## Configuration Presets
//!
//! - `standard()`: 10 × 10, ±20%
//! - `wide()`: 10 × 10, ±50%
//! - `fine()`: 25 × 25, ±20%

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod grid;
pub mod model_params;
pub mod models;

// ================================================================================================
// IMPORTS
// ================================================================================================

use models::traits::PricingModel;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};
pub use grid::{
    builder::{linspace, SensitivityGridBuilder},
    config::{GridConfig, HeatmapConfig},
    types::{OptionKind, SensitivityGrid},
};
pub use model_params::{PriceQuote, PricingParameters};
pub use models::bs::BlackScholesModel;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured grid shapes.
pub mod default_configs {
    use crate::grid::config::GridConfig;

    /// 10 × 10 grid spanning ±20% around the base spot and volatility.
    ///
    /// ```rust
    /// let config = bsm_heatmap::default_configs::standard();
    /// assert_eq!(config.grid_size, 10);
    /// ```
    pub fn standard() -> GridConfig {
        GridConfig::standard()
    }

    /// 10 × 10 grid spanning ±50%, useful when the base inputs are uncertain.
    pub fn wide() -> GridConfig {
        GridConfig::wide()
    }

    /// 25 × 25 grid spanning ±20%.
    pub fn fine() -> GridConfig {
        GridConfig::fine()
    }
}

/// Price a European call and put under Black-Scholes-Merton.
///
/// # Arguments
///
/// * `spot` - Current underlying price, must be > 0
/// * `strike` - Exercise price, must be > 0
/// * `time` - Years to maturity, must be >= 0; at 0 the intrinsic value is returned
/// * `rate` - Continuously compounded risk-free rate
/// * `volatility` - Annualised volatility, must be > 0
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] naming the first input that fails its
/// precondition. Non-finite inputs are rejected the same way, as are valid
/// inputs whose price would overflow to a non-finite value.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::evaluate;
///
/// let expired = evaluate(100.0, 90.0, 0.0, 0.05, 0.2)?;
/// assert_eq!(expired.call_price, 10.0);
/// assert_eq!(expired.put_price, 0.0);
/// # Ok::<(), bsm_heatmap::PricingError>(())
/// ```
pub fn evaluate(
    spot: f64,
    strike: f64,
    time: f64,
    rate: f64,
    volatility: f64,
) -> PricingResult<PriceQuote> {
    BlackScholesModel.evaluate(&PricingParameters::new(spot, strike, time, rate, volatility))
}

/// Price call and put across a spot × volatility sweep.
///
/// Both axes hold `config.grid_size` evenly spaced points from
/// `(1 - range_fraction) * base` to `(1 + range_fraction) * base`, endpoints
/// included. Strike, maturity and rate stay at their values in `params`.
///
/// # Errors
///
/// [`PricingError::InvalidParameter`] if `params` is invalid, `grid_size` is 0,
/// `range_fraction` lies outside `(0, 1)`, or an axis upper bound overflows.
/// No grid is returned on failure.
///
/// # Example
///
/// ```rust
/// use bsm_heatmap::{build_grid, GridConfig, PricingParameters};
///
/// let grid = build_grid(&PricingParameters::default(), GridConfig::new(5, 0.5))?;
/// assert_eq!(grid.spot_axis, vec![50.0, 75.0, 100.0, 125.0, 150.0]);
/// # Ok::<(), bsm_heatmap::PricingError>(())
/// ```
pub fn build_grid(
    params: &PricingParameters,
    config: GridConfig,
) -> PricingResult<SensitivityGrid> {
    SensitivityGridBuilder::new(config).build(params)
}

/// [`build_grid`] with a caller-supplied pricing model.
pub fn build_grid_with<M: PricingModel>(
    model: M,
    params: &PricingParameters,
    config: GridConfig,
) -> PricingResult<SensitivityGrid> {
    SensitivityGridBuilder::with_model(model, config).build(params)
}
