//! Market inputs and pricing outputs shared by the engine and the grid sweep.
//!
//! [`PricingParameters`] is an immutable value: a sweep never edits the base
//! parameters, it derives a fresh value per cell with
//! [`PricingParameters::with_spot_and_volatility`].

use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};

/// The five scalar inputs of a Black-Scholes-Merton evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParameters {
    /// Current price of the underlying (> 0)
    pub spot_price: f64,
    /// Exercise price of the option (> 0)
    pub strike_price: f64,
    /// Time to maturity in years (>= 0, 0 means expiry)
    pub time_to_maturity: f64,
    /// Continuously compounded risk-free rate
    pub risk_free_rate: f64,
    /// Annualised volatility (> 0)
    pub volatility: f64,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            spot_price: 100.0,
            strike_price: 100.0,
            time_to_maturity: 1.0,
            risk_free_rate: 0.05,
            volatility: 0.2,
        }
    }
}

impl PricingParameters {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        risk_free_rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot_price,
            strike_price,
            time_to_maturity,
            risk_free_rate,
            volatility,
        }
    }

    /// Copy of `self` with spot and volatility replaced.
    pub fn with_spot_and_volatility(&self, spot_price: f64, volatility: f64) -> Self {
        Self {
            spot_price,
            volatility,
            ..*self
        }
    }

    /// Check every precondition, reporting the first violated field.
    pub fn validate(&self) -> PricingResult<()> {
        require_positive("spot_price", self.spot_price)?;
        require_positive("strike_price", self.strike_price)?;
        if !self.time_to_maturity.is_finite() || self.time_to_maturity < 0.0 {
            return Err(PricingError::invalid(
                "time_to_maturity",
                format!("must be finite and >= 0, got {}", self.time_to_maturity),
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(PricingError::invalid(
                "risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }
        require_positive("volatility", self.volatility)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> PricingResult<()> {
    // NaN fails the comparison as well
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid(
            field,
            format!("must be finite and > 0, got {}", value),
        ))
    }
}

/// Theoretical call and put prices for one set of parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub call_price: f64,
    pub put_price: f64,
}
