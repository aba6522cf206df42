#![allow(dead_code)] // not every test binary uses every helper

use bsm_heatmap::{PriceQuote, PricingParameters};
use statrs::distribution::{ContinuousCDF, Normal};

/// Parameters used across the integration tests: ATM, one year, 5%, 20% vol
pub fn base_params() -> PricingParameters {
    PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
}

/// Black-Scholes prices computed with statrs' normal distribution, kept
/// independent of the library's own CDF.
pub fn reference_quote(params: &PricingParameters) -> PriceQuote {
    let normal = Normal::new(0.0, 1.0).expect("standard normal");
    let s = params.spot_price;
    let k = params.strike_price;
    let t = params.time_to_maturity;
    let r = params.risk_free_rate;
    let sigma = params.volatility;

    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt());
    let d2 = d1 - sigma * t.sqrt();
    let df = (-r * t).exp();

    PriceQuote {
        call_price: s * normal.cdf(d1) - k * df * normal.cdf(d2),
        put_price: k * df * normal.cdf(-d2) - s * normal.cdf(-d1),
    }
}

/// Right-hand side of put-call parity: `S - K e^{-rT}`
pub fn parity_forward(params: &PricingParameters) -> f64 {
    let df = (-params.risk_free_rate * params.time_to_maturity).exp();
    params.spot_price - params.strike_price * df
}
