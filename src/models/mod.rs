pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::error::PricingResult;
    use crate::model_params::{PriceQuote, PricingParameters};

    /// A model that turns one set of market inputs into call/put prices.
    ///
    /// Implementations are pure: the same parameters always give the same quote.
    pub trait PricingModel: Send + Sync {
        fn name(&self) -> &str;

        /// Price with inputs already known to be valid.
        ///
        /// Callers must have run [`PricingParameters::validate`] first. Fails
        /// when valid inputs still overflow to a non-finite price.
        fn price_validated(&self, params: &PricingParameters) -> PricingResult<PriceQuote>;

        /// Validate `params`, then price.
        fn evaluate(&self, params: &PricingParameters) -> PricingResult<PriceQuote> {
            params.validate()?;
            self.price_validated(params)
        }
    }
}

/// Utility functions for option pricing
pub mod utils {
    use std::f64::consts::FRAC_1_SQRT_2;

    /// Standard normal cumulative distribution function.
    ///
    /// Uses `erfc` so the lower tail keeps full relative precision instead of
    /// cancelling against 1.
    pub fn normal_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Payoff of a call exercised now.
    pub fn intrinsic_call(spot: f64, strike: f64) -> f64 {
        (spot - strike).max(0.0)
    }

    /// Payoff of a put exercised now.
    pub fn intrinsic_put(spot: f64, strike: f64) -> f64 {
        (strike - spot).max(0.0)
    }

}
