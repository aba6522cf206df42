// Closed-form Black-Scholes-Merton pricing of European calls and puts on a
// non-dividend-paying underlying. At expiry the intrinsic payoff is returned
// directly; no small-time substitution is made.

use crate::error::{PricingError, PricingResult};
use crate::model_params::{PriceQuote, PricingParameters};
use crate::models::traits::PricingModel;
use crate::models::utils::{intrinsic_call, intrinsic_put, normal_cdf};

/// Stateless Black-Scholes-Merton engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesModel;

impl BlackScholesModel {
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for BlackScholesModel {
    fn name(&self) -> &str {
        "black-scholes-merton"
    }

    fn price_validated(&self, params: &PricingParameters) -> PricingResult<PriceQuote> {
        let s = params.spot_price;
        let k = params.strike_price;
        let t = params.time_to_maturity;
        let r = params.risk_free_rate;
        let sigma = params.volatility;

        if t == 0.0 {
            return Ok(PriceQuote {
                call_price: intrinsic_call(s, k),
                put_price: intrinsic_put(s, k),
            });
        }

        // sigma^2 is never formed, so a huge volatility sends d2 to -inf
        let sqrt_t = t.sqrt();
        let sigma_sqrt_t = sigma * sqrt_t;
        let d1 = (s / k).ln() / sigma_sqrt_t + (r / sigma + 0.5 * sigma) * sqrt_t;
        let d2 = d1 - sigma_sqrt_t;
        let discounted_strike = k * (-r * t).exp();

        let call = s * normal_cdf(d1) - discounted_strike * normal_cdf(d2);
        let put = discounted_strike * normal_cdf(-d2) - s * normal_cdf(-d1);

        // checked before clamping, f64::max would turn NaN into 0
        if !call.is_finite() || !put.is_finite() {
            let field = if !discounted_strike.is_finite() {
                "risk_free_rate"
            } else {
                "volatility"
            };
            return Err(PricingError::invalid(
                field,
                format!(
                    "inputs overflow to a non-finite price (spot={}, strike={}, time={}, \
                     rate={}, volatility={}): call={}, put={}",
                    s, k, t, r, sigma, call, put
                ),
            ));
        }

        // rounding can leave a deep out-of-the-money price a hair below zero
        Ok(PriceQuote {
            call_price: call.max(0.0),
            put_price: put.max(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn at_the_money_one_year() {
        let quote = BlackScholesModel
            .evaluate(&PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2))
            .unwrap();
        assert_abs_diff_eq!(quote.call_price, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.put_price, 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn expiry_returns_exact_intrinsic() {
        let quote = BlackScholesModel
            .evaluate(&PricingParameters::new(100.0, 90.0, 0.0, 0.05, 0.2))
            .unwrap();
        assert_eq!(quote.call_price, 10.0);
        assert_eq!(quote.put_price, 0.0);
    }

    #[test]
    fn evaluate_validates_before_pricing() {
        let err = BlackScholesModel
            .evaluate(&PricingParameters::new(100.0, 100.0, -1.0, 0.05, 0.2))
            .unwrap_err();
        assert_eq!(err.field(), "time_to_maturity");
    }

    #[test]
    fn deep_out_of_the_money_is_not_negative() {
        let quote = BlackScholesModel
            .evaluate(&PricingParameters::new(1.0, 1000.0, 0.01, 0.0, 0.05))
            .unwrap();
        assert!(quote.call_price >= 0.0);
        assert!(quote.put_price > 0.0);
    }

    #[test]
    fn huge_volatility_tends_to_spot_and_discounted_strike() {
        let quote = BlackScholesModel
            .evaluate(&PricingParameters::new(100.0, 100.0, 1.0, 0.05, 1e200))
            .unwrap();
        assert_abs_diff_eq!(quote.call_price, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.put_price, 100.0 * (-0.05f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn overflowing_discount_factor_is_an_error() {
        let err = BlackScholesModel
            .evaluate(&PricingParameters::new(100.0, 100.0, 1.0, -1000.0, 0.2))
            .unwrap_err();
        assert_eq!(err.field(), "risk_free_rate");
    }
}
