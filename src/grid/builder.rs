use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{PricingError, PricingResult};
use crate::grid::config::GridConfig;
use crate::grid::types::SensitivityGrid;
use crate::model_params::PricingParameters;
use crate::models::bs::BlackScholesModel;
use crate::models::traits::PricingModel;

/// `n` evenly spaced values from `start` to `stop`, both endpoints included.
///
/// A single point yields `[start]`; zero points yield an empty vector.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = stop;
            values
        }
    }
}

/// Axis centred on `base`, spanning `base * (1 ± range_fraction)`.
pub fn sweep_axis(base: f64, config: &GridConfig) -> Vec<f64> {
    linspace(
        (1.0 - config.range_fraction) * base,
        (1.0 + config.range_fraction) * base,
        config.grid_size,
    )
}

/// Both axis upper bounds `(1 + range_fraction) * base` must be finite.
fn check_axis_bounds(params: &PricingParameters, config: &GridConfig) -> PricingResult<()> {
    let f = config.range_fraction;
    for (axis, base) in [("spot", params.spot_price), ("volatility", params.volatility)] {
        let upper = (1.0 + f) * base;
        if !upper.is_finite() {
            return Err(PricingError::invalid(
                "range_fraction",
                format!("{} axis upper bound {} * (1 + {}) overflows", axis, base, f),
            ));
        }
    }
    Ok(())
}

/// Sweeps spot and volatility around a base set of parameters.
///
/// Strike, maturity and rate are held at their base values. Every cell is
/// priced through the model; if any cell fails the whole grid is discarded.
#[derive(Debug, Clone)]
pub struct SensitivityGridBuilder<M = BlackScholesModel> {
    model: M,
    config: GridConfig,
}

impl SensitivityGridBuilder<BlackScholesModel> {
    pub fn new(config: GridConfig) -> Self {
        Self::with_model(BlackScholesModel, config)
    }
}

impl Default for SensitivityGridBuilder<BlackScholesModel> {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<M: PricingModel> SensitivityGridBuilder<M> {
    pub fn with_model(model: M, config: GridConfig) -> Self {
        Self { model, config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn build(&self, params: &PricingParameters) -> PricingResult<SensitivityGrid> {
        params.validate()?;
        self.config.validate()?;
        check_axis_bounds(params, &self.config)?;

        let spot_axis = sweep_axis(params.spot_price, &self.config);
        let volatility_axis = sweep_axis(params.volatility, &self.config);

        debug!(
            model = self.model.name(),
            grid_size = self.config.grid_size,
            range_fraction = self.config.range_fraction,
            "building sensitivity grid"
        );

        let rows = self.price_rows(params, &spot_axis, &volatility_axis)?;
        let (call_values, put_values): (Vec<_>, Vec<_>) = rows.into_iter().unzip();

        debug!(
            cells = spot_axis.len() * volatility_axis.len(),
            "sensitivity grid complete"
        );

        Ok(SensitivityGrid {
            spot_axis,
            volatility_axis,
            call_values,
            put_values,
        })
    }

    #[cfg(not(feature = "parallel"))]
    fn price_rows(
        &self,
        params: &PricingParameters,
        spot_axis: &[f64],
        volatility_axis: &[f64],
    ) -> PricingResult<Vec<(Vec<f64>, Vec<f64>)>> {
        spot_axis
            .iter()
            .map(|&spot| self.price_row(params, spot, volatility_axis))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn price_rows(
        &self,
        params: &PricingParameters,
        spot_axis: &[f64],
        volatility_axis: &[f64],
    ) -> PricingResult<Vec<(Vec<f64>, Vec<f64>)>> {
        spot_axis
            .par_iter()
            .map(|&spot| self.price_row(params, spot, volatility_axis))
            .collect()
    }

    fn price_row(
        &self,
        params: &PricingParameters,
        spot: f64,
        volatility_axis: &[f64],
    ) -> PricingResult<(Vec<f64>, Vec<f64>)> {
        let mut calls = Vec::with_capacity(volatility_axis.len());
        let mut puts = Vec::with_capacity(volatility_axis.len());
        for &sigma in volatility_axis {
            let quote = self
                .model
                .evaluate(&params.with_spot_and_volatility(spot, sigma))?;
            calls.push(quote.call_price);
            puts.push(quote.put_price);
        }
        Ok((calls, puts))
    }
}
