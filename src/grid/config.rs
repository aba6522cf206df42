use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::model_params::PricingParameters;

/// Shape of a spot/volatility sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of points on each axis
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    /// Half-width of each axis as a fraction of the base value, in (0, 1)
    #[serde(default = "default_range_fraction")]
    pub range_fraction: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            range_fraction: default_range_fraction(),
        }
    }
}

impl GridConfig {
    pub fn new(grid_size: usize, range_fraction: f64) -> Self {
        Self {
            grid_size,
            range_fraction,
        }
    }

    /// 10×10 grid spanning ±20% of spot and volatility
    pub fn standard() -> Self {
        Self::default()
    }

    /// 10×10 grid spanning ±50%
    pub fn wide() -> Self {
        Self {
            grid_size: 10,
            range_fraction: 0.5,
        }
    }

    /// 25×25 grid spanning ±20%
    pub fn fine() -> Self {
        Self {
            grid_size: 25,
            range_fraction: 0.2,
        }
    }

    /// Reject shapes that would leave cells unset or push an axis to zero.
    pub fn validate(&self) -> PricingResult<()> {
        if self.grid_size < 1 {
            return Err(PricingError::invalid(
                "grid_size",
                format!("must be >= 1, got {}", self.grid_size),
            ));
        }
        let f = self.range_fraction;
        if !(f > 0.0 && f < 1.0) {
            return Err(PricingError::invalid(
                "range_fraction",
                format!("must lie in (0, 1), got {}", f),
            ));
        }
        Ok(())
    }
}

/// A complete heatmap request: base parameters plus sweep shape.
///
/// ```toml
/// [params]
/// spot_price = 100.0
/// strike_price = 100.0
/// time_to_maturity = 1.0
/// risk_free_rate = 0.05
/// volatility = 0.2
///
/// [grid]
/// grid_size = 10
/// range_fraction = 0.2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default)]
    pub params: PricingParameters,

    #[serde(default)]
    pub grid: GridConfig,
}

impl HeatmapConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: HeatmapConfig =
            toml::from_str(source).context("failed to parse heatmap config")?;
        config.params.validate()?;
        config.grid.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }
}

fn default_grid_size() -> usize {
    10
}

fn default_range_fraction() -> f64 {
    0.2
}
