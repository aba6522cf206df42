use serde::{Deserialize, Serialize};

/// Selects the call or put side of a quote or grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Call,
    Put,
}

/// Call and put prices over a spot × volatility sweep.
///
/// Row `i` is `spot_axis[i]`, column `j` is `volatility_axis[j]`. Both
/// matrices are `size() × size()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityGrid {
    pub spot_axis: Vec<f64>,
    pub volatility_axis: Vec<f64>,
    pub call_values: Vec<Vec<f64>>,
    pub put_values: Vec<Vec<f64>>,
}

impl SensitivityGrid {
    /// Number of points on each axis
    pub fn size(&self) -> usize {
        self.spot_axis.len()
    }

    pub fn values(&self, kind: OptionKind) -> &[Vec<f64>] {
        match kind {
            OptionKind::Call => &self.call_values,
            OptionKind::Put => &self.put_values,
        }
    }

    pub fn call_at(&self, i: usize, j: usize) -> Option<f64> {
        self.call_values.get(i)?.get(j).copied()
    }

    pub fn put_at(&self, i: usize, j: usize) -> Option<f64> {
        self.put_values.get(i)?.get(j).copied()
    }

    /// Prices for one spot level across every volatility.
    pub fn row(&self, kind: OptionKind, i: usize) -> Option<&[f64]> {
        self.values(kind).get(i).map(Vec::as_slice)
    }

    /// `(min, max)` over one matrix, for scaling a colour map.
    pub fn value_range(&self, kind: OptionKind) -> Option<(f64, f64)> {
        self.values(kind)
            .iter()
            .flatten()
            .copied()
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
