//! Threshold-based case-depth extraction.

use crate::error::{SimError, SimResult};

/// Case-depth criterion: the property and threshold that define where the
/// hardened case ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// Depth where carbon falls below 0.4 wt%.
    Carbon04,
    /// Depth where carbon falls below 0.3 wt%.
    Carbon03,
    /// Depth where hardness falls below 50 HRC.
    Hrc50,
    /// Depth where hardness falls below 55 HRC.
    Hrc55,
}

impl Criterion {
    pub fn threshold(&self) -> f64 {
        match self {
            Criterion::Carbon04 => 0.4,
            Criterion::Carbon03 => 0.3,
            Criterion::Hrc50 => 50.0,
            Criterion::Hrc55 => 55.0,
        }
    }

    pub fn is_carbon(&self) -> bool {
        matches!(self, Criterion::Carbon04 | Criterion::Carbon03)
    }
}

/// Depth where a monotonically decreasing property profile first crosses
/// below `threshold`, linearly interpolated between the bracketing nodes.
///
/// Sentinels: 0 when even the surface value is below the threshold, the
/// last depth when the whole profile stays above it.
pub fn depth_at_threshold(depths: &[f64], values: &[f64], threshold: f64) -> SimResult<f64> {
    if depths.len() != values.len() || depths.is_empty() {
        return Err(SimError::InvalidArg {
            what: "depth and value arrays must be non-empty and co-indexed",
        });
    }
    for (i, &v) in values.iter().enumerate() {
        if v < threshold {
            if i == 0 {
                return Ok(0.0);
            }
            let (x1, v1) = (depths[i - 1], values[i - 1]);
            let (x2, v2) = (depths[i], v);
            if (v2 - v1).abs() < f64::EPSILON {
                // Flat segment straddling the threshold: report its start
                return Ok(x1);
            }
            return Ok(x1 + (x2 - x1) * (threshold - v1) / (v2 - v1));
        }
    }
    Ok(depths[depths.len() - 1])
}
