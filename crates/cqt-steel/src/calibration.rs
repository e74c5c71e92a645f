//! Multiplicative calibration factors.

use crate::error::{SteelError, SteelResult};

/// Four multiplicative factors applied to intermediate physical quantities.
///
/// All default to 1.0 (uncalibrated). The calibration engine fits them
/// against experimental case-depth data; every pipeline entry point takes
/// them as an explicit parameter so there is no ambient calibration state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationFactors {
    /// Multiplier on carbon diffusivity.
    pub diffusivity: f64,
    /// Multiplier on the surface mass-transfer coefficient.
    pub mass_transfer: f64,
    /// Multiplier on the final mixture hardness.
    pub hardness: f64,
    /// Multiplier on the analytic surface boundary response.
    pub boundary: f64,
}

impl Default for CalibrationFactors {
    fn default() -> Self {
        Self {
            diffusivity: 1.0,
            mass_transfer: 1.0,
            hardness: 1.0,
            boundary: 1.0,
        }
    }
}

impl CalibrationFactors {
    /// Create validated factors; every multiplier must be finite and > 0.
    pub fn new(
        diffusivity: f64,
        mass_transfer: f64,
        hardness: f64,
        boundary: f64,
    ) -> SteelResult<Self> {
        let fields: [(&'static str, f64); 4] = [
            ("diffusivity", diffusivity),
            ("mass_transfer", mass_transfer),
            ("hardness", hardness),
            ("boundary", boundary),
        ];
        for (what, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(SteelError::NonPositiveFactor { what });
            }
        }
        Ok(Self {
            diffusivity,
            mass_transfer,
            hardness,
            boundary,
        })
    }

    /// Factors as a fixed-order array (diffusivity, mass_transfer, hardness,
    /// boundary); the order the calibration optimizer uses.
    pub fn to_array(self) -> [f64; 4] {
        [
            self.diffusivity,
            self.mass_transfer,
            self.hardness,
            self.boundary,
        ]
    }

    /// Inverse of [`CalibrationFactors::to_array`].
    pub fn from_array(x: [f64; 4]) -> SteelResult<Self> {
        Self::new(x[0], x[1], x[2], x[3])
    }
}
