//! Jaffe-Holloman tempering model.
//!
//! Tempering softens only the martensite component. The actual
//! temperature/time pair is first folded into an equivalent temperature via
//! the Jaffe-Holloman parameter, then a carbon-regime factor scales the
//! as-quenched martensite hardness.

use crate::error::{HardnessError, HardnessResult};

/// Tempering cycle parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempering {
    /// Tempering temperature, °C.
    pub temperature_c: f64,
    /// Tempering time, hours.
    pub time_h: f64,
}

impl Tempering {
    pub fn new(temperature_c: f64, time_h: f64) -> HardnessResult<Self> {
        if !temperature_c.is_finite() || !time_h.is_finite() {
            return Err(HardnessError::InvalidArg {
                what: "tempering parameters must be finite",
            });
        }
        if time_h <= 0.0 {
            return Err(HardnessError::InvalidArg {
                what: "tempering time must be positive",
            });
        }
        Ok(Self {
            temperature_c,
            time_h,
        })
    }
}

/// Jaffe-Holloman material constant, K = 21.3 − 5.8·C.
pub fn jaffe_holloman_k(carbon: f64) -> f64 {
    21.3 - 5.8 * carbon
}

/// Equivalent tempering temperature, °C.
///
/// `T_eq = (T + 273)·(K + log10(t))/K − 273` collapses the time dependence
/// into a single temperature at a reference 1 h hold.
pub fn equivalent_temperature(tempering: Tempering, carbon: f64) -> HardnessResult<f64> {
    let k = jaffe_holloman_k(carbon);
    if k <= 0.0 {
        return Err(HardnessError::DegenerateTempering { k, carbon });
    }
    Ok((tempering.temperature_c + 273.0) * (k + tempering.time_h.log10()) / k - 273.0)
}

/// Tempering softening factor, clamped non-negative. Split at 0.45 wt% C.
pub fn tempering_factor(temperature_c: f64, carbon: f64) -> f64 {
    let f = if carbon < 0.45 {
        1.304 * (1.0 - 0.001_332_3 * temperature_c) * (1.0 - 0.361_948_2 * carbon)
    } else {
        1.102_574 * (1.0 - 0.001_655_4 * temperature_c) * (1.0 + 0.190_880_63 * carbon)
    };
    f.max(0.0)
}

/// Tempered martensite hardness from its as-quenched value.
pub fn tempered_martensite(
    hv_martensite: f64,
    tempering: Tempering,
    carbon: f64,
) -> HardnessResult<f64> {
    let t_eq = equivalent_temperature(tempering, carbon)?;
    Ok(hv_martensite * tempering_factor(t_eq, carbon))
}
