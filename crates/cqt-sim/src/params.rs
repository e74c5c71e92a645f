//! Scalar process inputs for one simulation run.

use crate::error::{SimError, SimResult};
use cqt_core::units::{Temperature, Time, celsius, hours};
use cqt_hardness::Tempering;

/// Complete parameter set for one carburize-quench-temper cycle.
///
/// Boundary units: temperature °C, time hours, depth mm, β cm/s, cooling
/// rate °C/h. Conversion to SI happens inside the solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessParameters {
    /// Carburizing hold temperature, °C.
    pub temperature_c: f64,
    /// Carburizing time, hours.
    pub duration_h: f64,
    /// Atmosphere carbon potential, wt%.
    pub carbon_potential: f64,
    /// Surface mass-transfer coefficient β, cm/s.
    pub beta_cm_per_s: f64,
    /// Cooling rate at 700 °C during the quench, °C/h.
    pub cooling_rate_c_per_h: f64,
    /// Quenchant temperature, °C.
    pub quench_temperature_c: f64,
    /// Tempering cycle; `None` reports as-quenched hardness.
    pub tempering: Option<Tempering>,
    /// Deepest evaluated coordinate, mm.
    pub max_depth_mm: f64,
    /// Evaluation points over the depth range, surface included.
    pub n_points: usize,
}

impl ProcessParameters {
    /// Typical automotive gear carburizing cycle: 920 °C, 6 h, Cp 1.0,
    /// oil quench, 170 °C / 2 h temper.
    pub fn typical_gear_cycle() -> Self {
        Self {
            temperature_c: 920.0,
            duration_h: 6.0,
            carbon_potential: 1.0,
            beta_cm_per_s: 1e-4,
            cooling_rate_c_per_h: 1000.0,
            quench_temperature_c: 60.0,
            tempering: Some(Tempering {
                temperature_c: 170.0,
                time_h: 2.0,
            }),
            max_depth_mm: 3.0,
            n_points: 61,
        }
    }

    /// Carburizing hold temperature as a typed quantity.
    pub fn temperature(&self) -> Temperature {
        celsius(self.temperature_c)
    }

    /// Carburizing time as a typed quantity.
    pub fn duration(&self) -> Time {
        hours(self.duration_h)
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.duration_h > 0.0) {
            return Err(SimError::InvalidArg {
                what: "duration must be positive",
            });
        }
        if !(self.temperature_c > 0.0) {
            return Err(SimError::InvalidArg {
                what: "carburizing temperature must be positive",
            });
        }
        if !(self.carbon_potential >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "carbon potential must be non-negative",
            });
        }
        if !(self.beta_cm_per_s > 0.0) {
            return Err(SimError::InvalidArg {
                what: "mass-transfer coefficient must be positive",
            });
        }
        if !(self.cooling_rate_c_per_h > 0.0) {
            return Err(SimError::InvalidArg {
                what: "cooling rate must be positive",
            });
        }
        if !self.quench_temperature_c.is_finite() {
            return Err(SimError::InvalidArg {
                what: "quench temperature must be finite",
            });
        }
        if !(self.max_depth_mm > 0.0) {
            return Err(SimError::InvalidArg {
                what: "max depth must be positive",
            });
        }
        if self.n_points < 2 {
            return Err(SimError::InvalidArg {
                what: "at least 2 evaluation points required",
            });
        }
        if let Some(t) = self.tempering {
            if !(t.time_h > 0.0) || !t.temperature_c.is_finite() {
                return Err(SimError::InvalidArg {
                    what: "tempering parameters out of range",
                });
            }
        }
        Ok(())
    }
}
