//! Furnace temperature schedule: linear ramp to target, then hold.

use cqt_core::units::constants::AMBIENT_C;

/// Temperature-vs-time schedule for a carburizing cycle.
#[derive(Debug, Clone, Copy)]
pub struct ThermalSchedule {
    /// Starting (ambient) temperature, °C.
    pub ambient_c: f64,
    /// Hold temperature, °C.
    pub target_c: f64,
    /// Heating rate, °C/min.
    pub heating_rate_c_per_min: f64,
}

impl ThermalSchedule {
    /// Ramp from ambient shop temperature at the given rate.
    pub fn ramp_and_hold(target_c: f64, heating_rate_c_per_min: f64) -> Self {
        Self {
            ambient_c: AMBIENT_C,
            target_c,
            heating_rate_c_per_min,
        }
    }

    /// Duration of the heating ramp, seconds.
    pub fn ramp_time_s(&self) -> f64 {
        if self.heating_rate_c_per_min <= 0.0 {
            return 0.0;
        }
        (self.target_c - self.ambient_c) / self.heating_rate_c_per_min * 60.0
    }

    /// Temperature at elapsed time t (seconds), °C.
    pub fn at(&self, t_s: f64) -> f64 {
        let ramp = self.ramp_time_s();
        if t_s <= ramp && ramp > 0.0 {
            self.ambient_c + self.heating_rate_c_per_min * t_s / 60.0
        } else {
            self.target_c
        }
    }
}
