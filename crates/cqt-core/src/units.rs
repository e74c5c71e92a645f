// cqt-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, ThermodynamicTemperature as UomThermodynamicTemperature,
    Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

/// Scalar conversions used inside numeric kernels, where everything is raw f64.
pub mod convert {
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const CM_PER_S_TO_M_PER_S: f64 = 0.01;

    #[inline]
    pub fn hours_to_seconds(h: f64) -> f64 {
        h * SECONDS_PER_HOUR
    }

    #[inline]
    pub fn mm_to_m(v: f64) -> f64 {
        v * 1e-3
    }

    #[inline]
    pub fn m_to_mm(v: f64) -> f64 {
        v * 1e3
    }
}

pub mod constants {
    /// Gas constant in cal/(mol·K), used by the Arrhenius diffusivity relation.
    pub const R_GAS_CAL: f64 = 1.987;

    /// Gas constant in J/(mol·K).
    pub const R_GAS_J: f64 = 8.314;

    /// Ambient shop temperature assumed before the furnace ramp, °C.
    pub const AMBIENT_C: f64 = 25.0;
}
