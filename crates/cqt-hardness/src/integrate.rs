//! Hardness profile integration over a carbon-vs-depth profile.

use crate::convert::hv_to_hrc;
use crate::error::{HardnessError, HardnessResult};
use crate::maynier::PhaseHardness;
use crate::phases::estimate_fractions;
use crate::tempering::{Tempering, tempered_martensite};
use cqt_diffusion::DepthProfile;
use cqt_steel::{CalibrationFactors, SteelComposition, relations};
use tracing::debug;

/// Quench conditions shared by every depth point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuenchConditions {
    /// Cooling rate at 700 °C, °C/h.
    pub cooling_rate_c_per_h: f64,
    /// Quenchant temperature, °C.
    pub quench_temperature_c: f64,
}

impl QuenchConditions {
    pub fn new(cooling_rate_c_per_h: f64, quench_temperature_c: f64) -> HardnessResult<Self> {
        if !(cooling_rate_c_per_h > 0.0) {
            return Err(HardnessError::InvalidArg {
                what: "cooling rate must be positive",
            });
        }
        if !quench_temperature_c.is_finite() {
            return Err(HardnessError::InvalidArg {
                what: "quench temperature must be finite",
            });
        }
        Ok(Self {
            cooling_rate_c_per_h,
            quench_temperature_c,
        })
    }
}

/// Hardness-vs-depth profile, co-indexed with the carbon profile it was
/// computed from.
#[derive(Debug, Clone)]
pub struct HardnessProfile {
    depths_m: Vec<f64>,
    hv: Vec<f64>,
    hrc: Vec<f64>,
}

impl HardnessProfile {
    pub fn len(&self) -> usize {
        self.depths_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths_m.is_empty()
    }

    pub fn depths_m(&self) -> &[f64] {
        &self.depths_m
    }

    pub fn hv(&self) -> &[f64] {
        &self.hv
    }

    pub fn hrc(&self) -> &[f64] {
        &self.hrc
    }

    pub fn surface_hv(&self) -> f64 {
        self.hv[0]
    }

    pub fn surface_hrc(&self) -> f64 {
        self.hrc[0]
    }

    pub fn core_hv(&self) -> f64 {
        self.hv[self.hv.len() - 1]
    }

    pub fn core_hrc(&self) -> f64 {
        self.hrc[self.hrc.len() - 1]
    }
}

/// Evaluate hardness at every point of a carbon profile.
///
/// Each depth gets its own local composition (bulk chemistry with the
/// carburized carbon substituted), its own martensite-start temperature,
/// and its own phase-fraction estimate. Tempering, when given, softens
/// only the martensite component before the mixture is re-blended. The
/// hardness calibration factor scales HV before the Rockwell conversion.
pub fn hardness_profile(
    carbon_profile: &DepthProfile,
    comp: &SteelComposition,
    quench: QuenchConditions,
    tempering: Option<Tempering>,
    factors: &CalibrationFactors,
) -> HardnessResult<HardnessProfile> {
    let n = carbon_profile.len();
    let mut hv = Vec::with_capacity(n);
    let mut hrc = Vec::with_capacity(n);

    for (_, carbon) in carbon_profile.iter() {
        let local = comp.with_carbon(carbon)?;
        let phase_hardness = PhaseHardness::evaluate(&local, quench.cooling_rate_c_per_h);
        let ms = relations::ms_temperature(&local);
        let fractions = estimate_fractions(carbon, ms, quench.quench_temperature_c)?;

        let hv_point = match tempering {
            Some(t) => {
                let hv_m = tempered_martensite(phase_hardness.martensite, t, carbon)?;
                phase_hardness.mixture_with_martensite(&fractions, hv_m)
            }
            None => phase_hardness.mixture(&fractions),
        };

        let hv_cal = hv_point * factors.hardness;
        hv.push(hv_cal);
        hrc.push(hv_to_hrc(hv_cal));
    }

    debug!(
        points = n,
        surface_hv = hv[0],
        core_hv = hv[n - 1],
        "hardness profile evaluated"
    );

    Ok(HardnessProfile {
        depths_m: carbon_profile.depths_m().to_vec(),
        hv,
        hrc,
    })
}
