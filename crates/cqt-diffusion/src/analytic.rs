//! Closed-form diffusion solution for a semi-infinite body.
//!
//! Fick's second law with a mass-transfer (Robin) surface condition admits
//! the classical solution
//!
//! `C(x,t) = C0 + (Cp − C0)·[erfc(x/(2√(Dt))) − exp(hx + h²Dt)·erfc(x/(2√(Dt)) + h√(Dt))]`
//!
//! with h = β/D. The exp·erfc product is the tail correction from the finite
//! surface reaction rate; once h√(Dt) is large the surface is effectively
//! saturated and the term underflows against the leading erfc, while the
//! bare exp overflows. It is dropped beyond [`H_SQRT_DT_CUTOFF`].

use crate::error::{DiffusionError, DiffusionResult};
use crate::profile::DepthProfile;
use cqt_core::numeric::linspace;
use cqt_core::units::convert::{CM_PER_S_TO_M_PER_S, hours_to_seconds, mm_to_m};
use cqt_steel::{CalibrationFactors, SteelComposition, relations};
use statrs::function::erf::erfc;

/// Above this value of h√(Dt) the exp·erfc correction term is treated as zero.
const H_SQRT_DT_CUTOFF: f64 = 10.0;

/// Configuration for one analytic run.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticConfig {
    /// Hold temperature, °C.
    pub temperature_c: f64,
    /// Carburizing time, hours.
    pub duration_h: f64,
    /// Atmosphere carbon potential, wt%.
    pub carbon_potential: f64,
    /// Mass-transfer coefficient β, cm/s.
    pub beta_cm_per_s: f64,
    /// Deepest evaluated coordinate, mm.
    pub max_depth_mm: f64,
    /// Number of evaluation points (surface included).
    pub n_points: usize,
}

impl AnalyticConfig {
    fn validate(&self) -> DiffusionResult<()> {
        if !(self.duration_h > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "duration must be positive",
            });
        }
        if !(self.max_depth_mm > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "max depth must be positive",
            });
        }
        if self.n_points < 2 {
            return Err(DiffusionError::InvalidConfig {
                what: "at least 2 evaluation points required",
            });
        }
        if !(self.beta_cm_per_s > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "mass-transfer coefficient must be positive",
            });
        }
        if !(self.carbon_potential >= 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "carbon potential must be non-negative",
            });
        }
        Ok(())
    }
}

/// Evaluate the closed-form carbon profile.
///
/// Diffusivity is evaluated once at the mean of surface potential and bulk
/// carbon (a single representative value for the whole run, not re-evaluated
/// per depth). The result is scaled by the boundary calibration factor and
/// clamped to the physical band [C0, Cp] to absorb numerical overshoot.
pub fn analytic_profile(
    comp: &SteelComposition,
    cfg: &AnalyticConfig,
    factors: &CalibrationFactors,
) -> DiffusionResult<DepthProfile> {
    cfg.validate()?;

    let c0 = comp.c;
    let cp = cfg.carbon_potential;
    let time_s = hours_to_seconds(cfg.duration_h);

    let avg_carbon = 0.5 * (c0 + cp);
    let d = relations::carbon_diffusivity(cfg.temperature_c, avg_carbon, comp)
        * factors.diffusivity;
    if !(d > 0.0) || !d.is_finite() {
        return Err(DiffusionError::InvalidConfig {
            what: "diffusivity evaluated non-positive",
        });
    }

    let beta_m = cfg.beta_cm_per_s * CM_PER_S_TO_M_PER_S * factors.mass_transfer;
    let h = beta_m / d;
    let sqrt_dt = (d * time_s).sqrt();

    let depths_m = linspace(0.0, mm_to_m(cfg.max_depth_mm), cfg.n_points);
    let carbon: Vec<f64> = depths_m
        .iter()
        .map(|&x| {
            let eta = x / (2.0 * sqrt_dt);
            let term1 = erfc(eta);
            // The erfc tail underflows to zero before the bare exponential
            // overflows, so the product is formed only while the tail is
            // nonzero. At depth with small D the exponent alone would
            // overflow and poison the profile with inf * 0.
            let term2 = if h * sqrt_dt < H_SQRT_DT_CUTOFF {
                let tail = erfc(eta + h * sqrt_dt);
                if tail > 0.0 {
                    (h * x + h * h * d * time_s).exp() * tail
                } else {
                    0.0
                }
            } else {
                0.0
            };
            let c = c0 + (cp - c0) * (term1 - term2);
            (c * factors.boundary).clamp(c0.min(cp), c0.max(cp))
        })
        .collect();

    DepthProfile::new(depths_m, carbon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aisi8620() -> SteelComposition {
        SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap()
    }

    fn standard_config() -> AnalyticConfig {
        AnalyticConfig {
            temperature_c: 920.0,
            duration_h: 6.0,
            carbon_potential: 1.0,
            beta_cm_per_s: 1e-4,
            max_depth_mm: 3.0,
            n_points: 61,
        }
    }

    #[test]
    fn profile_bounded_and_decreasing() {
        let profile = analytic_profile(
            &aisi8620(),
            &standard_config(),
            &CalibrationFactors::default(),
        )
        .unwrap();

        for (_, c) in profile.iter() {
            assert!((0.2..=1.0).contains(&c), "carbon {c} out of band");
        }
        for w in profile.carbon().windows(2) {
            assert!(w[1] <= w[0] + 1e-12, "profile not non-increasing");
        }
    }

    #[test]
    fn surface_saturates_toward_potential() {
        let profile = analytic_profile(
            &aisi8620(),
            &standard_config(),
            &CalibrationFactors::default(),
        )
        .unwrap();
        // 6 h at 920 °C with β = 1e-4 cm/s puts the surface close to Cp
        assert!(profile.surface_carbon() > 0.8);
        assert!(profile.surface_carbon() <= 1.0);
    }

    #[test]
    fn core_stays_at_bulk() {
        let profile = analytic_profile(
            &aisi8620(),
            &standard_config(),
            &CalibrationFactors::default(),
        )
        .unwrap();
        assert!((profile.core_carbon() - 0.2).abs() < 0.02);
    }

    #[test]
    fn short_time_small_beta_keeps_correction_term() {
        // Make h√(Dt) land below the cutoff so the exp·erfc branch runs
        let cfg = AnalyticConfig {
            duration_h: 0.05,
            beta_cm_per_s: 1e-5,
            ..standard_config()
        };
        let profile =
            analytic_profile(&aisi8620(), &cfg, &CalibrationFactors::default()).unwrap();
        // Surface is far from saturated under a slow atmosphere
        assert!(profile.surface_carbon() < 0.8);
        assert!(profile.surface_carbon() >= 0.2);
    }

    #[test]
    fn diffusivity_factor_deepens_case() {
        let base = analytic_profile(
            &aisi8620(),
            &standard_config(),
            &CalibrationFactors::default(),
        )
        .unwrap();
        let boosted = analytic_profile(
            &aisi8620(),
            &standard_config(),
            &CalibrationFactors::new(2.0, 1.0, 1.0, 1.0).unwrap(),
        )
        .unwrap();
        // More diffusivity pushes more carbon to mid-depth
        let mid = base.len() / 4;
        assert!(boosted.carbon()[mid] > base.carbon()[mid]);
    }

    #[test]
    fn cold_short_cycle_stays_finite_at_depth() {
        // Low temperature and a short hold make h = β/D huge while the far
        // nodes sit hundreds of diffusion lengths out, where the correction
        // exponent alone overflows
        let cfg = AnalyticConfig {
            temperature_c: 760.0,
            duration_h: 1.0 / 60.0,
            ..standard_config()
        };
        let profile =
            analytic_profile(&aisi8620(), &cfg, &CalibrationFactors::default()).unwrap();

        for (_, c) in profile.iter() {
            assert!(c.is_finite(), "non-finite carbon {c}");
        }
        // One minute barely moves carbon; the core is untouched
        assert!((profile.core_carbon() - 0.2).abs() < 1e-9);
        assert!(profile.surface_carbon() >= 0.2);
    }

    #[test]
    fn rejects_zero_duration() {
        let cfg = AnalyticConfig {
            duration_h: 0.0,
            ..standard_config()
        };
        let err = analytic_profile(&aisi8620(), &cfg, &CalibrationFactors::default()).unwrap_err();
        assert!(matches!(err, DiffusionError::InvalidConfig { .. }));
    }
}
