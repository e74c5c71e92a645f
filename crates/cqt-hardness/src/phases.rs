//! Microstructural phases and the carbon-regime phase-fraction estimate.

use crate::error::{HardnessError, HardnessResult};

/// Phases tracked by the hardness model. Closed set; every fraction accessor
/// matches exhaustively, so an unmodelled phase cannot silently read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Martensite,
    Austenite,
    Ferrite,
    Pearlite,
    Bainite,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Martensite,
        Phase::Austenite,
        Phase::Ferrite,
        Phase::Pearlite,
        Phase::Bainite,
    ];
}

/// Volume fractions of the five phases at one depth point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseFractions {
    pub martensite: f64,
    pub austenite: f64,
    pub ferrite: f64,
    pub pearlite: f64,
    pub bainite: f64,
}

impl PhaseFractions {
    /// Build a fraction set, normalizing so the phases sum to 1.
    pub fn new(
        martensite: f64,
        austenite: f64,
        ferrite: f64,
        pearlite: f64,
        bainite: f64,
    ) -> HardnessResult<Self> {
        let raw = Self {
            martensite,
            austenite,
            ferrite,
            pearlite,
            bainite,
        };
        for phase in Phase::ALL {
            let x = raw.fraction(phase);
            if !x.is_finite() || x < 0.0 {
                return Err(HardnessError::InvalidArg {
                    what: "phase fractions must be finite and non-negative",
                });
            }
        }
        let total = raw.sum();
        if total <= 0.0 {
            return Err(HardnessError::InvalidArg {
                what: "phase fractions must not all be zero",
            });
        }
        Ok(Self {
            martensite: martensite / total,
            austenite: austenite / total,
            ferrite: ferrite / total,
            pearlite: pearlite / total,
            bainite: bainite / total,
        })
    }

    pub fn fraction(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Martensite => self.martensite,
            Phase::Austenite => self.austenite,
            Phase::Ferrite => self.ferrite,
            Phase::Pearlite => self.pearlite,
            Phase::Bainite => self.bainite,
        }
    }

    pub fn sum(&self) -> f64 {
        Phase::ALL.iter().map(|&p| self.fraction(p)).sum()
    }

    /// Combined austenite + ferrite + pearlite fraction, the mixture the
    /// soft-phase hardness regression covers as one term.
    pub fn soft_mixture(&self) -> f64 {
        self.austenite + self.ferrite + self.pearlite
    }
}

/// Estimate phase fractions from local carbon content and quench severity.
///
/// Piecewise empirical blend with regime boundaries at 0.4 and 0.7 wt% C;
/// within each regime the outcome hinges on whether the quenchant
/// temperature sits below the local martensite-start temperature. The
/// coefficients are tuned values carried over as-is, not derived from a
/// transformation model.
pub fn estimate_fractions(
    carbon: f64,
    ms_temperature_c: f64,
    quench_temperature_c: f64,
) -> HardnessResult<PhaseFractions> {
    if !carbon.is_finite() || carbon < 0.0 {
        return Err(HardnessError::InvalidArg {
            what: "carbon content must be finite and non-negative",
        });
    }
    let below_ms = quench_temperature_c < ms_temperature_c;

    if carbon > 0.7 {
        if below_ms {
            // High carbon, full quench: martensite plus retained austenite
            let m = 0.80 + 0.10 * (1.0 - carbon);
            PhaseFractions::new(m, 1.0 - m, 0.0, 0.0, 0.0)
        } else {
            PhaseFractions::new(0.0, 0.7, 0.0, 0.0, 0.3)
        }
    } else if carbon > 0.4 {
        if below_ms {
            let t = (carbon - 0.4) / 0.3;
            let m = 0.6 + 0.2 * t;
            let f = 0.2 - 0.1 * t;
            let p = 0.2 - 0.1 * t;
            PhaseFractions::new(m, 0.0, f, p, 0.0)
        } else {
            PhaseFractions::new(0.0, 0.0, 0.4, 0.4, 0.2)
        }
    } else {
        let m = if below_ms { 0.2 } else { 0.0 };
        PhaseFractions::new(m, 0.0, 0.6, 0.2, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_normalize_to_one() {
        let f = PhaseFractions::new(2.0, 1.0, 1.0, 0.0, 0.0).unwrap();
        assert!((f.sum() - 1.0).abs() < 1e-12);
        assert!((f.martensite - 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_negative_fraction() {
        assert!(PhaseFractions::new(-0.1, 0.5, 0.6, 0.0, 0.0).is_err());
        assert!(PhaseFractions::new(0.0, 0.0, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn high_carbon_full_quench_is_martensite_dominated() {
        let f = estimate_fractions(0.9, 400.0, 60.0).unwrap();
        assert!(f.martensite > 0.75);
        assert!(f.austenite > 0.0);
        assert_eq!(f.ferrite, 0.0);
        assert!((f.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn high_carbon_warm_quench_has_no_martensite() {
        // Quenchant hotter than the depressed local Ms
        let f = estimate_fractions(0.9, 150.0, 200.0).unwrap();
        assert_eq!(f.martensite, 0.0);
        assert!((f.austenite - 0.7).abs() < 1e-12);
        assert!((f.bainite - 0.3).abs() < 1e-12);
    }

    #[test]
    fn medium_carbon_blend_interpolates() {
        let low = estimate_fractions(0.41, 400.0, 60.0).unwrap();
        let high = estimate_fractions(0.69, 400.0, 60.0).unwrap();
        assert!(high.martensite > low.martensite);
        assert!(high.ferrite < low.ferrite);
        assert!((low.sum() - 1.0).abs() < 1e-12);
        assert!((high.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn low_carbon_is_ferrite_pearlite() {
        let f = estimate_fractions(0.2, 430.0, 60.0).unwrap();
        assert!((f.martensite - 0.2).abs() < 1e-12);
        assert!(f.ferrite > f.pearlite);
        let slow = estimate_fractions(0.2, 430.0, 500.0).unwrap();
        assert_eq!(slow.martensite, 0.0);
    }

    #[test]
    fn rejects_nan_carbon() {
        assert!(estimate_fractions(f64::NAN, 400.0, 60.0).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn estimate_always_sums_to_one(
            carbon in 0.0_f64..1.4,
            ms in 100.0_f64..500.0,
            quench in 20.0_f64..300.0,
        ) {
            let f = estimate_fractions(carbon, ms, quench).unwrap();
            prop_assert!((f.sum() - 1.0).abs() < 1e-9);
            for phase in Phase::ALL {
                prop_assert!(f.fraction(phase) >= 0.0);
                prop_assert!(f.fraction(phase) <= 1.0 + 1e-12);
            }
        }
    }
}
