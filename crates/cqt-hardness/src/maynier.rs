//! Maynier as-quenched hardness regressions.
//!
//! Per-phase Vickers hardness as linear functions of composition with a
//! log10(cooling-rate) cross term. The cooling rate Vr is evaluated at
//! 700 °C in °C/h; a non-positive rate drops the log term rather than
//! producing a NaN.

use crate::phases::PhaseFractions;
use cqt_steel::SteelComposition;

fn log_vr(cooling_rate_c_per_h: f64) -> f64 {
    if cooling_rate_c_per_h > 0.0 {
        cooling_rate_c_per_h.log10()
    } else {
        0.0
    }
}

/// As-quenched Vickers hardness of the austenite-ferrite-pearlite mixture.
pub fn austenite_ferrite_pearlite(comp: &SteelComposition, cooling_rate_c_per_h: f64) -> f64 {
    let hv = 42.0
        + 223.0 * comp.c
        + 53.0 * comp.si
        + 30.0 * comp.mn
        + 12.6 * comp.ni
        + 7.0 * comp.cr
        + 19.0 * comp.mo
        + log_vr(cooling_rate_c_per_h)
            * (10.0 - 19.0 * comp.si + 4.0 * comp.ni + 8.0 * comp.cr + 130.0 * comp.v);
    hv.max(0.0)
}

/// As-quenched Vickers hardness of bainite.
pub fn bainite(comp: &SteelComposition, cooling_rate_c_per_h: f64) -> f64 {
    let hv = -323.0
        + 185.0 * comp.c
        + 330.0 * comp.si
        + 153.0 * comp.mn
        + 65.0 * comp.ni
        + 144.0 * comp.cr
        + 191.0 * comp.mo
        + log_vr(cooling_rate_c_per_h)
            * (89.0 + 53.0 * comp.c
                - 55.0 * comp.si
                - 22.0 * comp.mn
                - 10.0 * comp.ni
                - 20.0 * comp.cr
                - 33.0 * comp.mo);
    hv.max(0.0)
}

/// As-quenched Vickers hardness of martensite.
pub fn martensite(comp: &SteelComposition, cooling_rate_c_per_h: f64) -> f64 {
    let hv = 127.0
        + 949.0 * comp.c
        + 27.0 * comp.si
        + 11.0 * comp.mn
        + 8.0 * comp.ni
        + 16.0 * comp.cr
        + 211.0 * log_vr(cooling_rate_c_per_h);
    hv.max(0.0)
}

/// The three per-phase hardness values for one local composition.
#[derive(Debug, Clone, Copy)]
pub struct PhaseHardness {
    /// Austenite-ferrite-pearlite mixture, HV.
    pub afp: f64,
    /// Bainite, HV.
    pub bainite: f64,
    /// Martensite, HV.
    pub martensite: f64,
}

impl PhaseHardness {
    pub fn evaluate(comp: &SteelComposition, cooling_rate_c_per_h: f64) -> Self {
        Self {
            afp: austenite_ferrite_pearlite(comp, cooling_rate_c_per_h),
            bainite: bainite(comp, cooling_rate_c_per_h),
            martensite: martensite(comp, cooling_rate_c_per_h),
        }
    }

    /// Law-of-mixtures blend over the phase fractions.
    pub fn mixture(&self, fractions: &PhaseFractions) -> f64 {
        let hv = self.afp * fractions.soft_mixture()
            + self.bainite * fractions.bainite
            + self.martensite * fractions.martensite;
        hv.max(0.0)
    }

    /// Mixture with the martensite component replaced, used after tempering.
    pub fn mixture_with_martensite(&self, fractions: &PhaseFractions, hv_martensite: f64) -> f64 {
        let hv = self.afp * fractions.soft_mixture()
            + self.bainite * fractions.bainite
            + hv_martensite * fractions.martensite;
        hv.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aisi8620() -> SteelComposition {
        SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap()
    }

    #[test]
    fn phase_ordering_at_fast_cooling() {
        // At a brisk quench the regressions must order the phases physically
        let comp = aisi8620();
        let vr = 1000.0;
        let h = PhaseHardness::evaluate(&comp, vr);
        assert!(h.martensite > h.bainite, "{} vs {}", h.martensite, h.bainite);
        assert!(h.bainite > h.afp, "{} vs {}", h.bainite, h.afp);
    }

    #[test]
    fn martensite_scales_with_carbon() {
        let base = aisi8620();
        let rich = base.with_carbon(0.8).unwrap();
        assert!(martensite(&rich, 1000.0) > martensite(&base, 1000.0));
    }

    #[test]
    fn zero_cooling_rate_drops_log_term() {
        let comp = aisi8620();
        let h = martensite(&comp, 0.0);
        assert!(h.is_finite());
        // 127 + 949·0.2 + 27·0.25 + 11·0.8 + 8·0.5 + 16·0.5
        let expected = 127.0 + 949.0 * 0.2 + 27.0 * 0.25 + 11.0 * 0.8 + 8.0 * 0.5 + 16.0 * 0.5;
        assert!((h - expected).abs() < 1e-9);
    }

    #[test]
    fn mixture_is_convex_combination() {
        let comp = aisi8620();
        let h = PhaseHardness::evaluate(&comp, 1000.0);
        let all_m = PhaseFractions::new(1.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        let all_soft = PhaseFractions::new(0.0, 0.3, 0.4, 0.3, 0.0).unwrap();
        assert!((h.mixture(&all_m) - h.martensite).abs() < 1e-9);
        assert!((h.mixture(&all_soft) - h.afp).abs() < 1e-9);

        let mixed = PhaseFractions::new(0.5, 0.1, 0.2, 0.1, 0.1).unwrap();
        let hv = h.mixture(&mixed);
        assert!(hv > h.afp && hv < h.martensite);
    }

    #[test]
    fn bainite_clamps_at_zero_for_lean_chemistry() {
        // Near-pure iron drives the bainite regression negative
        let lean = SteelComposition::low_alloy(0.02, 0.0, 0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(bainite(&lean, 0.0), 0.0);
    }
}
