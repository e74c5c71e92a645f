//! Empirical relations over steel composition.
//!
//! Critical temperatures (AE3/AE1/Ms), the carbon diffusivity Arrhenius
//! relation with its alloy correction factor, and the grain-growth
//! activation energy. Coefficients are kept exactly as published.

use crate::composition::SteelComposition;
use cqt_core::units::constants::R_GAS_CAL;

/// Upper critical temperature AE3 in °C.
///
/// AE3 = 912 − 203√C − 15.2Ni + 44.7Si + 104V + 31.5Mo + 13.1W
///       − 30Mn − 11Cr − 20Cu + 700P + 400Al + 120As + 400Ti
pub fn ae3_temperature(comp: &SteelComposition) -> f64 {
    912.0 - 203.0 * comp.c.sqrt() - 15.2 * comp.ni + 44.7 * comp.si + 104.0 * comp.v
        + 31.5 * comp.mo
        + 13.1 * comp.w
        - 30.0 * comp.mn
        - 11.0 * comp.cr
        - 20.0 * comp.cu
        + 700.0 * comp.p
        + 400.0 * comp.al
        + 120.0 * comp.as_
        + 400.0 * comp.ti
}

/// Lower critical (eutectoid) temperature AE1 in °C.
///
/// Base 727 °C shifted by alloy content, bounded to the typical 680-750 °C
/// range.
pub fn ae1_temperature(comp: &SteelComposition) -> f64 {
    let ae1 = 727.0 - 10.0 * comp.mn - 5.0 * comp.cr - 8.0 * comp.ni + 12.0 * comp.si
        + 15.0 * comp.mo
        - 30.0 * comp.c
        + 20.0 * comp.al
        + 10.0 * comp.v;
    ae1.clamp(680.0, 750.0)
}

/// Cubic Ms correction, active only above 0.53 wt% C.
pub fn ms_correction(carbon: f64) -> f64 {
    if carbon < 0.53 {
        0.0
    } else {
        242.42 * carbon.powi(3) - 357.26 * carbon.powi(2) + 272.65 * carbon - 80.103
    }
}

/// Martensite-start temperature in °C.
///
/// Ms = 561 − 474C − 33Mn − 17Ni − 17Cr − 21Mo + CF(C)
pub fn ms_temperature(comp: &SteelComposition) -> f64 {
    561.0 - 474.0 * comp.c - 33.0 * comp.mn - 17.0 * comp.ni - 17.0 * comp.cr - 21.0 * comp.mo
        + ms_correction(comp.c)
}

/// Alloy correction factor q for the carbon diffusivity.
pub fn diffusivity_q_factor(comp: &SteelComposition) -> f64 {
    1.0 + (0.15 + 0.033 * comp.si) * comp.si
        - 0.0365 * comp.mn
        - (0.13 - 0.0055 * comp.cr) * comp.cr
        + (0.03 - 0.03365 * comp.ni) * comp.ni
        - (0.025 - 0.01 * comp.mo) * comp.mo
        - (0.03 - 0.02 * comp.al) * comp.al
        - (0.016 + 0.0014 * comp.cu) * comp.cu
        - (0.22 - 0.01 * comp.v) * comp.v
}

/// Carbon diffusivity in austenite, m²/s.
///
/// D = 0.47e−4 · exp(−1.6C − (37000 − 6600C)/(R·(T+273))) · q
/// with T in °C, C the local carbon content in wt%, R in cal/(mol·K).
pub fn carbon_diffusivity(temperature_c: f64, carbon: f64, comp: &SteelComposition) -> f64 {
    let q = diffusivity_q_factor(comp);
    0.47e-4
        * (-1.6 * carbon - (37_000.0 - 6_600.0 * carbon) / (R_GAS_CAL * (temperature_c + 273.0)))
            .exp()
        * q
}

/// Activation energy for austenite grain growth, J/mol.
///
/// Q = 89098 + 3581C + 1211Ni + 1443Cr + 4031Mo
pub fn grain_growth_activation_energy(comp: &SteelComposition) -> f64 {
    89_098.0 + 3_581.0 * comp.c + 1_211.0 * comp.ni + 1_443.0 * comp.cr + 4_031.0 * comp.mo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aisi8620() -> SteelComposition {
        SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap()
    }

    #[test]
    fn ae3_in_expected_range() {
        let ae3 = ae3_temperature(&aisi8620());
        // Low-carbon gear steel: AE3 well above the eutectoid
        assert!(ae3 > 780.0 && ae3 < 900.0, "ae3 = {ae3}");
    }

    #[test]
    fn ae1_bounded() {
        let ae1 = ae1_temperature(&aisi8620());
        assert!((680.0..=750.0).contains(&ae1));
    }

    #[test]
    fn ms_correction_inactive_below_053() {
        assert_eq!(ms_correction(0.20), 0.0);
        assert_eq!(ms_correction(0.529), 0.0);
        assert!(ms_correction(0.80) > 0.0);
    }

    #[test]
    fn ms_drops_with_carbon() {
        let base = aisi8620();
        let ms_low = ms_temperature(&base);
        let ms_high = ms_temperature(&base.with_carbon(0.60).unwrap());
        assert!(ms_high < ms_low);
    }

    #[test]
    fn diffusivity_magnitude_at_carburizing_temp() {
        // D at 920 °C for mid-case carbon is on the order of 1e-11 m²/s
        let d = carbon_diffusivity(920.0, 0.6, &aisi8620());
        assert!(d > 1e-12 && d < 1e-10, "D = {d:e}");
    }

    #[test]
    fn q_factor_near_unity_for_low_alloy() {
        let q = diffusivity_q_factor(&aisi8620());
        assert!(q > 0.8 && q < 1.1, "q = {q}");
    }

    #[test]
    fn activation_energy_positive() {
        assert!(grain_growth_activation_energy(&aisi8620()) > 89_000.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Diffusivity must be strictly increasing in temperature: the
        // effective activation energy 37000 − 6600C stays positive over the
        // whole physical carbon range.
        #[test]
        fn diffusivity_monotonic_in_temperature(
            t in 750.0_f64..1050.0,
            dt in 1.0_f64..100.0,
            c in 0.0_f64..1.5,
        ) {
            let steel = SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap();
            let d_lo = carbon_diffusivity(t, c, &steel);
            let d_hi = carbon_diffusivity(t + dt, c, &steel);
            prop_assert!(d_hi > d_lo);
        }
    }
}
