//! Steel chemical composition (weight percent).

use crate::error::{SteelError, SteelResult};

/// Steel chemistry in weight percent.
///
/// Immutable after construction; every field is validated finite and
/// non-negative. Derived compositions (local carbon at a given depth) are
/// produced with [`SteelComposition::with_carbon`], never by field mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteelComposition {
    pub c: f64,
    pub si: f64,
    pub mn: f64,
    pub ni: f64,
    pub cr: f64,
    pub mo: f64,
    pub v: f64,
    pub w: f64,
    pub cu: f64,
    pub p: f64,
    pub al: f64,
    pub as_: f64,
    pub ti: f64,
}

/// Builder input for [`SteelComposition::new`]; elements default to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elements {
    pub c: f64,
    pub si: f64,
    pub mn: f64,
    pub ni: f64,
    pub cr: f64,
    pub mo: f64,
    pub v: f64,
    pub w: f64,
    pub cu: f64,
    pub p: f64,
    pub al: f64,
    pub as_: f64,
    pub ti: f64,
}

impl SteelComposition {
    /// Create a validated composition.
    pub fn new(e: Elements) -> SteelResult<Self> {
        let fields: [(&'static str, f64); 13] = [
            ("C", e.c),
            ("Si", e.si),
            ("Mn", e.mn),
            ("Ni", e.ni),
            ("Cr", e.cr),
            ("Mo", e.mo),
            ("V", e.v),
            ("W", e.w),
            ("Cu", e.cu),
            ("P", e.p),
            ("Al", e.al),
            ("As", e.as_),
            ("Ti", e.ti),
        ];
        for (element, value) in fields {
            if !value.is_finite() {
                return Err(SteelError::NonFinite { element });
            }
            if value < 0.0 {
                return Err(SteelError::NegativeElement { element, value });
            }
        }
        Ok(Self {
            c: e.c,
            si: e.si,
            mn: e.mn,
            ni: e.ni,
            cr: e.cr,
            mo: e.mo,
            v: e.v,
            w: e.w,
            cu: e.cu,
            p: e.p,
            al: e.al,
            as_: e.as_,
            ti: e.ti,
        })
    }

    /// Shorthand for the common low-alloy gear steels: only C, Si, Mn, Ni,
    /// Cr, Mo specified, the rest zero.
    pub fn low_alloy(c: f64, si: f64, mn: f64, ni: f64, cr: f64, mo: f64) -> SteelResult<Self> {
        Self::new(Elements {
            c,
            si,
            mn,
            ni,
            cr,
            mo,
            ..Elements::default()
        })
    }

    /// Derive a copy with substituted carbon content.
    ///
    /// This is how the hardness integrator builds the local composition at
    /// each depth of a carburized profile.
    pub fn with_carbon(&self, carbon: f64) -> SteelResult<Self> {
        if !carbon.is_finite() {
            return Err(SteelError::NonFinite { element: "C" });
        }
        if carbon < 0.0 {
            return Err(SteelError::NegativeElement {
                element: "C",
                value: carbon,
            });
        }
        Ok(Self { c: carbon, ..*self })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_composition() {
        let steel = SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap();
        assert_eq!(steel.c, 0.20);
        assert_eq!(steel.ti, 0.0);
    }

    #[test]
    fn negative_element_rejected() {
        let err = SteelComposition::low_alloy(0.20, 0.25, -0.80, 0.50, 0.50, 0.20).unwrap_err();
        assert!(matches!(
            err,
            SteelError::NegativeElement { element: "Mn", .. }
        ));
    }

    #[test]
    fn non_finite_rejected() {
        let err = SteelComposition::low_alloy(f64::NAN, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap_err();
        assert!(matches!(err, SteelError::NonFinite { element: "C" }));
    }

    #[test]
    fn with_carbon_derives_copy() {
        let base = SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap();
        let local = base.with_carbon(0.85).unwrap();
        assert_eq!(local.c, 0.85);
        assert_eq!(local.cr, base.cr);
        // Base untouched
        assert_eq!(base.c, 0.20);
    }

    #[test]
    fn with_carbon_rejects_negative() {
        let base = SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20).unwrap();
        assert!(base.with_carbon(-0.1).is_err());
    }
}
