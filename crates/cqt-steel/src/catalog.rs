//! Catalog of common carburizing steel grades.

use crate::composition::SteelComposition;

/// Named steel grades with published nominal chemistries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteelGrade {
    Scr420,
    Scr420H,
    Sae4320,
    Aisi8620,
    Aisi4130,
}

impl SteelGrade {
    /// Nominal composition for this grade.
    pub fn composition(self) -> SteelComposition {
        // Nominal chemistries are all non-negative, so construction cannot fail.
        let comp = match self {
            Self::Scr420 => SteelComposition::low_alloy(0.18, 0.15, 0.65, 0.25, 1.00, 0.20),
            Self::Scr420H => SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.25, 1.20, 0.20),
            Self::Sae4320 => SteelComposition::low_alloy(0.20, 0.25, 0.65, 1.75, 0.50, 0.25),
            Self::Aisi8620 => SteelComposition::low_alloy(0.20, 0.25, 0.80, 0.50, 0.50, 0.20),
            Self::Aisi4130 => SteelComposition::low_alloy(0.30, 0.25, 0.50, 0.25, 0.95, 0.20),
        };
        comp.expect("catalog chemistries are valid")
    }

    /// All catalogued grades.
    pub fn all() -> &'static [SteelGrade] {
        &[
            Self::Scr420,
            Self::Scr420H,
            Self::Sae4320,
            Self::Aisi8620,
            Self::Aisi4130,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Scr420 => "SCR420",
            Self::Scr420H => "SCR420H",
            Self::Sae4320 => "SAE 4320",
            Self::Aisi8620 => "AISI 8620",
            Self::Aisi4130 => "AISI 4130",
        }
    }
}
