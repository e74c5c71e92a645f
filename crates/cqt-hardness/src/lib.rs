//! As-quenched and tempered hardness prediction.
//!
//! Converts a carbon-vs-depth profile into Vickers and Rockwell-C hardness
//! profiles: empirical per-phase hardness regressions over composition and
//! cooling rate, a carbon-regime phase-fraction estimate, a law-of-mixtures
//! blend, and an optional tempering correction applied to the martensite
//! component.

pub mod convert;
pub mod error;
pub mod integrate;
pub mod maynier;
pub mod phases;
pub mod tempering;

pub use error::{HardnessError, HardnessResult};
pub use integrate::{HardnessProfile, QuenchConditions, hardness_profile};
pub use maynier::PhaseHardness;
pub use phases::{Phase, PhaseFractions, estimate_fractions};
pub use tempering::Tempering;
