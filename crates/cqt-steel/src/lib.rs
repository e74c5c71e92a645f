//! Steel chemistry: composition record, empirical relations, grade catalog.
//!
//! Everything downstream of this crate (diffusion, hardness, optimization)
//! consumes `SteelComposition` by value and evaluates the empirical relations
//! here. The regression constants come from published ICME correlations for
//! carburized gear steels and are preserved exactly; they are empirical fits,
//! not first-principles results.

pub mod calibration;
pub mod catalog;
pub mod composition;
pub mod error;
pub mod relations;

pub use calibration::CalibrationFactors;
pub use catalog::SteelGrade;
pub use composition::SteelComposition;
pub use error::{SteelError, SteelResult};
