//! Steel composition errors.

use cqt_core::CqtError;
use thiserror::Error;

/// Result type for composition and relation evaluation.
pub type SteelResult<T> = Result<T, SteelError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteelError {
    /// Negative weight percent for an alloying element.
    #[error("Negative content for element {element}: {value}")]
    NegativeElement { element: &'static str, value: f64 },

    /// NaN or infinite weight percent.
    #[error("Non-finite content for element {element}")]
    NonFinite { element: &'static str },

    /// Calibration factor outside its valid (positive) range.
    #[error("Non-positive calibration factor: {what}")]
    NonPositiveFactor { what: &'static str },
}

impl From<SteelError> for CqtError {
    fn from(e: SteelError) -> Self {
        match e {
            SteelError::NegativeElement { element, value: _ } => {
                CqtError::InvalidArg { what: element }
            }
            SteelError::NonFinite { element } => CqtError::InvalidArg { what: element },
            SteelError::NonPositiveFactor { what } => CqtError::InvalidArg { what },
        }
    }
}
