//! Hardness-domain errors.

use cqt_steel::SteelError;
use thiserror::Error;

pub type HardnessResult<T> = Result<T, HardnessError>;

#[derive(Debug, Error)]
pub enum HardnessError {
    #[error("invalid hardness input: {what}")]
    InvalidArg { what: &'static str },

    /// The Jaffe-Holloman constant K = 21.3 − 5.8C went non-positive, which
    /// happens only for carbon contents far outside the carburizing range.
    #[error("degenerate tempering parameter K = {k} (carbon {carbon} wt%)")]
    DegenerateTempering { k: f64, carbon: f64 },

    #[error(transparent)]
    Steel(#[from] SteelError),
}

impl From<HardnessError> for cqt_core::CqtError {
    fn from(err: HardnessError) -> Self {
        match err {
            HardnessError::Steel(e) => e.into(),
            HardnessError::InvalidArg { what } => cqt_core::CqtError::InvalidArg { what },
            HardnessError::DegenerateTempering { .. } => cqt_core::CqtError::Invariant {
                what: "Jaffe-Holloman parameter must be positive",
            },
        }
    }
}
