//! Pipeline-level errors.

use cqt_diffusion::DiffusionError;
use cqt_hardness::HardnessError;
use cqt_steel::SteelError;
use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation input: {what}")]
    InvalidArg { what: &'static str },

    #[error("calibration needs at least one experimental record")]
    NoRecords,

    #[error(transparent)]
    Steel(#[from] SteelError),

    #[error(transparent)]
    Diffusion(#[from] DiffusionError),

    #[error(transparent)]
    Hardness(#[from] HardnessError),
}

impl From<SimError> for cqt_core::CqtError {
    fn from(err: SimError) -> Self {
        match err {
            SimError::InvalidArg { what } => cqt_core::CqtError::InvalidArg { what },
            SimError::NoRecords => cqt_core::CqtError::InvalidArg {
                what: "empty experimental record set",
            },
            SimError::Steel(e) => e.into(),
            SimError::Diffusion(e) => e.into(),
            SimError::Hardness(e) => e.into(),
        }
    }
}
