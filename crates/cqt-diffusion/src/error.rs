//! Error types for diffusion solvers.

use cqt_core::CqtError;
use cqt_steel::SteelError;
use thiserror::Error;

/// Result type for diffusion operations.
pub type DiffusionResult<T> = Result<T, DiffusionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiffusionError {
    /// Bad solver configuration (grid, time step, process window).
    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    /// Profile invariant violated (ordering, co-indexing, finiteness).
    #[error("Invalid depth profile: {what}")]
    InvalidProfile { what: &'static str },

    /// Explicit time step exceeds the stability bound 0.5·dx²/D_max.
    #[error("Explicit step unstable: dt = {dt_s} s exceeds limit {limit_s} s")]
    Instability { dt_s: f64, limit_s: f64 },

    /// Tridiagonal system lost its pivot during elimination.
    #[error("Singular tridiagonal system at node {node}")]
    SingularSystem { node: usize },

    /// Composition error from the steel model.
    #[error("Steel error: {0}")]
    Steel(#[from] SteelError),
}

impl From<DiffusionError> for CqtError {
    fn from(e: DiffusionError) -> Self {
        match e {
            DiffusionError::InvalidConfig { what } => CqtError::InvalidArg { what },
            DiffusionError::InvalidProfile { what } => CqtError::Invariant { what },
            DiffusionError::Instability { .. } => CqtError::Invariant {
                what: "explicit time step unstable",
            },
            DiffusionError::SingularSystem { .. } => CqtError::Invariant {
                what: "singular tridiagonal system",
            },
            DiffusionError::Steel(inner) => inner.into(),
        }
    }
}
