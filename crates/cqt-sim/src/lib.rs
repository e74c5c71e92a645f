//! Carburize-quench-temper process simulation.
//!
//! Wires the diffusion and hardness models into a single pipeline, extracts
//! threshold-based case depths, and wraps the whole chain as a black-box
//! objective for process optimization and factor calibration.

pub mod calibrate;
pub mod casedepth;
pub mod error;
pub mod optimize;
pub mod params;
pub mod pipeline;

pub use calibrate::{CalibrationOutcome, ExperimentalRecord, calibrate};
pub use casedepth::{Criterion, depth_at_threshold};
pub use error::{SimError, SimResult};
pub use optimize::{OptimizationConfig, OptimizationOutcome, optimize_for_case_depth};
pub use params::ProcessParameters;
pub use pipeline::{CaseDepthReport, DiffusionMode, analyze, run_diffusion, run_hardness};
