//! Carbon diffusion solvers for carburizing simulation.
//!
//! Two interchangeable strategies produce a carbon-vs-depth profile:
//!
//! - [`analytic`]: closed-form semi-infinite-body solution with a
//!   mass-transfer surface boundary condition. Fast; one representative
//!   diffusivity for the whole run.
//! - [`fd`]: time-marching finite differences on a discretized domain with
//!   per-node, state-dependent diffusivity, three geometries and three
//!   surface boundary-condition types. Slower; also records the full time
//!   history for diagnostics.

pub mod analytic;
pub mod error;
pub mod fd;
pub mod grid;
pub mod profile;
pub mod schedule;
mod tridiag;

pub use analytic::{AnalyticConfig, analytic_profile};
pub use error::{DiffusionError, DiffusionResult};
pub use fd::{FdSolution, FdSolver, TimeHistory, TimeScheme};
pub use grid::{FdConfig, Geometry, SurfaceCondition};
pub use profile::DepthProfile;
pub use schedule::ThermalSchedule;
