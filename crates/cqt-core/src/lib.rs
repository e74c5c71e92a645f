//! cqt-core: stable foundation for the C-Q-T simulation workspace.
//!
//! Contains:
//! - units (uom SI types + constructors + °C/hour/mm conversions)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CqtError, CqtResult};
pub use numeric::*;
pub use units::*;
