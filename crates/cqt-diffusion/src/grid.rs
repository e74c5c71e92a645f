//! Spatial discretization and boundary-condition configuration.

use crate::error::{DiffusionError, DiffusionResult};

/// Part geometry for the 1-D spatial domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Plane wall, Cartesian coordinate.
    Planar,
    /// Radial diffusion with 1/r flux weighting.
    Cylindrical,
    /// Radial diffusion with 1/r² flux weighting.
    Spherical,
}

/// Boundary condition applied at the surface node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCondition {
    /// Dirichlet: surface clamped to the atmosphere carbon potential.
    FixedCarbon,
    /// Neumann: zero flux, surface mirrors the adjacent node.
    ZeroFlux,
    /// Robin: flux balance β(Cp − Cs) = −D·∂C/∂x at the surface.
    MassTransfer,
}

/// Configuration for a finite-difference run.
///
/// The far (bulk) boundary is always zero-flux.
#[derive(Debug, Clone, Copy)]
pub struct FdConfig {
    pub geometry: Geometry,
    pub surface: SurfaceCondition,
    /// Depth of the discretized domain, meters. For the radial geometries
    /// this is the outer radius; the far boundary then sits at the center.
    pub length_m: f64,
    /// Number of spatial nodes over the domain, surface included.
    pub n_nodes: usize,
    /// Time step, seconds.
    pub dt_s: f64,
    /// Total carburizing time, hours.
    pub duration_h: f64,
    /// Hold temperature, °C.
    pub temperature_c: f64,
    /// Furnace heating rate, °C/min.
    pub heating_rate_c_per_min: f64,
    /// Atmosphere carbon potential, wt%.
    pub carbon_potential: f64,
    /// Mass-transfer coefficient β, cm/s.
    pub beta_cm_per_s: f64,
    /// Initial (bulk) carbon content, wt%.
    pub initial_carbon: f64,
}

impl FdConfig {
    pub(crate) fn validate(&self) -> DiffusionResult<()> {
        if self.n_nodes < 3 {
            return Err(DiffusionError::InvalidConfig {
                what: "at least 3 spatial nodes required",
            });
        }
        if !(self.length_m > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "characteristic length must be positive",
            });
        }
        if !(self.dt_s > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "time step must be positive",
            });
        }
        if !(self.duration_h > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "duration must be positive",
            });
        }
        if !(self.initial_carbon >= 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "initial carbon must be non-negative",
            });
        }
        if matches!(self.surface, SurfaceCondition::MassTransfer) && !(self.beta_cm_per_s > 0.0) {
            return Err(DiffusionError::InvalidConfig {
                what: "mass-transfer surface requires positive beta",
            });
        }
        Ok(())
    }

    /// Node spacing, meters.
    pub fn dx(&self) -> f64 {
        self.length_m / (self.n_nodes - 1) as f64
    }
}
