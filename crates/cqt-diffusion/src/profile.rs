//! Carbon-vs-depth profile.

use crate::error::{DiffusionError, DiffusionResult};

/// An ordered carbon profile from the surface into the part.
///
/// Depths are in meters, carbon in wt%. Invariants enforced at construction:
/// `depth[0] == 0` (the surface), depths strictly increasing, carbon values
/// finite and co-indexed with depth. Read-only afterward — the hardness
/// integrator and case-depth extraction consume it without mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile {
    depths_m: Vec<f64>,
    carbon: Vec<f64>,
}

impl DepthProfile {
    pub fn new(depths_m: Vec<f64>, carbon: Vec<f64>) -> DiffusionResult<Self> {
        if depths_m.is_empty() {
            return Err(DiffusionError::InvalidProfile {
                what: "empty profile",
            });
        }
        if depths_m.len() != carbon.len() {
            return Err(DiffusionError::InvalidProfile {
                what: "depth and carbon arrays differ in length",
            });
        }
        if depths_m[0] != 0.0 {
            return Err(DiffusionError::InvalidProfile {
                what: "profile must start at the surface (depth 0)",
            });
        }
        for w in depths_m.windows(2) {
            if !(w[1] > w[0]) {
                return Err(DiffusionError::InvalidProfile {
                    what: "depths must be strictly increasing",
                });
            }
        }
        for &c in &carbon {
            if !c.is_finite() {
                return Err(DiffusionError::InvalidProfile {
                    what: "non-finite carbon value",
                });
            }
        }
        Ok(Self { depths_m, carbon })
    }

    pub fn len(&self) -> usize {
        self.depths_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths_m.is_empty()
    }

    /// Depth coordinates in meters, surface first.
    pub fn depths_m(&self) -> &[f64] {
        &self.depths_m
    }

    /// Carbon contents in wt%, co-indexed with depth.
    pub fn carbon(&self) -> &[f64] {
        &self.carbon
    }

    /// Carbon at the surface node.
    pub fn surface_carbon(&self) -> f64 {
        self.carbon[0]
    }

    /// Carbon at the deepest node.
    pub fn core_carbon(&self) -> f64 {
        self.carbon[self.carbon.len() - 1]
    }

    /// Deepest coordinate in meters.
    pub fn max_depth_m(&self) -> f64 {
        self.depths_m[self.depths_m.len() - 1]
    }

    /// Carbon gradient at the surface via forward difference, wt%/m.
    pub fn surface_gradient(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        (self.carbon[1] - self.carbon[0]) / (self.depths_m[1] - self.depths_m[0])
    }

    /// Iterate (depth_m, carbon) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.depths_m
            .iter()
            .copied()
            .zip(self.carbon.iter().copied())
    }
}
