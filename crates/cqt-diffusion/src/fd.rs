//! Time-marching finite-difference diffusion solver.
//!
//! Each step refreshes the per-node diffusivity from the local carbon and
//! the scheduled temperature, assembles a tridiagonal system and advances
//! either implicitly (backward Euler, unconditionally stable) or explicitly
//! (forward Euler, rejected outright when the step exceeds the stability
//! bound 0.5·dx²/D_max).

use crate::error::{DiffusionError, DiffusionResult};
use crate::grid::{FdConfig, Geometry, SurfaceCondition};
use crate::profile::DepthProfile;
use crate::schedule::ThermalSchedule;
use crate::tridiag;
use cqt_core::units::convert::{CM_PER_S_TO_M_PER_S, hours_to_seconds};
use cqt_steel::{CalibrationFactors, SteelComposition, relations};
use nalgebra::DVector;
use tracing::debug;

/// Time-integration scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeScheme {
    /// Backward Euler; tridiagonal solve per step.
    Implicit,
    /// Forward Euler; subject to the diffusive stability bound.
    Explicit,
}

/// Per-step diagnostics recorded over the whole run.
#[derive(Debug, Clone, Default)]
pub struct TimeHistory {
    /// Elapsed time at each recorded state, seconds.
    pub time_s: Vec<f64>,
    /// Carbon at the surface node, wt%.
    pub surface_carbon: Vec<f64>,
    /// Scheduled temperature, °C.
    pub temperature_c: Vec<f64>,
}

/// Result of a finite-difference run.
#[derive(Debug, Clone)]
pub struct FdSolution {
    pub profile: DepthProfile,
    pub history: TimeHistory,
    /// Number of time steps taken.
    pub steps: usize,
}

/// Finite-difference carbon diffusion solver.
#[derive(Debug, Clone)]
pub struct FdSolver {
    comp: SteelComposition,
    config: FdConfig,
    factors: CalibrationFactors,
    schedule: ThermalSchedule,
}

impl FdSolver {
    pub fn new(
        comp: SteelComposition,
        config: FdConfig,
        factors: CalibrationFactors,
    ) -> DiffusionResult<Self> {
        config.validate()?;
        let schedule =
            ThermalSchedule::ramp_and_hold(config.temperature_c, config.heating_rate_c_per_min);
        Ok(Self {
            comp,
            config,
            factors,
            schedule,
        })
    }

    /// March the solution to the configured duration.
    pub fn run(&self, scheme: TimeScheme) -> DiffusionResult<FdSolution> {
        let cfg = &self.config;
        let n = cfg.n_nodes;
        let dx = cfg.dx();
        let total_s = hours_to_seconds(cfg.duration_h);

        let mut carbon = DVector::from_element(n, cfg.initial_carbon);
        let mut history = TimeHistory::default();
        history.time_s.push(0.0);
        history.surface_carbon.push(carbon[0]);
        history.temperature_c.push(self.schedule.at(0.0));

        let mut t = 0.0;
        let mut steps = 0usize;
        while t < total_s {
            let dt = cfg.dt_s.min(total_s - t);
            let temp_c = self.schedule.at(t + dt);
            let diffusivity = self.diffusivity_field(temp_c, &carbon);

            carbon = match scheme {
                TimeScheme::Implicit => self.step_implicit(&carbon, &diffusivity, dt, dx)?,
                TimeScheme::Explicit => self.step_explicit(&carbon, &diffusivity, dt, dx)?,
            };

            t += dt;
            steps += 1;
            history.time_s.push(t);
            history.surface_carbon.push(carbon[0]);
            history.temperature_c.push(temp_c);
        }

        debug!(
            steps,
            surface_carbon = carbon[0],
            "finite-difference run complete"
        );

        let depths_m: Vec<f64> = (0..n).map(|i| i as f64 * dx).collect();
        let profile = DepthProfile::new(depths_m, carbon.iter().copied().collect())?;
        Ok(FdSolution {
            profile,
            history,
            steps,
        })
    }

    /// Convenience wrapper returning only the final profile.
    pub fn profile(&self, scheme: TimeScheme) -> DiffusionResult<DepthProfile> {
        Ok(self.run(scheme)?.profile)
    }

    /// Diffusivity at every node from local carbon and current temperature.
    ///
    /// State-dependent: must be refreshed before assembling each step.
    fn diffusivity_field(&self, temp_c: f64, carbon: &DVector<f64>) -> Vec<f64> {
        carbon
            .iter()
            .map(|&c| {
                relations::carbon_diffusivity(temp_c, c, &self.comp) * self.factors.diffusivity
            })
            .collect()
    }

    /// Effective β in m/s, calibration applied.
    fn beta_m(&self) -> f64 {
        self.config.beta_cm_per_s * CM_PER_S_TO_M_PER_S * self.factors.mass_transfer
    }

    /// Flux weights for the deeper and shallower faces of interior node i.
    ///
    /// Depth runs inward from the outer surface, so node i sits at radius
    /// `length − i·dx` for the radial geometries; the deeper face has the
    /// smaller radius. The far boundary row doubles as the symmetry
    /// condition at the center.
    fn face_weights(&self, i: usize, dx: f64) -> (f64, f64) {
        match self.config.geometry {
            Geometry::Planar => (1.0, 1.0),
            Geometry::Cylindrical => {
                let r = self.config.length_m - i as f64 * dx;
                ((r - 0.5 * dx) / r, (r + 0.5 * dx) / r)
            }
            Geometry::Spherical => {
                let r = self.config.length_m - i as f64 * dx;
                (((r - 0.5 * dx) / r).powi(2), ((r + 0.5 * dx) / r).powi(2))
            }
        }
    }

    fn step_implicit(
        &self,
        carbon: &DVector<f64>,
        diffusivity: &[f64],
        dt: f64,
        dx: f64,
    ) -> DiffusionResult<DVector<f64>> {
        let cfg = &self.config;
        let n = cfg.n_nodes;
        let alpha = dt / (dx * dx);

        let mut lower = vec![0.0; n - 1];
        let mut diag = vec![1.0; n];
        let mut upper = vec![0.0; n - 1];
        let mut rhs = carbon.clone();

        for i in 1..n - 1 {
            let d_plus = 0.5 * (diffusivity[i] + diffusivity[i + 1]);
            let d_minus = 0.5 * (diffusivity[i - 1] + diffusivity[i]);
            let (w_plus, w_minus) = self.face_weights(i, dx);
            let coeff_plus = alpha * d_plus * w_plus;
            let coeff_minus = alpha * d_minus * w_minus;

            lower[i - 1] = -coeff_minus;
            diag[i] = 1.0 + coeff_plus + coeff_minus;
            upper[i] = -coeff_plus;
        }

        // Surface row
        match cfg.surface {
            SurfaceCondition::FixedCarbon => {
                diag[0] = 1.0;
                upper[0] = 0.0;
                rhs[0] = cfg.carbon_potential;
            }
            SurfaceCondition::ZeroFlux => {
                diag[0] = 1.0;
                upper[0] = -1.0;
                rhs[0] = 0.0;
            }
            SurfaceCondition::MassTransfer => {
                // β(Cp − C0) = −D(C1 − C0)/dx, solved for the matrix row:
                // (1 + βdx/D)·C0 − C1 = (βdx/D)·Cp
                let g = self.beta_m() * dx / diffusivity[0];
                diag[0] = 1.0 + g;
                upper[0] = -1.0;
                rhs[0] = g * cfg.carbon_potential;
            }
        }

        // Far boundary: zero flux into the bulk
        diag[n - 1] = 1.0;
        lower[n - 2] = -1.0;
        rhs[n - 1] = 0.0;

        tridiag::solve(&lower, &diag, &upper, &rhs)
    }

    fn step_explicit(
        &self,
        carbon: &DVector<f64>,
        diffusivity: &[f64],
        dt: f64,
        dx: f64,
    ) -> DiffusionResult<DVector<f64>> {
        let cfg = &self.config;
        let n = cfg.n_nodes;

        let d_max = diffusivity.iter().copied().fold(0.0_f64, f64::max);
        let limit = 0.5 * dx * dx / d_max;
        if dt > limit {
            return Err(DiffusionError::Instability {
                dt_s: dt,
                limit_s: limit,
            });
        }

        let alpha = dt / (dx * dx);
        let mut next = carbon.clone();

        for i in 1..n - 1 {
            let d_plus = 0.5 * (diffusivity[i] + diffusivity[i + 1]);
            let d_minus = 0.5 * (diffusivity[i - 1] + diffusivity[i]);
            let (w_plus, w_minus) = self.face_weights(i, dx);
            next[i] = carbon[i]
                + alpha
                    * (d_plus * w_plus * (carbon[i + 1] - carbon[i])
                        - d_minus * w_minus * (carbon[i] - carbon[i - 1]));
        }

        match cfg.surface {
            SurfaceCondition::FixedCarbon => next[0] = cfg.carbon_potential,
            SurfaceCondition::ZeroFlux => next[0] = next[1],
            SurfaceCondition::MassTransfer => {
                // Same algebra as the implicit row, applied to the new state
                let g = self.beta_m() * dx / diffusivity[0];
                next[0] = (next[1] + g * cfg.carbon_potential) / (1.0 + g);
            }
        }
        next[n - 1] = next[n - 2];

        Ok(next)
    }
}
