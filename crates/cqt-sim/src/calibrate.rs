//! Calibration of the four model factors against measured case depths.
//!
//! The whole pipeline is treated as a black-box objective: mean relative
//! case-depth error over the record set, with a unit penalty for any record
//! the pipeline fails to evaluate. A bounded Nelder-Mead simplex minimizes
//! it; candidates are clamped into the factor bounds before evaluation, so
//! the simplex can slide along a bound but never leave the box.

use crate::casedepth::Criterion;
use crate::error::{SimError, SimResult};
use crate::params::ProcessParameters;
use crate::pipeline::{DiffusionMode, analyze};
use cqt_hardness::Tempering;
use cqt_steel::{CalibrationFactors, SteelComposition};
use rayon::prelude::*;
use tracing::{debug, info};

/// Factor bounds, in `CalibrationFactors::to_array` order. The physics
/// factors get a wide band, the empirical hardness and boundary factors a
/// narrow one.
const BOUNDS: [(f64, f64); 4] = [(0.1, 3.0), (0.1, 3.0), (0.5, 2.0), (0.5, 2.0)];

/// Objective spread below which the simplex counts as converged.
const CONVERGENCE_TOLERANCE: f64 = 1e-4;
const MAX_ITERATIONS: usize = 200;

/// Initial simplex edge length along each axis.
const INITIAL_STEP: f64 = 0.25;

// Standard Nelder-Mead coefficients.
const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// One measured carburizing trial.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentalRecord {
    pub temperature_c: f64,
    pub duration_h: f64,
    pub carbon_potential: f64,
    pub measured_case_depth_mm: f64,
    pub criterion: Criterion,
    /// Temper applied in the trial; defaults to 170 °C / 2 h when absent.
    pub tempering: Option<Tempering>,
}

/// Fitted factors and fit quality.
#[derive(Debug, Clone, Copy)]
pub struct CalibrationOutcome {
    pub factors: CalibrationFactors,
    /// Mean relative case-depth error at the fitted factors.
    pub mean_relative_error: f64,
    pub iterations: usize,
    pub converged: bool,
}

fn clamp_to_bounds(x: [f64; 4]) -> [f64; 4] {
    let mut out = x;
    for (v, (lo, hi)) in out.iter_mut().zip(BOUNDS) {
        *v = v.clamp(lo, hi);
    }
    out
}

fn record_params(record: &ExperimentalRecord) -> ProcessParameters {
    ProcessParameters {
        temperature_c: record.temperature_c,
        duration_h: record.duration_h,
        carbon_potential: record.carbon_potential,
        tempering: record.tempering.or(Some(Tempering {
            temperature_c: 170.0,
            time_h: 2.0,
        })),
        ..ProcessParameters::typical_gear_cycle()
    }
}

/// Mean relative error of the pipeline at the given factor vector.
fn objective(comp: &SteelComposition, records: &[ExperimentalRecord], x: [f64; 4]) -> f64 {
    let factors = match CalibrationFactors::from_array(x) {
        Ok(f) => f,
        Err(_) => return f64::INFINITY,
    };

    let errors: Vec<f64> = records
        .par_iter()
        .map(|record| {
            let params = record_params(record);
            match analyze(comp, &params, DiffusionMode::Analytic, &factors) {
                Ok(report) => {
                    let predicted = report.case_depth_mm(record.criterion);
                    (predicted - record.measured_case_depth_mm).abs()
                        / record.measured_case_depth_mm
                }
                Err(_) => 1.0,
            }
        })
        .collect();

    errors.iter().sum::<f64>() / records.len() as f64
}

/// Fit the calibration factors to the experimental records.
pub fn calibrate(
    comp: &SteelComposition,
    records: &[ExperimentalRecord],
) -> SimResult<CalibrationOutcome> {
    if records.is_empty() {
        return Err(SimError::NoRecords);
    }
    for record in records {
        if !(record.measured_case_depth_mm > 0.0) {
            return Err(SimError::InvalidArg {
                what: "measured case depth must be positive",
            });
        }
    }

    // Simplex seeded at the identity factors plus one step along each axis
    let mut simplex: Vec<[f64; 4]> = Vec::with_capacity(5);
    simplex.push([1.0; 4]);
    for axis in 0..4 {
        let mut vertex = [1.0; 4];
        vertex[axis] += INITIAL_STEP;
        simplex.push(clamp_to_bounds(vertex));
    }
    let mut values: Vec<f64> = simplex
        .iter()
        .map(|&x| objective(comp, records, x))
        .collect();

    let mut iterations = 0;
    let mut converged = false;

    while iterations < MAX_ITERATIONS {
        iterations += 1;

        // Order vertices best to worst
        let mut order: Vec<usize> = (0..simplex.len()).collect();
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
        simplex = order.iter().map(|&i| simplex[i]).collect();
        values = order.iter().map(|&i| values[i]).collect();

        let spread = values[values.len() - 1] - values[0];
        if spread < CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }

        // Centroid of all but the worst vertex
        let worst = simplex.len() - 1;
        let mut centroid = [0.0; 4];
        for vertex in &simplex[..worst] {
            for (c, v) in centroid.iter_mut().zip(vertex) {
                *c += v / worst as f64;
            }
        }

        let reflect = |scale: f64| {
            let mut x = [0.0; 4];
            for i in 0..4 {
                x[i] = centroid[i] + scale * (centroid[i] - simplex[worst][i]);
            }
            clamp_to_bounds(x)
        };

        let reflected = reflect(REFLECTION);
        let f_reflected = objective(comp, records, reflected);

        if f_reflected < values[0] {
            let expanded = reflect(EXPANSION);
            let f_expanded = objective(comp, records, expanded);
            if f_expanded < f_reflected {
                simplex[worst] = expanded;
                values[worst] = f_expanded;
            } else {
                simplex[worst] = reflected;
                values[worst] = f_reflected;
            }
        } else if f_reflected < values[worst - 1] {
            simplex[worst] = reflected;
            values[worst] = f_reflected;
        } else {
            let contracted = reflect(-CONTRACTION);
            let f_contracted = objective(comp, records, contracted);
            if f_contracted < values[worst] {
                simplex[worst] = contracted;
                values[worst] = f_contracted;
            } else {
                // Shrink toward the best vertex
                let best = simplex[0];
                for vertex in simplex.iter_mut().skip(1) {
                    for (v, b) in vertex.iter_mut().zip(best) {
                        *v = b + SHRINK * (*v - b);
                    }
                    *vertex = clamp_to_bounds(*vertex);
                }
                for (value, vertex) in values.iter_mut().zip(&simplex).skip(1) {
                    *value = objective(comp, records, *vertex);
                }
            }
        }

        debug!(iterations, best = values[0], "simplex iteration");
    }

    let mut order: Vec<usize> = (0..simplex.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    let best_x = simplex[order[0]];
    let best_f = values[order[0]];

    let factors = CalibrationFactors::from_array(best_x)?;
    info!(
        ?factors,
        mean_relative_error = best_f,
        iterations,
        converged,
        "calibration finished"
    );

    Ok(CalibrationOutcome {
        factors,
        mean_relative_error: best_f,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cqt_steel::SteelGrade;

    fn aisi8620() -> SteelComposition {
        SteelGrade::Aisi8620.composition()
    }

    /// A record generated by the uncalibrated model itself.
    fn self_consistent_record() -> ExperimentalRecord {
        let params = ProcessParameters::typical_gear_cycle();
        let report = analyze(
            &aisi8620(),
            &params,
            DiffusionMode::Analytic,
            &CalibrationFactors::default(),
        )
        .unwrap();
        ExperimentalRecord {
            temperature_c: params.temperature_c,
            duration_h: params.duration_h,
            carbon_potential: params.carbon_potential,
            measured_case_depth_mm: report.case_depth_04_carbon_mm,
            criterion: Criterion::Carbon04,
            tempering: params.tempering,
        }
    }

    #[test]
    fn identity_data_fits_near_identity_factors() {
        let outcome = calibrate(&aisi8620(), &[self_consistent_record()]).unwrap();

        // Synthetic data from the default factors: the simplex must settle
        // and the fit must be excellent
        assert!(outcome.converged, "simplex did not converge");
        assert!(
            outcome.mean_relative_error < 0.02,
            "residual {}",
            outcome.mean_relative_error
        );
        for v in outcome.factors.to_array() {
            assert!((v - 1.0).abs() < 0.2, "factor {v} drifted from identity");
        }
    }

    #[test]
    fn fitted_factors_stay_in_bounds() {
        // A deliberately deep measurement drags the diffusivity factor up
        let mut record = self_consistent_record();
        record.measured_case_depth_mm *= 5.0;
        let outcome = calibrate(&aisi8620(), &[record]).unwrap();
        let [d, m, h, b] = outcome.factors.to_array();
        assert!((0.1..=3.0).contains(&d));
        assert!((0.1..=3.0).contains(&m));
        assert!((0.5..=2.0).contains(&h));
        assert!((0.5..=2.0).contains(&b));
    }

    #[test]
    fn empty_record_set_is_rejected() {
        let err = calibrate(&aisi8620(), &[]).unwrap_err();
        assert!(matches!(err, SimError::NoRecords));
    }

    #[test]
    fn rejects_non_positive_measurement() {
        let mut record = self_consistent_record();
        record.measured_case_depth_mm = 0.0;
        assert!(calibrate(&aisi8620(), &[record]).is_err());
    }

    #[test]
    fn multiple_records_reduce_to_finite_error() {
        let base = self_consistent_record();
        let mut shallow = base;
        shallow.duration_h = 3.0;
        shallow.measured_case_depth_mm = 0.6;
        let mut deep = base;
        deep.duration_h = 10.0;
        deep.measured_case_depth_mm = 1.2;

        let outcome = calibrate(&aisi8620(), &[base, shallow, deep]).unwrap();
        assert!(outcome.mean_relative_error.is_finite());
        assert!(outcome.iterations > 0);
    }
}
