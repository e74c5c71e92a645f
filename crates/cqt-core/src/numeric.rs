/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Linearly spaced points including both endpoints.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }
    let delta = (end - start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
    // Ensure exact endpoint
    points[n - 1] = end;
    points
}
