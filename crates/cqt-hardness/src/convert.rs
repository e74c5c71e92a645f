//! Vickers/Rockwell-C scale conversion.
//!
//! `HRC = 193·log10(HV) − 21.41·log10(HV)² − 316`, clamped at zero. The
//! inverse solves the quadratic in log10(HV); the quadratic peaks near
//! HV ≈ 32000, far above any physical hardness, so the lower root is the
//! physical one.

/// Vickers to Rockwell-C. Non-positive input maps to 0.
pub fn hv_to_hrc(hv: f64) -> f64 {
    if hv <= 0.0 {
        return 0.0;
    }
    let log_hv = hv.log10();
    let hrc = 193.0 * log_hv - 21.41 * log_hv * log_hv - 316.0;
    hrc.max(0.0)
}

/// Rockwell-C to Vickers, inverting the quadratic. Non-positive input maps
/// to 0; an HRC beyond the curve's apex also maps to 0.
pub fn hrc_to_hv(hrc: f64) -> f64 {
    if hrc <= 0.0 {
        return 0.0;
    }
    let a = -21.41;
    let b = 193.0;
    let c = -316.0 - hrc;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return 0.0;
    }
    let log_hv = (-b + discriminant.sqrt()) / (2.0 * a);
    10.0_f64.powf(log_hv)
}
