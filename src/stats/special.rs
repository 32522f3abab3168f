//! Special functions.

// Abramowitz & Stegun 7.1.26 coefficients
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Approximation of the error function erf(x).
///
/// Abramowitz & Stegun formula 7.1.26, maximum absolute error ≈ 1.5 × 10⁻⁷.
/// Good enough for display percentiles; compare against it with a tolerance,
/// never with exact equality.
///
/// Computed on `|x|` with the sign restored afterwards, so `erf(-x) == -erf(x)`.
pub fn error_function(x: f64) -> f64 {
    // The polynomial leaves a ~1e-9 residue at the origin
    if x == 0.0 {
        return 0.0;
    }
    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    // Horner evaluation of the 5-term polynomial in t
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    sign * y
}
