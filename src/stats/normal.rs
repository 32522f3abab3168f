//! Single-Gaussian density and cumulative distribution.

use std::f64::consts::{PI, SQRT_2};

use super::special::error_function;

/// Normal probability density at `x`.
///
/// `std_dev` must be strictly positive. That holds for every model parameter
/// set and is not checked here.
pub fn normal_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let coefficient = 1.0 / (std_dev * (2.0 * PI).sqrt());
    let exponent = -(x - mean).powi(2) / (2.0 * std_dev.powi(2));
    coefficient * exponent.exp()
}

/// Normal cumulative distribution, `P(X ≤ x)`.
///
/// Saturates to exactly 0.0 or 1.0 far in the tails. Callers treat that as a
/// valid probability.
pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * (1.0 + error_function((x - mean) / (std_dev * SQRT_2)))
}
