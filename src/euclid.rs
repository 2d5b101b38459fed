//! Euclid contains useful math functions

use crate::configuration::{LN_2_PI, STIRLING_COEFFICIENTS};

/// Computes `ln(gamma(x))` for `0 < x` using the
/// [Stirling series](https://en.wikipedia.org/wiki/Stirling%27s_approximation#Stirling's_formula_for_the_gamma_function).
///
/// Small arguments (`x < 7`) are shifted up to `x + n >= 7` where the series
/// converges fast, and the shift is undone with the recurrence
/// `ln(gamma(x)) = ln(gamma(x + 1)) - ln(x)`.
///
/// `ln_gamma(1) == ln_gamma(2) == 0.0` exactly.
pub fn ln_gamma(x: f64) -> f64 {
    if x == 1.0 || x == 2.0 {
        return 0.0;
    }

    let n: i64 = if x < 7.0 { (7.0 - x) as i64 } else { 0 };

    let mut x0: f64 = x + n as f64;
    let inv_x0: f64 = 1.0 / x0;
    let x2: f64 = inv_x0 * inv_x0;

    //Horner's rule
    let mut gl0: f64 = STIRLING_COEFFICIENTS[9];
    for k in (0..9).rev() {
        gl0 = gl0 * x2 + STIRLING_COEFFICIENTS[k];
    }

    let mut gl: f64 = gl0 / x0 + 0.5 * LN_2_PI + (x0 - 0.5) * x0.ln() - x0;

    if x < 7.0 {
        for _ in 0..n {
            gl = gl - (x0 - 1.0).ln();
            x0 = x0 - 1.0;
        }
    }

    return gl;
}
