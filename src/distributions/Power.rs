//! # Power distribution
//!
//! The power function distribution on `[0, 1]`, `pdf(x) = a * x^(a - 1)`.
//! It is a [Beta](crate::distributions::Beta) distribution with parameters `(a, 1)`.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Exponential::standard_exponential;

/// Returns `(1 - exp(-E))^(1/a)` where `E` is a standard exponential.
///
/// `a == 0.0` is not guarded.
pub fn power<S: UniformSource>(generator: &mut LegacyGenerator<S>, a: f64) -> f64 {
    return (1.0 - (-standard_exponential(generator)).exp()).powf(1.0 / a);
}
