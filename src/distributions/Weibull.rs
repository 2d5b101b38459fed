//! # Weibull distribution
//!
//! The [Weibull distribution](https://en.wikipedia.org/wiki/Weibull_distribution)
//! with shape `a` and scale `1`.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Exponential::standard_exponential;

/// Returns `E^(1/a)` where `E` is a standard exponential.
///
/// If `a == 0.0` returns `0.0` without drawing anything.
pub fn weibull<S: UniformSource>(generator: &mut LegacyGenerator<S>, a: f64) -> f64 {
    if a == 0.0 {
        return 0.0;
    }

    return standard_exponential(generator).powf(1.0 / a);
}
