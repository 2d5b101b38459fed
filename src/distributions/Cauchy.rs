//! # Cauchy distribution
//!
//! The [Cauchy distribution](https://en.wikipedia.org/wiki/Cauchy_distribution)
//! is a continuous probability distribution without mean nor variance.
//! The standard Cauchy is the ratio of 2 independent standard normals.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Normal::gauss;

/// Returns a sample from the standard Cauchy distribution.
///
/// Makes 2 calls to [gauss], each of them may use the cached gaussian.
/// The numerator is drawn first.
pub fn standard_cauchy<S: UniformSource>(generator: &mut LegacyGenerator<S>) -> f64 {
    let num: f64 = gauss(generator);
    let den: f64 = gauss(generator);
    return num / den;
}
