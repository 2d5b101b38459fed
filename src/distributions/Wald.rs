//! # Wald distribution
//!
//! The [Wald distribution](https://en.wikipedia.org/wiki/Inverse_Gaussian_distribution)
//! (also known as inverse Gaussian) is a continuous probability distribution
//! on `(0, inf)`. It has 2 parameters:
//!  - `mean`: the mean of the distribution.
//!  - `scale`: the shape parameter (usually denoted by `lambda`).
//!
//! Samples are generated with the transformation method of
//! Michael, Schucany and Haas (1976): one normal and one uniform per sample,
//! no rejection.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Normal::gauss;

/// Returns a sample from a Wald distribution with the given `mean` and `scale`.
pub fn wald<S: UniformSource>(generator: &mut LegacyGenerator<S>, mean: f64, scale: f64) -> f64 {
    // https://en.wikipedia.org/wiki/Inverse_Gaussian_distribution#Sampling_from_an_inverse-Gaussian_distribution
    let mu_2l: f64 = mean / (2.0 * scale);

    let mut y: f64 = gauss(generator);
    y = mean * y * y;

    let x: f64 = mean + mu_2l * (y - (4.0 * scale * y + y * y).sqrt());
    let u: f64 = generator.next_double();

    if u <= mean / (mean + x) {
        return x;
    }

    return mean * mean / x;
}
