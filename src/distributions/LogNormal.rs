//! # Log-normal distribution
//!
//! The [Log-normal distribution](https://en.wikipedia.org/wiki/Log-normal_distribution)
//! is the distribution of `exp(X)` where `X` follows a
//! [Normal](crate::distributions::Normal) distribution.
//!
//! Note that `mean` and `sigma` are the parameters of the underlying normal,
//! not the mean and standard deviation of the log-normal itself.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Normal::normal;

/// Returns `exp(normal(mean, sigma))`.
pub fn lognormal<S: UniformSource>(generator: &mut LegacyGenerator<S>, mean: f64, sigma: f64) -> f64 {
    return normal(generator, mean, sigma).exp();
}
