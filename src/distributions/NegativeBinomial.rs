//! # Negative binomial distribution
//!
//! The [Negative binomial distribution](https://en.wikipedia.org/wiki/Negative_binomial_distribution)
//! is a discrete probability distribution that counts the number of failures
//! before `n` successes, with probability of success `p`.
//!
//! It is generated as a [gamma-Poisson mixture](https://en.wikipedia.org/wiki/Negative_binomial_distribution#Gamma%E2%80%93Poisson_mixture):
//! the mean of a Poisson is drawn from a Gamma distribution.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Gamma::gamma;

/// Returns a sample from a negative binomial distribution.
///
/// `n` may be non-integer. The Poisson count is drawn from the source of
/// the handle.
pub fn negative_binomial<S: UniformSource>(generator: &mut LegacyGenerator<S>, n: f64, p: f64) -> i64 {
    let y: f64 = gamma(generator, n, (1.0 - p) / p);
    return generator.next_poisson(y);
}
