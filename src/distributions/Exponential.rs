//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! A poission event does not have memory. Mathematically, if `e` follows
//! an Exponential distribution and `t_1 < t_2`
//! `P(t_1 < e) = P(t_1 < e | t_2 < e)`
//!
//! Here the distribution is parametrized by its `scale` (`1/lambda`).
//!
//! The standard exponential is also the base of the [Gamma](crate::distributions::Gamma),
//! [Pareto](crate::distributions::Pareto), [Weibull](crate::distributions::Weibull)
//! and [Power](crate::distributions::Power) samplers.

use crate::{generator::LegacyGenerator, source::UniformSource};

/// Returns a sample from the standard exponential distribution (`scale = 1`).
///
/// Uses the [inverse transform](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
/// `-ln(1 - U)`. Since `U` is in `[0, 1)`, `1 - U` is in `(0, 1]` and the
/// result is always in `[0, +inf)`. Exactly one uniform is consumed.
#[inline]
pub fn standard_exponential<S: UniformSource>(generator: &mut LegacyGenerator<S>) -> f64 {
    return -(1.0 - generator.next_double()).ln();
}

/// Returns `scale * standard_exponential()`.
pub fn exponential<S: UniformSource>(generator: &mut LegacyGenerator<S>, scale: f64) -> f64 {
    return scale * standard_exponential(generator);
}
