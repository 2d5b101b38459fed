//! # Pareto distribution
//!
//! The [Pareto distribution](https://en.wikipedia.org/wiki/Pareto_distribution)
//! (Lomax or Pareto II form). The returned values are shifted so that the
//! support starts at `0`: adding `1` and multiplying by `x_m` gives the
//! classical Pareto with minimum `x_m`.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Exponential::standard_exponential;

/// Returns `exp(E / a) - 1` where `E` is a standard exponential.
///
/// `a == 0.0` is not guarded: the division by zero propagates as `+inf`.
pub fn pareto<S: UniformSource>(generator: &mut LegacyGenerator<S>, a: f64) -> f64 {
    return (standard_exponential(generator) / a).exp() - 1.0;
}
