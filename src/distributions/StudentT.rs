//! # Student T
//!
//! The [Student T distribution](https://en.wikipedia.org/wiki/Student%27s_t-distribution)
//! is a continuous probability distribution.
//!
//! ### Parameters
//!
//! It has a single parameter, the degrees of freedom (`df`, usually denoted
//! by the greek letter `nu`).
//!  - If `nu = 1` then the distribution is a [Cauchy distribution](crate::distributions::Cauchy).
//!  - If `nu` diverges to infinity, the distribution becomes a [standard normal distribution](crate::distributions::Normal).
//!
//! If `Z` is a standard normal and `V` a chi-squared with `nu` degrees of freedom,
//! `Z * sqrt(nu / V)` is a Student T with `nu` degrees of freedom.

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::{Gamma::standard_gamma, Normal::gauss};

/// Returns a sample from a Student T distribution with `df` degrees of freedom.
///
/// `sqrt(df/2) * Z / sqrt(G)` where `G ~ Gamma(df/2)` (`2 * G` is the chi-squared).
/// The normal is drawn first.
pub fn standard_t<S: UniformSource>(generator: &mut LegacyGenerator<S>, df: f64) -> f64 {
    let num: f64 = gauss(generator);
    let denom: f64 = standard_gamma(generator, df / 2.0);
    return (df / 2.0).sqrt() * num / denom.sqrt();
}
