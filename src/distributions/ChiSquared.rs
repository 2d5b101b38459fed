//! # Chi-squared distribution
//!
//! The [Chi-squared distribution](https://en.wikipedia.org/wiki/Chi-squared_distribution)
//! is a continuous probability distribution. It has a single parameter, the
//! degrees of freedom (`df`). It is a special case of the
//! [Gamma distribution](crate::distributions::Gamma):
//!
//! > `ChiSquared(df) = Gamma(shape = df/2, scale = 2)`
//!
//! This module also contains the
//! [noncentral chi-squared distribution](https://en.wikipedia.org/wiki/Noncentral_chi-squared_distribution),
//! which has an extra noncentrality parameter (`nonc`). With `nonc = 0` both
//! distributions are the same.
//!

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::{Gamma::standard_gamma, Normal::gauss};

/// Returns a sample from a chi-squared distribution with `df` degrees of freedom.
pub fn chisquare<S: UniformSource>(generator: &mut LegacyGenerator<S>, df: f64) -> f64 {
    return 2.0 * standard_gamma(generator, df / 2.0);
}

/// Returns a sample from a noncentral chi-squared distribution.
///
///  - `nonc == 0`: same as [chisquare].
///  - `1 < df`: `chisquare(df - 1) + (gauss() + sqrt(nonc))^2`
///  - `df <= 1`: Poisson mixture. Draws `i ~ Poisson(nonc / 2)` and returns
///     `chisquare(df + 2 * i)`.
///
/// ## Stream stability
///
/// If `nonc` is NaN and `df <= 1`, the result is NaN, but the Poisson count
/// and the chi-squared sample are drawn **before** the check. The amount of
/// randomness consumed is the same as for any other call in that branch,
/// so the values that follow in a seeded stream do not depend on it.
pub fn noncentral_chisquare<S: UniformSource>(
    generator: &mut LegacyGenerator<S>,
    df: f64,
    nonc: f64,
) -> f64 {
    if nonc == 0.0 {
        return chisquare(generator, df);
    }

    if 1.0 < df {
        let chi2: f64 = chisquare(generator, df - 1.0);
        let n: f64 = gauss(generator) + nonc.sqrt();
        return chi2 + n * n;
    }

    let i: i64 = generator.next_poisson(nonc / 2.0);
    let out: f64 = chisquare(generator, df + 2.0 * i as f64);

    // checked after drawing so the stream advances the same way
    if nonc.is_nan() {
        return f64::NAN;
    }

    return out;
}
