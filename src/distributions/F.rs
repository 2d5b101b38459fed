//! # F distribution
//!
//! The [F distribution](https://en.wikipedia.org/wiki/F-distribution)
//! is a continuous probability distribution. It is the ratio of 2
//! [Chi-squared](crate::distributions::ChiSquared) variables, each divided by
//! its degrees of freedom:
//!
//! > `F(dfnum, dfden) = (X_1 / dfnum) / (X_2 / dfden)`
//!
//! The numerator is always drawn before the denominator.
//!

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::ChiSquared::{chisquare, noncentral_chisquare};

/// Returns a sample from an F distribution with `dfnum` and `dfden`
/// degrees of freedom.
pub fn f<S: UniformSource>(generator: &mut LegacyGenerator<S>, dfnum: f64, dfden: f64) -> f64 {
    let num: f64 = chisquare(generator, dfnum) * dfden;
    let den: f64 = chisquare(generator, dfden) * dfnum;
    return num / den;
}

/// Returns a sample from a
/// [noncentral F distribution](https://en.wikipedia.org/wiki/Noncentral_F-distribution).
/// Only the numerator is noncentral.
pub fn noncentral_f<S: UniformSource>(
    generator: &mut LegacyGenerator<S>,
    dfnum: f64,
    dfden: f64,
    nonc: f64,
) -> f64 {
    let t: f64 = noncentral_chisquare(generator, dfnum, nonc) * dfden;
    return t / (chisquare(generator, dfden) * dfnum);
}
