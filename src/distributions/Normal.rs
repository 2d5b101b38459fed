//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a continuous probability distribution. It is the root of all the
//! gaussian derived samplers of this library
//! ([LogNormal](crate::distributions::LogNormal), [Wald](crate::distributions::Wald),
//! [Cauchy](crate::distributions::Cauchy), [StudentT](crate::distributions::StudentT)...).
//!
//! It has 2 parameters:
//!  - `loc`: the mean of the distribution
//!  - `scale`: the standard deviation of the distribution
//!
//! Standard normal values are generated with the
//! [polar Box-Muller method](https://en.wikipedia.org/wiki/Marsaglia_polar_method),
//! which produces them in pairs. The second value of each pair is kept in the
//! [GaussState](crate::generator::GaussState) of the handle and returned by
//! the next call.

use crate::{generator::LegacyGenerator, source::UniformSource};

/// Returns a sample from the standard normal distribution (mean `0`, variance `1`).
///
/// If the handle holds a spare value, it is returned (and cleared) without
/// drawing any uniform. Otherwise a new pair is generated: one value is
/// returned and the other is stored for the next call.
pub fn gauss<S: UniformSource>(generator: &mut LegacyGenerator<S>) -> f64 {
    if let Some(spare) = generator.take_gauss() {
        return spare;
    }

    // https://en.wikipedia.org/wiki/Marsaglia_polar_method
    // Accepts with probability pi/4. `r2 == 0` would give `ln(0)`.
    let (x1, x2, r2): (f64, f64, f64) = 'polar: loop {
        let x1: f64 = 2.0 * generator.next_double() - 1.0;
        let x2: f64 = 2.0 * generator.next_double() - 1.0;
        let r2: f64 = x1 * x1 + x2 * x2;

        if r2 < 1.0 && r2 != 0.0 {
            break 'polar (x1, x2, r2);
        }
    };

    let f: f64 = (-2.0 * r2.ln() / r2).sqrt();

    generator.store_gauss(f * x1);
    return f * x2;
}

/// Returns a sample from a normal distribution with mean `loc` and
/// standard deviation `scale`.
///
/// `loc + scale * gauss()`. The parameters are not checked: a negative
/// `scale` mirrors the distribution and NaNs propagate.
pub fn normal<S: UniformSource>(generator: &mut LegacyGenerator<S>, loc: f64, scale: f64) -> f64 {
    return loc + scale * gauss(generator);
}
