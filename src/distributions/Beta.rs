//! # Beta distribution
//!
//! The [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution)
//! is a continuous probability distribution. Its domain is just `[0.0, 1.0]`
//! (which can be useful to model probabilities). It has 2 parameters:
//! `a` (alpha) and `b` (beta).
//!
//! Two methods are used to generate samples:
//!  - If both `a <= 1` and `b <= 1`: [Jöhnk's algorithm](https://en.wikipedia.org/wiki/Beta_distribution#Random_variate_generation).
//!  - Otherwise: `Ga / (Ga + Gb)` where `Ga ~ Gamma(a)` and `Gb ~ Gamma(b)`.
//!

use crate::{generator::LegacyGenerator, source::UniformSource};

use super::Gamma::standard_gamma;

/// Returns a sample from a Beta distribution with parameters `a` and `b`.
///
/// The result is always in `[0, 1]` for positive parameters, even when
/// `U^(1/a)` and `V^(1/b)` both underflow to `0.0` (the ratio is then computed
/// in log-space).
pub fn beta<S: UniformSource>(generator: &mut LegacyGenerator<S>, a: f64, b: f64) -> f64 {
    if a <= 1.0 && b <= 1.0 {
        return johnk(generator, a, b);
    }

    let ga: f64 = standard_gamma(generator, a);
    let gb: f64 = standard_gamma(generator, b);
    return ga / (ga + gb);
}

/// Jöhnk's algorithm, only valid for `a <= 1` and `b <= 1`.
fn johnk<S: UniformSource>(generator: &mut LegacyGenerator<S>, a: f64, b: f64) -> f64 {
    loop {
        let u: f64 = generator.next_double();
        let v: f64 = generator.next_double();
        let x: f64 = u.powf(1.0 / a);
        let y: f64 = v.powf(1.0 / b);

        if x + y <= 1.0 {
            if 0.0 < x + y {
                return x / (x + y);
            }

            // Both underflowed: x / (x + y) == exp(ln_x - ln(exp(ln_x) + exp(ln_y)))
            let mut log_x: f64 = u.ln() / a;
            let mut log_y: f64 = v.ln() / b;
            let log_m: f64 = if log_x > log_y { log_x } else { log_y };
            log_x = log_x - log_m;
            log_y = log_y - log_m;

            return (log_x - (log_x.exp() + log_y.exp()).ln()).exp();
        }
    }
}
