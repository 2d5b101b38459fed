//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous probability distribution.
//!
//! It has 2 parameters:
//!
//! 1. `shape` (also known as `alpha` or `k`)
//! 2. `scale` (also known as `theta`)
//!
//! The rate parametrization uses `lambda = 1/theta`, but it is not used here.
//!
//! `shape` must be finite and non-negative. This is not checked: validating
//! the parameters is the responsibility of the caller.
//!

use crate::{configuration, generator::LegacyGenerator, source::UniformSource};

use super::{Exponential::standard_exponential, Normal::gauss};

/// Returns a sample from a Gamma distribution with the given `shape` and `scale = 1`.
///
///  - `shape == 1.0`: a standard exponential.
///  - `shape == 0.0`: always `0.0` (degenerate distribution). Consumes nothing.
///  - `0.0 < shape < 1.0`: Ahrens-Dieter GS algorithm.
///  - `1.0 < shape`: Marsaglia-Tsang with squeeze.
///
/// The rejection loops have no iteration limit. They terminate with probability 1.
pub fn standard_gamma<S: UniformSource>(generator: &mut LegacyGenerator<S>, shape: f64) -> f64 {
    // https://en.wikipedia.org/wiki/Gamma_distribution#Random_variate_generation

    if shape == 1.0 {
        return standard_exponential(generator);
    }

    if shape == 0.0 {
        return 0.0;
    }

    if shape < 1.0 {
        let inv_shape: f64 = 1.0 / shape;
        loop {
            let u: f64 = generator.next_double();
            let v: f64 = standard_exponential(generator);

            if u <= 1.0 - shape {
                let x: f64 = u.powf(inv_shape);
                if x <= v {
                    return x;
                }
            } else {
                let y: f64 = -((1.0 - u) / shape).ln();
                let x: f64 = (1.0 - shape + shape * y).powf(inv_shape);
                if x <= v + y {
                    return x;
                }
            }
        }
    }

    // https://doi.org/10.1145/358407.358414 (Marsaglia & Tsang, 2000)
    let b: f64 = shape - configuration::gamma::ONE_THIRD;
    let c: f64 = 1.0 / (9.0 * b).sqrt();

    loop {
        let mut x: f64;
        let mut v: f64;
        's: loop {
            x = gauss(generator);
            v = 1.0 + c * x;
            if v <= 0.0 {
                continue 's;
            }
            break 's;
        }

        v = v * v * v;
        let u: f64 = generator.next_double();

        let x_sq: f64 = x * x;
        if u < 1.0 - configuration::gamma::SQUEEZE * x_sq * x_sq {
            return b * v;
        }

        if u.ln() < 0.5 * x_sq + b * (1.0 - v + v.ln()) {
            return b * v;
        }
    }
}

/// Returns `scale * standard_gamma(shape)`.
pub fn gamma<S: UniformSource>(generator: &mut LegacyGenerator<S>, shape: f64, scale: f64) -> f64 {
    return scale * standard_gamma(generator, shape);
}
