//! # Uniform sources
//!
//! All the samplers of this library are driven by a [UniformSource]: something
//! that can produce independent uniform values in `[0, 1)` and Poisson counts.
//! The library never seeds, splits or otherwise manages the source, it only
//! draws from it.
//!
//! Any [rand] generator can be used through [RandSource]:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use LegacyVariates::{generator::LegacyGenerator, source::RandSource};
//! use LegacyVariates::distributions::Normal::gauss;
//!
//! let source: RandSource<StdRng> = RandSource::new(StdRng::seed_from_u64(42));
//! let mut generator: LegacyGenerator<RandSource<StdRng>> = LegacyGenerator::new(source);
//! let z: f64 = gauss(&mut generator);
//! assert!(z.is_finite());
//! ```

use rand::{Rng, RngCore};

use crate::{configuration::poisson, euclid};

/// The two primitives every sampler is built on.
///
/// Implementors must guarantee:
///  - [UniformSource::next_uniform_double] returns iid values in `[0, 1)`
///     with full double precision.
///  - [UniformSource::next_poisson] returns a non-negative Poisson count with
///     mean `lambda`. `lambda == 0.0` must return `0`.
pub trait UniformSource {
    fn next_uniform_double(&mut self) -> f64;

    fn next_poisson(&mut self, lambda: f64) -> i64;
}

impl<S> UniformSource for &mut S
where
    S: UniformSource + ?Sized,
{
    #[inline]
    fn next_uniform_double(&mut self) -> f64 {
        return (**self).next_uniform_double();
    }

    #[inline]
    fn next_poisson(&mut self, lambda: f64) -> i64 {
        return (**self).next_poisson(lambda);
    }
}

/// A [UniformSource] backed by any [rand] generator.
///
/// Poisson counts are generated from the same uniform stream with the
/// multiplication method (`lambda < 10`) or with PTRS (`10 <= lambda`).
#[derive(Debug, Clone)]
pub struct RandSource<R>
where
    R: RngCore,
{
    rng: R,
}

impl<R> RandSource<R>
where
    R: RngCore,
{
    /// Wraps `rng`. The generator is used as is, it is never reseeded.
    pub const fn new(rng: R) -> RandSource<R> {
        return RandSource { rng };
    }

    pub fn rng_mut(&mut self) -> &mut R {
        return &mut self.rng;
    }

    /// Returns the wrapped generator and drops self.
    pub fn into_inner(self) -> R {
        return self.rng;
    }

    /// Multiplication method: multiply uniforms until the product
    /// falls to `exp(-lambda)` or below.
    fn poisson_mult(&mut self, lambda: f64) -> i64 {
        let enlam: f64 = (-lambda).exp();
        let mut x: i64 = 0;
        let mut prod: f64 = 1.0;

        loop {
            let u: f64 = self.next_uniform_double();
            prod = prod * u;
            if prod > enlam {
                x += 1;
            } else {
                return x;
            }
        }
    }

    /// [PTRS](https://doi.org/10.1016/0167-6687(93)90997-4): transformed
    /// rejection with squeeze. Only valid for `10 <= lambda`.
    fn poisson_ptrs(&mut self, lambda: f64) -> i64 {
        let slam: f64 = lambda.sqrt();
        let loglam: f64 = lambda.ln();
        let b: f64 = poisson::B_OFFSET + poisson::B_SLOPE * slam;
        let a: f64 = poisson::A_OFFSET + poisson::A_SLOPE * b;
        let inv_alpha: f64 = poisson::INV_ALPHA_OFFSET + poisson::INV_ALPHA_SLOPE / (b - 3.4);
        let vr: f64 = poisson::VR_OFFSET - poisson::VR_SLOPE / (b - 2.0);

        loop {
            let u: f64 = self.next_uniform_double() - 0.5;
            let v: f64 = self.next_uniform_double();
            let us: f64 = 0.5 - u.abs();
            let k: i64 = ((2.0 * a / us + b) * u + lambda + 0.43).floor() as i64;

            if poisson::US_ACCEPT <= us && v <= vr {
                return k;
            }

            if k < 0 || (us < poisson::US_REJECT && us < v) {
                continue;
            }

            // ln(v) may be -inf here, the comparison still works
            let lhs: f64 = v.ln() + inv_alpha.ln() - (a / (us * us) + b).ln();
            let rhs: f64 = -lambda + k as f64 * loglam - euclid::ln_gamma(k as f64 + 1.0);
            if lhs <= rhs {
                return k;
            }
        }
    }
}

impl<R> UniformSource for RandSource<R>
where
    R: RngCore,
{
    #[inline]
    fn next_uniform_double(&mut self) -> f64 {
        return self.rng.random::<f64>();
    }

    fn next_poisson(&mut self, lambda: f64) -> i64 {
        if poisson::PTRS_THRESHOLD <= lambda {
            return self.poisson_ptrs(lambda);
        }

        if lambda == 0.0 {
            return 0;
        }

        return self.poisson_mult(lambda);
    }
}
