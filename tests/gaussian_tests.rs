//! Tests for the gaussian based samplers and for the gaussian cache of the handles.
//!
//! The statistical tests use seeded streams, so they are deterministic, but the
//! tolerances are chosen as if they were not (several standard errors).

mod common;

use assert_approx_eq::assert_approx_eq;
use common::*;
use LegacyVariates::{
    distributions::{
        Cauchy::standard_cauchy,
        LogNormal::lognormal,
        Normal::{gauss, normal},
        Wald::wald,
    },
    generator::{GaussState, LegacyGenerator},
    samples::Samples,
};

const N: usize = 100_000;

#[cfg(test)]
mod gauss_tests {
    use super::*;

    #[test]
    fn polar_method_scripted() {
        // (0, 0) -> r2 = 2 (rejected), (0.5, 0.5) -> r2 = 0 (rejected),
        // (0.75, 0.25) -> x1 = 0.5, x2 = -0.5, r2 = 0.5 (accepted)
        let mut generator: LegacyGenerator<Scripted> =
            scripted(&[0.0, 0.0, 0.5, 0.5, 0.75, 0.25]);

        let f: f64 = (-2.0 * 0.5_f64.ln() / 0.5).sqrt();

        let first: f64 = gauss(&mut generator);
        assert_eq!(first, f * -0.5);
        assert_eq!(generator.source().uniform_calls, 6);
        assert_eq!(
            generator.get_state(),
            GaussState {
                has_gauss: true,
                gauss: f * 0.5
            }
        );

        // the spare, without touching the (now empty) script
        let second: f64 = gauss(&mut generator);
        assert_eq!(second, f * 0.5);
        assert_eq!(generator.source().uniform_calls, 6);
        assert_eq!(generator.get_state(), GaussState::empty());
    }

    #[test]
    fn cache_empties_every_other_call() {
        let mut generator = counting(17);

        for _ in 0..1000 {
            let before: usize = generator.source().uniform_calls;
            let _ = gauss(&mut generator);
            let drawn: usize = generator.source().uniform_calls - before;
            // a fresh polar draw: an even, non-zero amount of uniforms
            assert!(drawn >= 2 && drawn % 2 == 0, "drawn: {}", drawn);
            assert!(generator.get_state().has_gauss);

            let before: usize = generator.source().uniform_calls;
            let _ = gauss(&mut generator);
            assert_eq!(generator.source().uniform_calls, before);
            assert!(!generator.get_state().has_gauss);
            assert_eq!(generator.get_state().gauss, 0.0);
        }
    }

    #[test]
    fn standard_normal_moments() {
        let mut generator: SeededGenerator = seeded(1);
        let mut samples: Samples = collect(N, || gauss(&mut generator));

        assert_close("mean", samples.mean().unwrap(), 0.0, 0.02);
        assert_close("variance", samples.variance().unwrap(), 1.0, 0.03);
        // about 68.27% of the mass inside [-1, 1]
        let inside: usize = samples
            .peek_data()
            .iter()
            .filter(|x: &&f64| x.abs() <= 1.0)
            .count();
        assert_close("mass", inside as f64 / N as f64, 0.6827, 0.01);
    }

    #[test]
    fn snapshot_reproduces_stream() {
        let mut generator: SeededGenerator = seeded(99);
        let _ = gauss(&mut generator);

        // a spare is cached now
        let snapshot: GaussState = generator.get_state();
        assert!(snapshot.has_gauss);
        let mut twin: SeededGenerator = LegacyGenerator::new(generator.source().clone());
        twin.set_state(snapshot).unwrap();

        for _ in 0..100 {
            assert_eq!(gauss(&mut generator), gauss(&mut twin));
        }
    }

    #[test]
    fn independent_handles_do_not_share_cache() {
        let mut a: SeededGenerator = seeded(5);
        let mut b: SeededGenerator = seeded(5);

        let _ = gauss(&mut a);
        assert!(a.get_state().has_gauss);
        assert!(!b.get_state().has_gauss);

        // b produces the first value of the pair, a the second
        let a_second: f64 = gauss(&mut a);
        let b_first: f64 = gauss(&mut b);
        let b_second: f64 = gauss(&mut b);
        assert_eq!(a_second, b_second);
        assert_ne!(b_first, b_second);
    }

    #[test]
    fn reset_forces_fresh_draw() {
        let mut generator = counting(3);
        let _ = gauss(&mut generator);
        generator.reset_gauss();

        let before: usize = generator.source().uniform_calls;
        let _ = gauss(&mut generator);
        assert!(generator.source().uniform_calls >= before + 2);
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;

    #[test]
    fn normal_is_affine_gauss() {
        let mut a: SeededGenerator = seeded(21);
        let mut b: SeededGenerator = seeded(21);

        for _ in 0..1000 {
            let z: f64 = gauss(&mut a);
            assert_eq!(normal(&mut b, 3.0, 2.0), 3.0 + 2.0 * z);
        }
    }

    #[test]
    fn normal_moments() {
        let mut generator: SeededGenerator = seeded(22);
        let mut samples: Samples = collect(N, || normal(&mut generator, -4.0, 0.5));
        assert_close("mean", samples.mean().unwrap(), -4.0, 0.01);
        assert_close("variance", samples.variance().unwrap(), 0.25, 0.008);
    }

    #[test]
    fn nan_parameters_propagate() {
        let mut generator: SeededGenerator = seeded(23);
        assert!(normal(&mut generator, f64::NAN, 1.0).is_nan());
        assert!(normal(&mut generator, 0.0, f64::NAN).is_nan());
    }

    #[test]
    fn lognormal_is_exp_normal() {
        let mut a: SeededGenerator = seeded(24);
        let mut b: SeededGenerator = seeded(24);
        for _ in 0..1000 {
            let x: f64 = normal(&mut a, 0.3, 0.7);
            assert_eq!(lognormal(&mut b, 0.3, 0.7), x.exp());
        }
    }

    #[test]
    fn lognormal_moments() {
        let mut generator: SeededGenerator = seeded(25);
        let mut samples: Samples = collect(N, || lognormal(&mut generator, 0.0, 0.5));
        // E = exp(sigma^2 / 2)
        assert_close("mean", samples.mean().unwrap(), 0.125_f64.exp(), 0.01);
        assert!(0.0 < samples.minimum().unwrap());
    }
}

#[cfg(test)]
mod cauchy_tests {
    use super::*;

    #[test]
    fn cauchy_is_ratio_of_two_gauss_calls() {
        let mut a: SeededGenerator = seeded(31);
        let mut b: SeededGenerator = seeded(31);

        for _ in 0..1000 {
            let num: f64 = gauss(&mut a);
            let den: f64 = gauss(&mut a);
            assert_eq!(standard_cauchy(&mut b), num / den);
        }
    }

    #[test]
    fn cauchy_uses_pending_spare() {
        let mut generator: SeededGenerator = seeded(32);
        let _ = gauss(&mut generator);
        let spare: f64 = generator.get_state().gauss;

        let mut twin: SeededGenerator = LegacyGenerator::new(generator.source().clone());
        let fresh: f64 = gauss(&mut twin);

        // numerator = spare, denominator = first value of a new pair
        assert_eq!(standard_cauchy(&mut generator), spare / fresh);
        assert!(generator.get_state().has_gauss);
    }

    #[test]
    fn cauchy_quartiles() {
        let mut generator: SeededGenerator = seeded(33);
        let mut samples: Samples = collect(N, || standard_cauchy(&mut generator));
        assert_close("median", samples.quantile(0.5).unwrap(), 0.0, 0.025);
        assert_close("q1", samples.quantile(0.25).unwrap(), -1.0, 0.04);
        assert_close("q3", samples.quantile(0.75).unwrap(), 1.0, 0.04);
    }
}

#[cfg(test)]
mod wald_tests {
    use super::*;

    #[test]
    fn wald_mean() {
        let mut generator: SeededGenerator = seeded(41);
        let mut samples: Samples = collect(N, || wald(&mut generator, 1.0, 1.0));
        assert_close("mean", samples.mean().unwrap(), 1.0, 0.02);
        // variance = mean^3 / scale
        assert_close("variance", samples.variance().unwrap(), 1.0, 0.1);
        assert!(0.0 < samples.minimum().unwrap());
    }

    #[test]
    fn wald_other_parameters() {
        let mut generator: SeededGenerator = seeded(42);
        let mut samples: Samples = collect(N, || wald(&mut generator, 3.0, 2.0));
        assert_close("mean", samples.mean().unwrap(), 3.0, 0.1);
    }

    #[test]
    fn wald_draws_one_gauss_and_one_uniform() {
        let mut generator = counting(43);
        // prime the cache so the normal comes from the spare
        let _ = gauss(&mut generator);
        let before: usize = generator.source().uniform_calls;
        let x: f64 = wald(&mut generator, 2.0, 0.5);
        assert_eq!(generator.source().uniform_calls, before + 1);
        assert!(0.0 < x);
    }

    #[test]
    fn wald_scripted() {
        // gauss: (0.75, 0.25) -> -0.5 * f, then the uniform 0.0 accepts `x`
        let mut generator: LegacyGenerator<Scripted> = scripted(&[0.75, 0.25, 0.0]);
        let f: f64 = (-2.0 * 0.5_f64.ln() / 0.5).sqrt();
        let z: f64 = f * -0.5;

        let mean: f64 = 1.5;
        let scale: f64 = 2.0;
        let mu_2l: f64 = mean / (2.0 * scale);
        let y: f64 = mean * z * z;
        let expected: f64 = mean + mu_2l * (y - (4.0 * scale * y + y * y).sqrt());

        assert_approx_eq!(wald(&mut generator, mean, scale), expected, 1.0e-15);
        assert_eq!(generator.source().remaining_uniforms(), 0);
    }
}
