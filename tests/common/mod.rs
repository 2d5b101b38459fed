//! Helpers shared by the integration tests.
//!
//!  - [seeded]: a reproducible handle backed by [StdRng].
//!  - [Counting]: wraps a source, counts the calls to both primitives and can
//!     override the Poisson counts with a script.
//!  - [Scripted]: replays a fixed list of uniforms. Panics when it runs out,
//!     so a test also checks that no extra value is drawn.

#![allow(dead_code)]

use std::collections::VecDeque;

use rand::{SeedableRng, rngs::StdRng};
use LegacyVariates::{
    generator::LegacyGenerator,
    samples::Samples,
    source::{RandSource, UniformSource},
};

pub type SeededGenerator = LegacyGenerator<RandSource<StdRng>>;

pub fn seeded(seed: u64) -> SeededGenerator {
    return LegacyGenerator::new(RandSource::new(StdRng::seed_from_u64(seed)));
}

pub fn counting(seed: u64) -> LegacyGenerator<Counting<RandSource<StdRng>>> {
    let source: RandSource<StdRng> = RandSource::new(StdRng::seed_from_u64(seed));
    return LegacyGenerator::new(Counting::new(source));
}

pub fn scripted(uniforms: &[f64]) -> LegacyGenerator<Scripted> {
    return LegacyGenerator::new(Scripted::new(uniforms, &[]));
}

/// Draws `n` values and wraps them in [Samples].
pub fn collect<F>(n: usize, draw: F) -> Samples
where
    F: FnMut() -> f64,
{
    return Samples::from_draws(n, draw).expect("All the draws should be finite. ");
}

/// Asserts `|x - expected| < tolerance` with a readable message.
#[inline]
pub fn assert_close(name: &str, x: f64, expected: f64, tolerance: f64) {
    assert!(
        (x - expected).abs() < tolerance,
        "{}: got {:?}, expected {:?} (tolerance {:?}, real diff {:?})",
        name,
        x,
        expected,
        tolerance,
        (x - expected).abs()
    );
}

pub struct Counting<S>
where
    S: UniformSource,
{
    inner: S,
    pub uniform_calls: usize,
    pub poisson_calls: usize,
    pub poisson_script: VecDeque<i64>,
}

impl<S> Counting<S>
where
    S: UniformSource,
{
    pub fn new(inner: S) -> Counting<S> {
        return Counting {
            inner,
            uniform_calls: 0,
            poisson_calls: 0,
            poisson_script: VecDeque::new(),
        };
    }

    pub fn script_poisson(&mut self, values: &[i64]) {
        self.poisson_script.extend(values.iter().copied());
    }
}

impl<S> UniformSource for Counting<S>
where
    S: UniformSource,
{
    fn next_uniform_double(&mut self) -> f64 {
        self.uniform_calls += 1;
        return self.inner.next_uniform_double();
    }

    fn next_poisson(&mut self, lambda: f64) -> i64 {
        self.poisson_calls += 1;
        return match self.poisson_script.pop_front() {
            Some(k) => k,
            None => self.inner.next_poisson(lambda),
        };
    }
}

pub struct Scripted {
    uniforms: VecDeque<f64>,
    poissons: VecDeque<i64>,
    pub uniform_calls: usize,
    pub poisson_calls: usize,
}

impl Scripted {
    pub fn new(uniforms: &[f64], poissons: &[i64]) -> Scripted {
        return Scripted {
            uniforms: uniforms.iter().copied().collect(),
            poissons: poissons.iter().copied().collect(),
            uniform_calls: 0,
            poisson_calls: 0,
        };
    }

    pub fn remaining_uniforms(&self) -> usize {
        return self.uniforms.len();
    }
}

impl UniformSource for Scripted {
    fn next_uniform_double(&mut self) -> f64 {
        self.uniform_calls += 1;
        return self
            .uniforms
            .pop_front()
            .expect("The script ran out of uniforms. ");
    }

    fn next_poisson(&mut self, _lambda: f64) -> i64 {
        self.poisson_calls += 1;
        return self
            .poissons
            .pop_front()
            .expect("The script ran out of Poisson values. ");
    }
}
