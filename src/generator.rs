//! # Generator handle
//!
//! A [LegacyGenerator] is the handle every sampler in
//! [distributions](crate::distributions) takes. It bundles:
//!
//!  - The [UniformSource] (owned or borrowed) the variates are drawn from.
//!  - The [GaussState]: the spare standard normal left over by the polar
//!     Box-Muller method.
//!
//! The spare belongs to the handle, not to the library. Two handles never
//! share it, so independent streams can coexist (one handle per thread).
//! Sharing a handle between threads requires external synchronization.

use crate::{errors::VariateError, source::UniformSource};

/// The cached gaussian of a [LegacyGenerator].
///
/// `has_gauss == true` iff `gauss` holds a standard normal produced as
/// the second output of a polar Box-Muller pair that has not been returned yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaussState {
    pub has_gauss: bool,
    pub gauss: f64,
}

impl GaussState {
    /// A state without spare value: `(false, 0.0)`.
    pub const fn empty() -> GaussState {
        return GaussState {
            has_gauss: false,
            gauss: 0.0,
        };
    }
}

/// A handle that owns the uniform source and the gaussian cache of one stream.
#[derive(Debug, Clone)]
pub struct LegacyGenerator<S>
where
    S: UniformSource,
{
    source: S,
    state: GaussState,
}

impl<S> LegacyGenerator<S>
where
    S: UniformSource,
{
    /// Creates a new handle with an empty gaussian cache.
    pub const fn new(source: S) -> LegacyGenerator<S> {
        return LegacyGenerator {
            source,
            state: GaussState::empty(),
        };
    }

    /// Draws a uniform value in `[0, 1)` from the underlying source.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        return self.source.next_uniform_double();
    }

    /// Draws a Poisson count with mean `lambda` from the underlying source.
    #[inline]
    pub fn next_poisson(&mut self, lambda: f64) -> i64 {
        return self.source.next_poisson(lambda);
    }

    /// Returns a copy of the gaussian cache.
    ///
    /// Together with the state of the source, this is everything needed to
    /// reproduce the stream later with [LegacyGenerator::set_state].
    pub const fn get_state(&self) -> GaussState {
        return self.state;
    }

    /// Restores a gaussian cache previously obtained with [LegacyGenerator::get_state].
    ///
    /// Returns [VariateError::InvalidState] if `state.has_gauss` is `true` and
    /// `state.gauss` is not finite. In that case the current cache is kept.
    /// A state without spare is stored as [GaussState::empty].
    pub fn set_state(&mut self, state: GaussState) -> Result<(), VariateError> {
        if state.has_gauss && !state.gauss.is_finite() {
            tracing::debug!(gauss = state.gauss, "rejected gaussian snapshot");
            return Err(VariateError::InvalidState);
        }

        self.state = if state.has_gauss {
            state
        } else {
            GaussState::empty()
        };
        tracing::debug!(
            has_gauss = self.state.has_gauss,
            gauss = self.state.gauss,
            "restored gaussian snapshot"
        );
        return Ok(());
    }

    /// Drops the cached gaussian (if any). The next call to
    /// [gauss](crate::distributions::Normal::gauss) will do a fresh polar draw.
    pub fn reset_gauss(&mut self) {
        self.state = GaussState::empty();
    }

    /// Takes the cached gaussian, leaving the cache empty.
    #[inline]
    pub(crate) fn take_gauss(&mut self) -> Option<f64> {
        if !self.state.has_gauss {
            return None;
        }

        let spare: f64 = self.state.gauss;
        self.state = GaussState::empty();
        return Some(spare);
    }

    /// Stores a spare gaussian for the next call.
    #[inline]
    pub(crate) fn store_gauss(&mut self, spare: f64) {
        self.state = GaussState {
            has_gauss: true,
            gauss: spare,
        };
    }

    pub const fn source(&self) -> &S {
        return &self.source;
    }

    pub fn source_mut(&mut self) -> &mut S {
        return &mut self.source;
    }

    /// Returns the underlying source and drops self (and the cached gaussian).
    pub fn into_source(self) -> S {
        return self.source;
    }
}

/// Creates a [LegacyGenerator] with a builder.
///
/// ## Inputs:
///
/// 1. `source`: the [UniformSource] the handle will draw from.
/// 2. `state`: (optional) the initial gaussian cache.
///      - The default is an empty cache.
///
/// ## Results
///
/// Returns [VariateError::InvalidState] if `state` is not consistent
/// (see [LegacyGenerator::set_state]).
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use LegacyVariates::generator::{legacy_generator, GaussState, LegacyGenerator};
/// use LegacyVariates::source::RandSource;
///
/// let generator: LegacyGenerator<RandSource<StdRng>> = legacy_generator()
///     .source(RandSource::new(StdRng::seed_from_u64(5)))
///     .state(GaussState { has_gauss: true, gauss: 0.25 })
///     .call()
///     .unwrap();
/// assert!(generator.get_state().has_gauss);
/// ```
#[bon::builder]
pub fn legacy_generator<S: UniformSource>(
    source: S,
    #[builder(default)] state: GaussState,
) -> Result<LegacyGenerator<S>, VariateError> {
    let mut generator: LegacyGenerator<S> = LegacyGenerator::new(source);
    generator.set_state(state)?;
    tracing::trace!(has_gauss = state.has_gauss, "created generator handle");
    return Ok(generator);
}
