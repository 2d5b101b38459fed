#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
// ^Disable warning "crate `LegacyVariates` should have a snake case name convert the identifier to snake case: `legacy_variates`"
// The distribution modules are also named after the distribution (`Gamma`, `ChiSquared`...).
// The rest of the names will follow the snake_case convention.

//! # Legacy Variates
//!
//! This library generates samples (variates) from common probability
//! distributions. Given a source of uniform `[0, 1)` doubles, every sampler
//! produces exactly the same stream as the classic "legacy" algorithms
//! (polar Box-Muller normals, Marsaglia-Tsang gammas, Jöhnk betas...), so
//! seeded simulations stay reproducible.
//!
//! ## Handles
//!
//! All samplers take a [LegacyGenerator](generator::LegacyGenerator): a handle
//! that owns a [UniformSource](source::UniformSource) and the cached spare
//! normal of the polar method. Use one handle per stream (and per thread).
//! Any [rand] generator can be used as a source through
//! [RandSource](source::RandSource).
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use LegacyVariates::{generator::LegacyGenerator, source::RandSource};
//! use LegacyVariates::distributions::{Beta::beta, Gamma::gamma};
//!
//! let mut generator = LegacyGenerator::new(RandSource::new(StdRng::seed_from_u64(1234)));
//! let g: f64 = gamma(&mut generator, 2.5, 3.0);
//! let b: f64 = beta(&mut generator, 0.5, 0.5);
//! assert!(0.0 <= g);
//! assert!(0.0 <= b && b <= 1.0);
//! ```
//!
//! The parameters are **not** validated: invalid values propagate as NaN or
//! infinities following IEEE-754. Validation is the responsibility of the caller.
//!
//! ## Distributions
//!
//! The dependency chain (leaves first) is:
//!
//!  - Uniform: [LegacyGenerator::next_double](generator::LegacyGenerator::next_double)
//!  - [Normal](distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!     -> [LogNormal](distributions::LogNormal), [Wald](distributions::Wald), [Cauchy](distributions::Cauchy)
//!  - [Exponential](distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!     -> [Pareto](distributions::Pareto), [Weibull](distributions::Weibull), [Power](distributions::Power)
//!  - [Gamma](distributions::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!     -> [Beta](distributions::Beta), [NegativeBinomial](distributions::NegativeBinomial)
//!  - [ChiSquared](distributions::ChiSquared) (central and noncentral)
//!     -> [F](distributions::F) (central and noncentral), [StudentT](distributions::StudentT)
//!
//! ## Checking streams
//!
//! Generated values can be collected in [Samples](samples::Samples) to compute
//! their mean, variance, extremes and quantiles.
//!
//! ***
//!

pub mod configuration;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod generator;
pub mod samples;
pub mod source;
