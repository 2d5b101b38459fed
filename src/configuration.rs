//! This file contains the constants used throughout the library.
//!
//! Unlike a tolerance or a precision, none of these values are a free choice:
//! changing any of them changes the stream of variates produced for a given
//! uniform source, so they are fixed.

/// Constants of the [standard gamma](crate::distributions::Gamma::standard_gamma)
/// sampler.
pub mod gamma {

    /// Marsaglia-Tsang uses `b = shape - 1/3`.
    pub const ONE_THIRD: f64 = 1.0 / 3.0;

    /// Coefficient of the squeeze test `U < 1 - 0.0331 * X^4`. When it passes
    /// the logarithm does not need to be evaluated.
    pub const SQUEEZE: f64 = 0.0331;
}

/// Constants of the reference Poisson sampler of [RandSource](crate::source::RandSource).
///
/// For `lambda < PTRS_THRESHOLD` the multiplication method is used, otherwise
/// [PTRS](https://doi.org/10.1016/0167-6687(93)90997-4) (transformed rejection
/// with squeeze, W. Hörmann 1993).
pub mod poisson {

    /// Smallest `lambda` sampled with PTRS.
    pub const PTRS_THRESHOLD: f64 = 10.0;

    /// `b = B_OFFSET + B_SLOPE * sqrt(lambda)`
    pub const B_OFFSET: f64 = 0.931;
    pub const B_SLOPE: f64 = 2.53;

    /// `a = A_OFFSET + A_SLOPE * b`
    pub const A_OFFSET: f64 = -0.059;
    pub const A_SLOPE: f64 = 0.02483;

    /// `inv_alpha = INV_ALPHA_OFFSET + INV_ALPHA_SLOPE / (b - 3.4)`
    pub const INV_ALPHA_OFFSET: f64 = 1.1239;
    pub const INV_ALPHA_SLOPE: f64 = 1.1328;

    /// `v_r = VR_OFFSET - VR_SLOPE / (b - 2)`
    pub const VR_OFFSET: f64 = 0.9277;
    pub const VR_SLOPE: f64 = 3.6224;

    /// Fast acceptance region: `0.07 <= us`.
    pub const US_ACCEPT: f64 = 0.07;
    /// Fast rejection region: `us < 0.013`.
    pub const US_REJECT: f64 = 0.013;
}

/// Coefficients of the Stirling series used by [ln_gamma](crate::euclid::ln_gamma).
///
/// `a[k]` multiplies `1/x^(2k + 1)`.
pub static STIRLING_COEFFICIENTS: [f64; 10] = [
    8.333333333333333e-02,
    -2.777777777777778e-03,
    7.936507936507937e-04,
    -5.952380952380952e-04,
    8.417508417508418e-04,
    -1.917526917526918e-03,
    6.410256410256410e-03,
    -2.955065359477124e-02,
    1.796443723688307e-01,
    -1.39243221690590e+00,
];

/// `ln(2 * pi)`
pub const LN_2_PI: f64 = 1.8378770664093453e+00;
