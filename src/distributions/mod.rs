// One file per distribution. Every sampler is a free function taking the
// generator handle first.

// Gaussian based
pub mod Cauchy;
pub mod LogNormal;
pub mod Normal;
pub mod Wald;

// Exponential based
pub mod Exponential;
pub mod Pareto;
pub mod Power;
pub mod Weibull;

// Gamma based
pub mod Beta;
pub mod ChiSquared;
pub mod F;
pub mod Gamma;
pub mod StudentT;

// Discrete
pub mod NegativeBinomial;
