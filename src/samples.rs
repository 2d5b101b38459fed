//! # Samples
//!
//! [Samples] stores a collection of generated values and computes common
//! statistics over them (mean, variance, extremes, quantiles). It is the tool
//! used to check that a stream of variates looks like its target distribution.
//!
//! The computed statistics are cached in [SampleProperties], so asking twice
//! for the same value is constant time.

use crate::errors::VariateError;

pub struct Samples {
    // only finite values
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleProperties {
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
    /// The minimum value of the sample
    pub minimum: Option<f64>,
    /// Determines if the data is sorted
    pub is_sorted: bool,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs ([VariateError::NanErr]) or
    /// infinities ([VariateError::InvalidNumber]).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, VariateError> {
        check_finite(data)?;

        return Ok(Samples {
            data: Vec::from(data),
            properties: SampleProperties::empty(),
        });
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// Same conditions as [Samples::new].
    pub fn new_move(data: Vec<f64>) -> Result<Samples, VariateError> {
        check_finite(&data)?;

        return Ok(Samples {
            data,
            properties: SampleProperties::empty(),
        });
    }

    /// Calls `draw` `n` times and stores the results.
    ///
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use LegacyVariates::{generator::LegacyGenerator, samples::Samples, source::RandSource};
    /// use LegacyVariates::distributions::Exponential::standard_exponential;
    ///
    /// let mut generator = LegacyGenerator::new(RandSource::new(StdRng::seed_from_u64(1)));
    /// let mut samples: Samples =
    ///     Samples::from_draws(1000, || standard_exponential(&mut generator)).unwrap();
    /// assert!(0.0 <= samples.minimum().unwrap());
    /// ```
    pub fn from_draws<F>(n: usize, mut draw: F) -> Result<Samples, VariateError>
    where
        F: FnMut() -> f64,
    {
        let mut data: Vec<f64> = Vec::new();
        data.reserve_exact(n);
        for _ in 0..n {
            data.push(draw());
        }

        return Samples::new_move(data);
    }

    /// Gives a reference to the contained data.
    ///
    /// Note that the data may be sorted or not (depending on
    /// calls to other methods).
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Returns a reference to the internal field that contains
    /// all computed statistics ([SampleProperties]).
    pub fn peek_properties(&self) -> &SampleProperties {
        return &self.properties;
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the mean.
    pub fn mean(&mut self) -> Option<f64> {
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let mut mean: f64 = 0.0;
        for &s in &self.data {
            mean += s;
        }
        mean = mean / n as f64;

        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Computes the unbiased sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the variance
    /// (0 or 1 samples only).
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            return None;
        }

        // there is more than 1 sample, so the mean exists
        let mean: f64 = self.mean()?;
        let mut variance: f64 = 0.0;

        // two passes, the centered sum is more stable than `E[x^2] - E[x]^2`
        for &s in &self.data {
            let centered: f64 = s - mean;
            variance += centered * centered;
        }
        variance = variance / (n as f64 - 1.0);

        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// Returns the minimum among the data.
    ///
    /// Returns `None` if there are 0 samples. If the data is already sorted,
    /// returns in constant time. Otherwise it's `O(n)` (does not sort the data).
    pub fn minimum(&mut self) -> Option<f64> {
        if self.properties.minimum.is_some() {
            return self.properties.minimum;
        }

        let first: f64 = *self.data.first()?;
        let min: f64 = if self.properties.is_sorted {
            first
        } else {
            self.data.iter().copied().fold(first, f64::min)
        };

        self.properties.minimum = Some(min);
        return Some(min);
    }

    /// Returns the maximum among the data.
    ///
    /// Returns `None` if there are 0 samples. If the data is already sorted,
    /// returns in constant time. Otherwise it's `O(n)` (does not sort the data).
    pub fn maximum(&mut self) -> Option<f64> {
        if self.properties.maximum.is_some() {
            return self.properties.maximum;
        }

        let last: f64 = *self.data.last()?;
        let max: f64 = if self.properties.is_sorted {
            last
        } else {
            self.data.iter().copied().fold(last, f64::max)
        };

        self.properties.maximum = Some(max);
        return Some(max);
    }

    /// Forces to sort the internal data if it is not sorted already.
    #[inline]
    pub fn sort_data(&mut self) {
        if self.properties.is_sorted {
            return;
        }

        // all values are finite, `total_cmp` agrees with `<`
        self.data.sort_unstable_by(f64::total_cmp);

        self.properties.is_sorted = true;
    }

    /// Returns the quantile `q` with the
    /// [nearest rank method](https://en.wikipedia.org/wiki/Percentile#The_nearest-rank_method).
    ///
    /// Sorts the data if it is not sorted already. Returns `None` if data
    /// is empty or `q` is NaN. `q` is clamped to `[0, 1]`.
    pub fn quantile(&mut self, q: f64) -> Option<f64> {
        if q.is_nan() {
            return None;
        }

        self.sort_data();

        let n: usize = self.data.len();
        if n == 0 {
            return None;
        }

        let q: f64 = q.clamp(0.0, 1.0);
        let rank: usize = ((n as f64) * q).ceil() as usize;
        let index: usize = rank.saturating_sub(1).min(n - 1);

        return self.data.get(index).copied();
    }
}

impl SampleProperties {
    pub const fn empty() -> SampleProperties {
        // is_sorted: data MAY be actually sorted but we cannot assume it is.
        SampleProperties {
            mean: None,
            variance: None,
            maximum: None,
            minimum: None,
            is_sorted: false,
        }
    }
}

fn check_finite(data: &[f64]) -> Result<(), VariateError> {
    if data.iter().any(|f: &f64| f.is_nan()) {
        return Err(VariateError::NanErr);
    }

    if data.iter().any(|f: &f64| f.is_infinite()) {
        return Err(VariateError::InvalidNumber);
    }

    return Ok(());
}
