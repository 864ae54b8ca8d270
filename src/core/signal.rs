//! Fixed-length sample buffers.
//!
//! This module provides the `Signal` type that flows through the pipeline:
//! the generator produces one, the envelope shaper and normalizer transform it
//! into a new one, and an audio sink consumes it.

use std::ops::Deref;

/// An ordered, fixed-length sequence of samples at an implicit sample rate.
///
/// Samples are timestamped only by their index; the sample rate travels
/// alongside the buffer rather than inside it.
///
/// # Examples
///
/// ```
/// use keysynth::Signal;
///
/// let signal = Signal::from_samples(vec![0.25, -0.5, 0.1]);
/// assert_eq!(signal.len(), 3);
/// assert_eq!(signal.peak(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal(Vec<f64>);

impl Signal {
    /// Wraps an existing sample vector.
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Signal(samples)
    }

    /// Creates a buffer of `len` zero samples.
    pub fn silence(len: usize) -> Self {
        Signal(vec![0.0; len])
    }

    /// Borrows the samples.
    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the signal, returning the sample vector.
    pub fn into_samples(self) -> Vec<f64> {
        self.0
    }

    /// Returns the largest absolute sample value, or 0.0 for an empty signal.
    ///
    /// A NaN sample makes the result NaN so callers can reject it.
    pub fn peak(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |peak, &s| {
            if s.is_nan() || peak.is_nan() {
                f64::NAN
            } else {
                peak.max(s.abs())
            }
        })
    }
}

impl Deref for Signal {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Signal {
    fn from(samples: Vec<f64>) -> Self {
        Signal(samples)
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Signal(iter.into_iter().collect())
    }
}

impl IntoIterator for Signal {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Number of whole samples that fit in `seconds` at `sample_rate`.
///
/// Truncates toward zero, so partial samples at the end are dropped.
/// Negative or NaN durations yield 0.
///
/// # Examples
///
/// ```
/// use keysynth::sample_count;
///
/// assert_eq!(sample_count(44100, 0.5), 22050);
/// assert_eq!(sample_count(10, 0.15), 1);
/// ```
pub fn sample_count(sample_rate: u32, seconds: f64) -> usize {
    let n = (sample_rate as f64 * seconds).floor();
    if n > 0.0 { n as usize } else { 0 }
}
