//! Core trait definitions for periodic waveforms.

use crate::Signal;

/// Common interface for all periodic waveform shapes.
///
/// A waveform is a pure function of phase, where phase is frequency times
/// elapsed time in seconds. One period spans one unit of phase.
pub trait Waveform {
    /// Evaluates the waveform at the given phase.
    ///
    /// # Arguments
    ///
    /// * `phase` - Cycles elapsed since time zero (not wrapped)
    fn value_at(&self, phase: f64) -> f64;

    /// Renders `len` samples at `frequency`, sampling at t = i / sample_rate.
    ///
    /// The time axis starts at zero and excludes the endpoint, so a buffer
    /// holding a whole number of periods loops seamlessly.
    fn render(&self, frequency: f64, len: usize, sample_rate: u32) -> Signal {
        let rate = sample_rate as f64;
        (0..len)
            .map(|i| self.value_at(frequency * (i as f64 / rate)))
            .collect()
    }
}
