//! Frequency type for representing pitch in Hz.

use super::note_frequency;

/// A frequency value in Hz.
///
/// # Examples
///
/// ```
/// use keysynth::music::Frequency;
///
/// let freq: Frequency = 440.0.into();
/// assert_eq!(freq.as_f64(), 440.0);
///
/// let freq = Frequency::from_note("E4").unwrap();
/// assert_eq!(freq.as_f64(), 329.63);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency(f64);

impl Frequency {
    /// Creates a new frequency from Hz.
    pub fn from_hz(hz: f64) -> Self {
        Frequency(hz)
    }

    /// Looks up a keyboard note name such as `"A4"`.
    pub fn from_note(name: &str) -> Option<Self> {
        note_frequency(name).map(Frequency)
    }

    /// Returns the frequency value in Hz.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Frequency {
    fn from(hz: f64) -> Self {
        Frequency::from_hz(hz)
    }
}

impl From<Frequency> for f64 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}
