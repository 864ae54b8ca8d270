//! Sawtooth waveform.

use super::Waveform;

/// A centered sawtooth: `2·(phase − floor(0.5 + phase))`.
///
/// The ramp passes through 0 at whole phases, climbs towards 1.0, and jumps
/// to -1.0 at every half phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sawtooth;

impl Waveform for Sawtooth {
    fn value_at(&self, phase: f64) -> f64 {
        2.0 * (phase - (0.5 + phase).floor())
    }
}
