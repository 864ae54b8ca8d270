//! Triangle waveform.

use super::Waveform;

/// A triangle wave: `2·|2·(phase − floor(phase + 0.5))| − 1`.
///
/// Starts at -1.0 on whole phases and peaks at 1.0 on half phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triangle;

impl Waveform for Triangle {
    fn value_at(&self, phase: f64) -> f64 {
        2.0 * (2.0 * (phase - (phase + 0.5).floor())).abs() - 1.0
    }
}
