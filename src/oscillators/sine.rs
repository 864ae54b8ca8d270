//! Sine waveform.

use super::Waveform;
use std::f64::consts::PI;

/// A pure sine wave: `sin(2π·phase)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sine;

impl Waveform for Sine {
    fn value_at(&self, phase: f64) -> f64 {
        (2.0 * PI * phase).sin()
    }
}
