//! Square waveform.

use super::Waveform;
use std::f64::consts::PI;

/// A square wave defined as the sign of a sine: `sign(sin(2π·phase))`.
///
/// Output is always one of -1.0, 0.0 or 1.0. A sample whose sine is exactly
/// zero (for instance phase 0) yields 0.0 rather than either rail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

/// Three-valued sign: unlike `f64::signum`, zero maps to zero.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Waveform for Square {
    fn value_at(&self, phase: f64) -> f64 {
        sign((2.0 * PI * phase).sin())
    }
}
