//! Amplitude envelopes.
//!
//! This module provides the ADSR envelope shaper and the linear ramps it is
//! built from.

mod adsr;
mod ramp;

pub use adsr::{EnvelopeParams, StageLengths, apply_envelope, envelope_curve};
pub use ramp::{Ramp, linspace};
