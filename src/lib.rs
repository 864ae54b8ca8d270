//! Keysynth - a note-at-a-time software synthesizer
//!
//! This library renders fixed-length notes: a waveform generator produces a
//! raw signal, an ADSR envelope shapes it, and the result is peak-normalized
//! and handed to an audio sink.

pub mod core;
pub mod effects;
pub mod envelopes;
pub mod error;
pub mod music;
pub mod noise;
pub mod oscillators;
pub mod output;
pub mod synth;

// Re-export commonly used types at the crate root
pub use crate::core::{Signal, sample_count};
pub use effects::{PEAK_LEVEL, normalize};
pub use envelopes::{EnvelopeParams, apply_envelope, envelope_curve};
pub use error::{Result, SynthError};
pub use noise::WhiteNoise;
pub use oscillators::{Shape, Waveform, generate, generate_named, generate_with_rng};
#[cfg(feature = "playback")]
pub use output::CpalSink;
pub use output::{AudioSink, MemorySink};
#[cfg(feature = "wav")]
pub use output::WavSink;
pub use synth::{NoteConfig, Synth, render};
