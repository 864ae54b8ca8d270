//! The note pipeline: generate, shape, normalize, play.
//!
//! A UI builds a [`NoteConfig`] from its current controls and hands it to a
//! [`Synth`]. Rendering is synchronous and stateless; only the sink holds any
//! state between notes.

use crate::effects::{PEAK_LEVEL, normalize};
use crate::envelopes::{EnvelopeParams, apply_envelope};
use crate::music::Frequency;
use crate::oscillators::{Shape, generate};
use crate::output::AudioSink;
use crate::{Result, Signal, SynthError};
use tracing::{debug, warn};

/// Everything needed to render one note.
///
/// # Examples
///
/// ```
/// use keysynth::{NoteConfig, Shape};
///
/// let config = NoteConfig::default()
///     .with_shape(Shape::Triangle)
///     .with_frequency(220.0)
///     .with_duration(0.25);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteConfig {
    /// Waveform to render.
    pub shape: Shape,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Length of the rendered buffer in seconds.
    pub duration: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Amplitude envelope applied to the raw waveform.
    pub envelope: EnvelopeParams,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self {
            shape: Shape::Sine,
            frequency: 440.0,
            duration: 0.5,
            sample_rate: 44100,
            envelope: EnvelopeParams::default(),
        }
    }
}

impl NoteConfig {
    /// Sets the waveform shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the frequency in Hz.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the frequency from a keyboard note name such as `"C4"`.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::InvalidParameter` for names missing from the note table.
    pub fn with_note(self, name: &str) -> Result<Self> {
        let frequency = Frequency::from_note(name)
            .ok_or_else(|| SynthError::invalid_param("note", format!("unknown note {name:?}")))?;
        Ok(self.with_frequency(frequency.into()))
    }

    /// Sets the note length in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Sets the ADSR envelope.
    pub fn with_envelope(mut self, envelope: EnvelopeParams) -> Self {
        self.envelope = envelope;
        self
    }

    /// Checks every parameter before any rendering happens.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_param("sample_rate", "must be positive"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SynthError::invalid_param(
                "duration",
                format!("must be a non-negative number of seconds, got {}", self.duration),
            ));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(SynthError::invalid_param(
                "frequency",
                format!("must be a positive number of Hz, got {}", self.frequency),
            ));
        }
        self.envelope.validate()
    }
}

/// Renders a note: waveform, then envelope, then peak normalization to [`PEAK_LEVEL`].
///
/// # Errors
///
/// Returns `SynthError::InvalidParameter` for a bad configuration and
/// `SynthError::Normalization` when the shaped note is silent.
///
/// # Examples
///
/// ```
/// use keysynth::{NoteConfig, render};
///
/// let signal = render(&NoteConfig::default()).unwrap();
/// assert_eq!(signal.len(), 22050);
/// assert!((signal.peak() - 0.5).abs() < 1e-12);
/// ```
pub fn render(config: &NoteConfig) -> Result<Signal> {
    config.validate()?;
    let raw = generate(
        config.shape,
        config.frequency,
        config.duration,
        config.sample_rate,
    )?;
    let shaped = apply_envelope(&raw, config.sample_rate, &config.envelope)?;
    let signal = normalize(&shaped, PEAK_LEVEL)?;
    debug!(
        "Rendered {} {:.2} Hz: {} samples at {} Hz",
        config.shape,
        config.frequency,
        signal.len(),
        config.sample_rate
    );
    Ok(signal)
}

/// Drives an audio sink with rendered notes.
///
/// # Examples
///
/// ```
/// use keysynth::{MemorySink, NoteConfig, Synth};
///
/// let mut synth = Synth::new(MemorySink::new());
/// synth.play_note(&NoteConfig::default(), "C4").unwrap();
/// assert_eq!(synth.sink().played().len(), 1);
/// ```
pub struct Synth<S: AudioSink> {
    sink: S,
}

impl<S: AudioSink> Synth<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Renders `config` and submits it to the sink.
    ///
    /// The note is fully rendered before the sink is touched. If anything
    /// fails, the sink is stopped so it never keeps playing a stale buffer,
    /// and the error is returned.
    pub fn trigger(&mut self, config: &NoteConfig) -> Result<()> {
        let result = render(config).and_then(|signal| self.sink.play(&signal, config.sample_rate));
        if let Err(err) = &result {
            warn!("Note trigger failed: {err}");
            self.sink.stop();
        }
        result
    }

    /// Triggers `config` at the pitch of a keyboard note name.
    pub fn play_note(&mut self, config: &NoteConfig, name: &str) -> Result<()> {
        match config.with_note(name) {
            Ok(config) => self.trigger(&config),
            Err(err) => {
                warn!("Note trigger failed: {err}");
                self.sink.stop();
                Err(err)
            }
        }
    }

    /// Halts playback.
    pub fn stop(&mut self) {
        self.sink.stop();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
