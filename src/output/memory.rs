//! In-memory sink that records what it was asked to play.

use super::AudioSink;
use crate::{Result, Signal};

/// A sink that keeps every submitted buffer instead of playing it.
///
/// Useful for tests and headless rendering.
///
/// # Examples
///
/// ```
/// use keysynth::{AudioSink, MemorySink, Signal};
///
/// let mut sink = MemorySink::new();
/// sink.play(&Signal::from_samples(vec![0.5]), 44100).unwrap();
/// assert!(sink.is_playing());
/// sink.stop();
/// assert!(!sink.is_playing());
/// assert_eq!(sink.played().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    played: Vec<(Signal, u32)>,
    stops: usize,
    playing: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every buffer submitted so far, with its sample rate.
    pub fn played(&self) -> &[(Signal, u32)] {
        &self.played
    }

    /// The most recently submitted buffer.
    pub fn last(&self) -> Option<&(Signal, u32)> {
        self.played.last()
    }

    /// How many times `stop` has been called.
    pub fn stop_count(&self) -> usize {
        self.stops
    }

    /// Whether a buffer has been submitted since the last stop.
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl AudioSink for MemorySink {
    fn play(&mut self, signal: &Signal, sample_rate: u32) -> Result<()> {
        self.played.push((signal.clone(), sample_rate));
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.playing = false;
    }
}
