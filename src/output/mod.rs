//! Audio sinks: where finished buffers go.
//!
//! A sink accepts a complete rendered buffer and its sample rate. Playback is
//! fire-and-forget; `stop` may be called at any time to cut it short.

mod memory;
#[cfg(feature = "playback")]
mod device;
#[cfg(feature = "wav")]
mod wav;

pub use memory::MemorySink;
#[cfg(feature = "playback")]
pub use device::CpalSink;
#[cfg(feature = "wav")]
pub use wav::{WavSink, write_wav};

use crate::{Result, Signal};

/// Common interface for anything that can play a rendered buffer.
pub trait AudioSink {
    /// Starts playing `signal` without waiting for it to finish.
    ///
    /// Any buffer already playing is replaced.
    fn play(&mut self, signal: &Signal, sample_rate: u32) -> Result<()>;

    /// Halts playback immediately. Stopping an idle sink does nothing.
    fn stop(&mut self);
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self, signal: &Signal, sample_rate: u32) -> Result<()> {
        (**self).play(signal, sample_rate)
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}
