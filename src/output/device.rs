//! Audio device output using cpal.

use super::AudioSink;
use crate::{Result, Signal, SynthError};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, StreamConfig};
use tracing::{debug, error};

/// Plays buffers on the default output device.
///
/// Each `play` opens a fresh stream at the buffer's own sample rate, so the
/// device must support that rate. The stream walks the buffer once, copying
/// each sample to every channel, then emits silence until it is replaced or
/// stopped.
pub struct CpalSink {
    device: cpal::Device,
    /// The running stream; dropping it ends playback.
    stream: Option<cpal::Stream>,
}

impl CpalSink {
    /// Opens the default output device.
    ///
    /// # Errors
    ///
    /// Returns `SynthError::Device` when the host has no output device.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| SynthError::device("no output device available"))?;
        if let Ok(name) = device.name() {
            debug!("Using output device {name}");
        }
        Ok(Self {
            device,
            stream: None,
        })
    }
}

impl AudioSink for CpalSink {
    fn play(&mut self, signal: &Signal, sample_rate: u32) -> Result<()> {
        self.stop();

        let supported = self
            .device
            .default_output_config()
            .map_err(SynthError::device)?;
        let config = StreamConfig {
            channels: supported.channels(),
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };
        let samples = signal.samples().to_vec();

        let stream = match supported.sample_format() {
            SampleFormat::F32 => build_stream::<f32>(&self.device, &config, samples)?,
            SampleFormat::I16 => build_stream::<i16>(&self.device, &config, samples)?,
            SampleFormat::U16 => build_stream::<u16>(&self.device, &config, samples)?,
            sample_format => {
                return Err(SynthError::Device(format!(
                    "unsupported sample format: {sample_format}"
                )));
            }
        };

        stream.play().map_err(SynthError::device)?;
        debug!(
            "Playing {} samples at {} Hz on {} channels",
            signal.len(),
            sample_rate,
            config.channels
        );
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            if let Err(err) = stream.pause() {
                debug!("Pausing stream before drop failed: {err}");
            }
            debug!("Playback stopped");
        }
    }
}

/// Builds an output stream that plays `samples` once, then silence.
fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    samples: Vec<f64>,
) -> Result<cpal::Stream>
where
    T: SizedSample + FromSample<f64>,
{
    let channels = config.channels as usize;
    let mut position = 0;

    device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let sample = match samples.get(position) {
                        Some(&s) => {
                            position += 1;
                            s
                        }
                        None => 0.0,
                    };
                    let value = T::from_sample(sample);
                    for s in frame.iter_mut() {
                        *s = value;
                    }
                }
            },
            |err| error!("Audio stream error: {err}"),
            None,
        )
        .map_err(SynthError::device)
}
