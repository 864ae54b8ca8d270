//! WAV file output using hound.

use super::AudioSink;
use crate::{Result, Signal};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes `signal` as a mono 32-bit float WAV file.
///
/// # Errors
///
/// Returns `SynthError::Wav` when the file cannot be created or written.
pub fn write_wav<P: AsRef<Path>>(path: P, signal: &Signal, sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path.as_ref(), spec)?;
    for &sample in signal.iter() {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;
    debug!("Wrote {} samples to {}", signal.len(), path.as_ref().display());
    Ok(())
}

/// A sink that saves each submitted buffer to its own numbered WAV file.
///
/// Files are named `<prefix>-000.wav`, `<prefix>-001.wav`, ... inside the
/// sink's directory. `stop` has nothing to halt and does nothing.
#[derive(Debug)]
pub struct WavSink {
    directory: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl WavSink {
    /// Creates a sink writing into `directory` (which must exist).
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: "note".to_string(),
            written: Vec::new(),
        }
    }

    /// Sets the file name prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Paths of every file written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl AudioSink for WavSink {
    fn play(&mut self, signal: &Signal, sample_rate: u32) -> Result<()> {
        let path = self
            .directory
            .join(format!("{}-{:03}.wav", self.prefix, self.written.len()));
        write_wav(&path, signal, sample_rate)?;
        self.written.push(path);
        Ok(())
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let dir = std::env::temp_dir().join(format!("keysynth-wav-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut sink = WavSink::new(&dir).with_prefix("test");
        let signal = Signal::from_samples(vec![0.0, 0.5, -0.5, 0.25]);
        sink.play(&signal, 8000).unwrap();
        sink.play(&signal, 8000).unwrap();
        assert_eq!(sink.written().len(), 2);
        assert!(sink.written()[1].ends_with("test-001.wav"));

        let mut reader = hound::WavReader::open(&sink.written()[0]).unwrap();
        assert_eq!(reader.spec().sample_rate, 8000);
        assert_eq!(reader.spec().channels, 1);
        let samples: Vec<f32> = reader.samples::<f32>().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![0.0, 0.5, -0.5, 0.25]);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
