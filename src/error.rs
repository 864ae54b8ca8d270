//! Error types for the synthesis pipeline.

use thiserror::Error;

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthError>;

/// Errors that can occur while rendering or playing a note.
///
/// Every error is returned synchronously from the call that caused it. None of
/// them leave shared state behind, so a failed trigger can simply be reported
/// and the next one attempted.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The requested waveform shape is not one of the supported variants.
    #[error("unsupported waveform shape: {name:?}")]
    UnsupportedShape {
        /// The label that failed to parse.
        name: String,
    },

    /// The shaped signal has no usable peak to normalize against.
    #[error("cannot normalize signal with peak amplitude {peak}")]
    Normalization {
        /// The measured peak amplitude (zero or non-finite).
        peak: f64,
    },

    /// A numeric parameter is outside its valid range.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The audio output device could not be opened or driven.
    #[error("audio device error: {0}")]
    Device(String),

    /// Writing a WAV file failed.
    #[cfg(feature = "wav")]
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a device error from anything printable.
    pub fn device(err: impl std::fmt::Display) -> Self {
        Self::Device(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = SynthError::invalid_param("sustain", "must be between 0 and 1");
        assert!(err.to_string().contains("sustain"));
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_unsupported_shape_message() {
        let err = SynthError::UnsupportedShape {
            name: "Pulse".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported waveform shape: \"Pulse\"");
    }

    #[test]
    fn test_device_helper() {
        let err = SynthError::device("no output device");
        assert!(matches!(err, SynthError::Device(ref msg) if msg == "no output device"));
    }
}
