//! Error types for the audio engine.

use thiserror::Error;
use wavsmith_spec::{BackendError, ValidationError};

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during rendering and encoding.
///
/// Out-of-range samples are not errors; the quantizer clamps them.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Session or oscillator parameters the engine refuses to render.
    #[error("invalid render configuration: {}", join_errors(.errors))]
    Configuration {
        /// Every validation failure found.
        errors: Vec<ValidationError>,
    },

    /// Payload exceeds what the container's 32-bit size fields can describe.
    #[error("payload of {bytes} bytes is too large for a RIFF/WAVE container")]
    PayloadTooLarge {
        /// Payload size in bytes.
        bytes: u64,
    },

    /// Bytes that do not form a canonical PCM WAV header.
    #[error("invalid WAV container: {message}")]
    InvalidContainer {
        /// What was wrong.
        message: String,
    },

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl AudioError {
    /// Creates a configuration error from a single validation failure.
    pub fn configuration(error: ValidationError) -> Self {
        Self::Configuration {
            errors: vec![error],
        }
    }

    /// Creates an invalid container error.
    pub fn invalid_container(message: impl Into<String>) -> Self {
        Self::InvalidContainer {
            message: message.into(),
        }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::Configuration { .. } => "AUDIO_001",
            AudioError::PayloadTooLarge { .. } => "AUDIO_002",
            AudioError::InvalidContainer { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavsmith_spec::ErrorCode;

    #[test]
    fn test_configuration_lists_every_error() {
        let err = AudioError::Configuration {
            errors: vec![
                ValidationError::new(ErrorCode::InvalidChannelCount, "channels must be 1 or 2"),
                ValidationError::new(ErrorCode::NoOscillators, "no oscillators"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("E001: channels must be 1 or 2"));
        assert!(message.contains("E004: no oscillators"));
        assert_eq!(err.code(), "AUDIO_001");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: AudioError = io.into();
        assert_eq!(err.code(), "AUDIO_004");
        assert_eq!(err.category(), "audio");
        assert!(err.to_string().contains("read-only"));
    }
}
