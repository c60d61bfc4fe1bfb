//! JSON output types for machine-readable CLI output.
//!
//! Every command that accepts `--json` prints exactly one of these envelopes
//! to stdout instead of colored text.

use serde::{Deserialize, Serialize};
use wavsmith_backend_audio::RenderReport;

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Validation failures pass through their own `E0xx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001", "AUDIO_004")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Canonical spec hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// JSON output for the `render` and `tone` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOutput {
    /// Whether the file was written
    pub success: bool,
    /// Errors encountered during validation or rendering
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Render details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
    /// BLAKE3 hash of the source file (when rendered from a file)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Render result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Path of the written file
    pub path: String,
    /// Render summary
    pub report: RenderReport,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// JSON output for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectOutput {
    /// Whether the header parsed
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Parsed header details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
}

/// Parsed container details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Channel count
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Bits per sample
    pub bit_depth: u16,
    /// Byte rate from the header
    pub byte_rate: u32,
    /// Block align from the header
    pub block_align: u16,
    /// Payload size in bytes
    pub data_size: u32,
    /// Sample frames per channel
    pub frames: usize,
    /// Length in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the payload (absent if the file is truncated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pcm_hash: Option<String>,
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &wavsmith_spec::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &wavsmith_spec::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: &str) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
    };
    JsonError::new(code, format!("{}: {}", file, err))
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavsmith_spec::{ErrorCode, ValidationError, ValidationWarning, WarningCode};

    #[test]
    fn test_validation_error_conversion() {
        let err = ValidationError::with_path(
            ErrorCode::InvalidPan,
            "pan must be in [-100, 100]",
            "oscillators[0].pan",
        );
        let json = validation_error_to_json(&err);
        assert_eq!(json.code, "E009");
        assert_eq!(json.path.as_deref(), Some("oscillators[0].pan"));
    }

    #[test]
    fn test_validation_warning_conversion() {
        let warn = ValidationWarning::with_path(WarningCode::AboveNyquist, "aliases", "x");
        assert_eq!(validation_warning_to_json(&warn).code, "W001");
    }

    #[test]
    fn test_input_error_codes() {
        let err = InputError::UnknownExtension { extension: None };
        assert_eq!(input_error_to_json(&err, "spec").code, error_codes::UNKNOWN_EXTENSION);

        let err = InputError::JsonParse {
            message: "expected value".to_string(),
        };
        let json = input_error_to_json(&err, "spec.json");
        assert_eq!(json.code, error_codes::JSON_PARSE);
        assert!(json.message.starts_with("spec.json: "));
    }

    #[test]
    fn test_path_omitted_when_absent() {
        let value = serde_json::to_value(JsonError::new("CLI_001", "missing")).unwrap();
        assert!(value.get("path").is_none());
    }
}
