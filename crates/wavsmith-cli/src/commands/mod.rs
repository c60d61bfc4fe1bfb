//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod render;
pub mod tone;
pub mod validate;

mod reporting;

use std::process::ExitCode;

use wavsmith_backend_audio::AudioError;

/// Exit status for invalid input (bad spec, bad arguments, bad container).
pub const EXIT_INVALID_INPUT: u8 = 1;

/// Exit status for a render or I/O failure.
pub const EXIT_RENDER_FAILED: u8 = 2;

/// Maps an engine error to the process exit status.
///
/// An oversized payload is a property of the input, the same condition
/// validation reports as `E010`, so it exits like any other invalid input.
pub fn exit_code_for(error: &AudioError) -> ExitCode {
    match error {
        AudioError::Configuration { .. }
        | AudioError::PayloadTooLarge { .. }
        | AudioError::InvalidContainer { .. } => ExitCode::from(EXIT_INVALID_INPUT),
        AudioError::Io(_) => ExitCode::from(EXIT_RENDER_FAILED),
    }
}
