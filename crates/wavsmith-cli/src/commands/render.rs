//! Render command implementation
//!
//! Validates a render spec file and writes the rendered WAV.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavsmith_backend_audio::{render_to_file, AudioError};
use wavsmith_spec::{BackendError, RenderSpec};

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    JsonError, RenderOutput, RenderResult,
};
use super::{exit_code_for, reporting, EXIT_INVALID_INPUT};
use crate::input::{load_spec, LoadResult};

/// Run the render command
///
/// # Arguments
/// * `spec_path` - Path to the render spec (JSON)
/// * `out` - Output WAV path (`.wav` appended if it has no extension)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 for invalid input, 2 if rendering or writing failed
pub fn run(spec_path: &str, out: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path, out)
    } else {
        run_human(spec_path, out)
    }
}

/// Run render with human-readable (colored) output
fn run_human(spec_path: &str, out: &str) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    render_human(&spec, Path::new(out))
}

/// Run render with machine-readable JSON output
fn run_json(spec_path: &str, out: &str) -> Result<ExitCode> {
    match load_spec(Path::new(spec_path)) {
        Ok(LoadResult { spec, source_hash }) => render_json(&spec, Path::new(out), Some(source_hash)),
        Err(e) => {
            let output = RenderOutput {
                success: false,
                errors: vec![input_error_to_json(&e, spec_path)],
                warnings: Vec::new(),
                result: None,
                source_hash: None,
            };
            print_json(&output)?;
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
    }
}

/// Validates and renders `spec`, printing colored progress.
pub(crate) fn render_human(spec: &RenderSpec, out: &Path) -> Result<ExitCode> {
    let start = Instant::now();

    match render_to_file(spec, out) {
        Ok(written) => {
            reporting::print_warnings(&written.warnings);
            reporting::print_report(&written.report);
            println!(
                "\n{} Wrote {} ({}ms)",
                "SUCCESS".green().bold(),
                written.path.display(),
                start.elapsed().as_millis()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(AudioError::Configuration { errors }) => {
            reporting::print_errors(&errors);
            println!(
                "\n{} Render spec has {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
        Err(e) => {
            println!("\n{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            Ok(exit_code_for(&e))
        }
    }
}

/// Validates and renders `spec`, printing one JSON envelope.
pub(crate) fn render_json(
    spec: &RenderSpec,
    out: &Path,
    source_hash: Option<String>,
) -> Result<ExitCode> {
    let start = Instant::now();

    let mut output = RenderOutput {
        success: false,
        errors: Vec::new(),
        warnings: Vec::new(),
        result: None,
        source_hash,
    };

    let code = match render_to_file(spec, out) {
        Ok(written) => {
            output.success = true;
            output.warnings = written
                .warnings
                .iter()
                .map(validation_warning_to_json)
                .collect();
            output.result = Some(RenderResult {
                path: written.path.display().to_string(),
                report: written.report,
                duration_ms: start.elapsed().as_millis() as u64,
            });
            ExitCode::SUCCESS
        }
        Err(e) => {
            output.errors = audio_error_to_json(&e);
            exit_code_for(&e)
        }
    };

    print_json(&output)?;
    Ok(code)
}

/// Converts an engine error to JSON errors, expanding validation failures.
fn audio_error_to_json(error: &AudioError) -> Vec<JsonError> {
    match error {
        AudioError::Configuration { errors } => errors.iter().map(validation_error_to_json).collect(),
        other => vec![JsonError::new(other.code(), other.to_string())],
    }
}
