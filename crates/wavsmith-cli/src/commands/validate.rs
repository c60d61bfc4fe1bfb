//! Validate command implementation
//!
//! Checks a render spec without rendering it.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wavsmith_spec::{canonical_spec_hash, validate_render_spec};

use super::json_output::{
    input_error_to_json, print_json, validation_error_to_json, validation_warning_to_json,
    ValidateOutput,
};
use super::{reporting, EXIT_INVALID_INPUT};
use crate::input::{load_spec, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `spec_path` - Path to the render spec (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(spec_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(spec_path)
    } else {
        run_human(spec_path)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(spec_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), spec_path);

    let LoadResult { spec, source_hash } = load_spec(Path::new(spec_path))
        .with_context(|| format!("Failed to load spec file: {}", spec_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let spec_hash = canonical_spec_hash(&spec).unwrap_or_else(|_| "unknown".to_string());
    println!("{} {}", "Spec hash:".dimmed(), spec_hash);

    let result = validate_render_spec(&spec);
    reporting::print_validation(&result);

    if result.is_ok() {
        println!(
            "\n{} {} oscillator(s), {} frames, {} payload bytes",
            "SUCCESS".green().bold(),
            spec.oscillators.len(),
            spec.frames(),
            spec.payload_bytes()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Render spec has {} error(s)",
            "FAILED".red().bold(),
            result.errors.len()
        );
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(spec_path: &str) -> Result<ExitCode> {
    let output = match load_spec(Path::new(spec_path)) {
        Ok(LoadResult { spec, source_hash }) => {
            let result = validate_render_spec(&spec);
            ValidateOutput {
                success: result.is_ok(),
                errors: result.errors.iter().map(validation_error_to_json).collect(),
                warnings: result
                    .warnings
                    .iter()
                    .map(validation_warning_to_json)
                    .collect(),
                spec_hash: canonical_spec_hash(&spec).ok(),
                source_hash: Some(source_hash),
            }
        }
        Err(e) => ValidateOutput {
            success: false,
            errors: vec![input_error_to_json(&e, spec_path)],
            warnings: Vec::new(),
            spec_hash: None,
            source_hash: None,
        },
    };

    print_json(&output)?;
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    }
}
