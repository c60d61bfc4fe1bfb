//! Inspect command implementation
//!
//! Parses the header of a WAV file written by `render` or `tone`.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use wavsmith_backend_audio::wav::{compute_pcm_hash, read_header};
use wavsmith_backend_audio::AudioResult;
use wavsmith_spec::BackendError;

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};
use super::EXIT_INVALID_INPUT;

/// Parses a canonical WAV file into inspect details.
pub fn inspect_bytes(bytes: &[u8]) -> AudioResult<InspectResult> {
    let header = read_header(bytes)?;
    let format = header.format;
    Ok(InspectResult {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bit_depth: format.bit_depth.bits(),
        byte_rate: format.byte_rate(),
        block_align: format.block_align(),
        data_size: header.data_size,
        frames: header.frames(),
        duration_seconds: header.frames() as f64 / format.sample_rate as f64,
        pcm_hash: compute_pcm_hash(bytes),
    })
}

/// Run the inspect command
///
/// # Returns
/// Exit code: 0 if the header parsed, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let bytes = std::fs::read(input).with_context(|| format!("Failed to read file: {}", input))?;
    match inspect_bytes(&bytes) {
        Ok(info) => {
            println!("  {:<12} {}", "channels".dimmed(), info.channels);
            println!("  {:<12} {} Hz", "sample rate".dimmed(), info.sample_rate);
            println!("  {:<12} {}", "bit depth".dimmed(), info.bit_depth);
            println!("  {:<12} {}", "byte rate".dimmed(), info.byte_rate);
            println!("  {:<12} {}", "block align".dimmed(), info.block_align);
            println!("  {:<12} {} bytes", "data".dimmed(), info.data_size);
            println!(
                "  {:<12} {} ({:.3}s)",
                "frames".dimmed(),
                info.frames,
                info.duration_seconds
            );
            match info.pcm_hash {
                Some(hash) => println!("  {:<12} {}", "pcm hash".dimmed(), hash),
                None => println!("  {} payload is shorter than the header claims", "!".yellow()),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("\n{} [{}] {}", "FAILED".red().bold(), e.code(), e);
            Ok(ExitCode::from(EXIT_INVALID_INPUT))
        }
    }
}

fn run_json(input: &str) -> Result<ExitCode> {
    let output = match std::fs::read(input) {
        Ok(bytes) => match inspect_bytes(&bytes) {
            Ok(info) => InspectOutput {
                success: true,
                errors: Vec::new(),
                result: Some(info),
            },
            Err(e) => InspectOutput {
                success: false,
                errors: vec![JsonError::new(e.code(), e.to_string())],
                result: None,
            },
        },
        Err(e) => InspectOutput {
            success: false,
            errors: vec![JsonError::new(
                error_codes::FILE_READ,
                format!("failed to read file '{}': {}", input, e),
            )],
            result: None,
        },
    };

    print_json(&output)?;
    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wavsmith_backend_audio::wav::write_wav_to_vec;
    use wavsmith_spec::{AudioFormat, BitDepth};

    #[test]
    fn test_inspect_bytes() {
        let format = AudioFormat::new(2, 48000, BitDepth::TwentyFour);
        let wav = write_wav_to_vec(&format, &[0u8; 48000 * 6]).unwrap();
        let info = inspect_bytes(&wav).unwrap();

        assert_eq!(info.channels, 2);
        assert_eq!(info.sample_rate, 48000);
        assert_eq!(info.bit_depth, 24);
        assert_eq!(info.block_align, 6);
        assert_eq!(info.byte_rate, 288_000);
        assert_eq!(info.frames, 48000);
        assert_eq!(info.duration_seconds, 1.0);
        assert!(info.pcm_hash.is_some());
    }

    #[test]
    fn test_inspect_truncated_payload() {
        let wav = write_wav_to_vec(&AudioFormat::mono(8000), &[0u8; 16]).unwrap();
        let info = inspect_bytes(&wav[..50]).unwrap();
        assert_eq!(info.data_size, 16);
        assert_eq!(info.pcm_hash, None);
    }

    #[test]
    fn test_inspect_garbage() {
        let err = inspect_bytes(b"definitely not a wav").unwrap_err();
        assert_eq!(err.code(), "AUDIO_003");
    }
}
