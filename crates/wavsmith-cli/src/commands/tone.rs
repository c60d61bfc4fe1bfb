//! Tone command implementation
//!
//! Renders a single oscillator described entirely by command-line flags.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wavsmith_spec::{
    AudioFormat, BitDepth, ErrorCode, NoisePolicy, OscillatorSpec, RenderSpec, ValidationError,
    Waveform,
};

use super::json_output::{print_json, validation_error_to_json, RenderOutput};
use super::render::{render_human, render_json};
use super::EXIT_INVALID_INPUT;

/// Flags of the `tone` command.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneOptions {
    /// Waveform shape.
    pub shape: Waveform,
    /// Duration in seconds.
    pub duration: f64,
    /// Frequency in Hz (required for periodic shapes).
    pub frequency: Option<f64>,
    /// Amplitude in percent.
    pub amplitude: f64,
    /// Silence before the waveform, in seconds.
    pub pre_delay: f64,
    /// Stereo pan, -100 to 100.
    pub pan: f64,
    /// Output channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Noise seed; entropy when absent.
    pub seed: Option<u32>,
}

impl ToneOptions {
    /// Builds a single-oscillator render spec from the flags.
    ///
    /// Range checks are left to validation; only the bit depth is checked
    /// here because [`BitDepth`] cannot represent other values.
    pub fn to_spec(&self) -> Result<RenderSpec, ValidationError> {
        let bit_depth = BitDepth::try_from(self.bit_depth).map_err(|message| {
            ValidationError::with_path(ErrorCode::InvalidBitDepth, message, "bit_depth")
        })?;
        let noise = match self.seed {
            Some(seed) => NoisePolicy::Seeded { seed },
            None => NoisePolicy::Entropy,
        };

        let oscillator = OscillatorSpec {
            shape: self.shape,
            duration_seconds: self.duration,
            frequency_hz: self.frequency,
            amplitude_percent: self.amplitude,
            pre_delay_seconds: self.pre_delay,
            pan: self.pan,
        };

        Ok(
            RenderSpec::new(AudioFormat::new(self.channels, self.sample_rate, bit_depth))
                .noise(noise)
                .oscillator(oscillator),
        )
    }
}

/// Run the tone command
///
/// # Returns
/// Exit code: 0 on success, 1 for invalid input, 2 if rendering or writing failed
pub fn run(options: &ToneOptions, out: &str, json_output: bool) -> Result<ExitCode> {
    let spec = match options.to_spec() {
        Ok(spec) => spec,
        Err(error) => return invalid_argument(error, json_output),
    };

    if json_output {
        render_json(&spec, Path::new(out), None)
    } else {
        println!(
            "{} {} {}s",
            "Rendering:".cyan().bold(),
            options.shape,
            options.duration
        );
        render_human(&spec, Path::new(out))
    }
}

fn invalid_argument(error: ValidationError, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = RenderOutput {
            success: false,
            errors: vec![validation_error_to_json(&error)],
            warnings: Vec::new(),
            result: None,
            source_hash: None,
        };
        print_json(&output)?;
        Ok(ExitCode::from(EXIT_INVALID_INPUT))
    } else {
        anyhow::bail!(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn options() -> ToneOptions {
        ToneOptions {
            shape: Waveform::Sine,
            duration: 1.0,
            frequency: Some(440.0),
            amplitude: 100.0,
            pre_delay: 0.0,
            pan: 0.0,
            channels: 1,
            sample_rate: 44100,
            bit_depth: 16,
            seed: None,
        }
    }

    #[test]
    fn test_to_spec_defaults() {
        let spec = options().to_spec().unwrap();
        assert_eq!(
            spec,
            RenderSpec::new(AudioFormat::mono(44100))
                .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0))
        );
    }

    #[test]
    fn test_to_spec_seed_and_format() {
        let spec = ToneOptions {
            shape: Waveform::Noise,
            frequency: None,
            channels: 2,
            bit_depth: 24,
            pan: -40.0,
            seed: Some(7),
            ..options()
        }
        .to_spec()
        .unwrap();

        assert_eq!(spec.noise, NoisePolicy::Seeded { seed: 7 });
        assert_eq!(spec.bit_depth, BitDepth::TwentyFour);
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.oscillators[0].pan, -40.0);
    }

    #[test]
    fn test_to_spec_rejects_bit_depth() {
        let err = ToneOptions {
            bit_depth: 8,
            ..options()
        }
        .to_spec()
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidBitDepth);
        assert!(err.message.contains("bit depth"));
    }
}
