//! Render spec validation.
//!
//! Rejects parameters the engine must never see (a `ConfigurationError` at the
//! backend boundary) and flags suspicious but renderable input as warnings.

pub mod common;


use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::format::{AudioFormat, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};
use crate::oscillator::{OscillatorSpec, MAX_AMPLITUDE_PERCENT, MAX_PAN, MAX_SECONDS};
use crate::render::RenderSpec;

use common::{validate_positive, validate_range};

/// Largest payload the container's 32-bit chunk size can describe.
pub const MAX_PAYLOAD_BYTES: u64 = u32::MAX as u64 - 36;

/// Validates a complete render spec.
///
/// # Example
/// ```
/// use wavsmith_spec::{AudioFormat, OscillatorSpec, RenderSpec, Waveform};
/// use wavsmith_spec::validation::validate_render_spec;
///
/// let spec = RenderSpec::new(AudioFormat::mono(44100))
///     .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0));
/// assert!(validate_render_spec(&spec).is_ok());
/// ```
pub fn validate_render_spec(spec: &RenderSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    let format_ok = check_format(&spec.format(), &mut result);

    if spec.oscillators.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::NoOscillators,
            "render spec must declare at least one oscillator",
            "oscillators",
        ));
    }

    let format = spec.format();
    for (index, osc) in spec.oscillators.iter().enumerate() {
        check_oscillator(osc, index, &format, &mut result);
    }

    // Payload size depends on every other field; only meaningful when they are valid.
    if format_ok && result.is_ok() {
        let bytes = spec.payload_bytes();
        if bytes > MAX_PAYLOAD_BYTES {
            result.add_error(ValidationError::new(
                ErrorCode::PayloadTooLarge,
                format!(
                    "rendered payload of {} bytes exceeds the container limit of {} bytes",
                    bytes, MAX_PAYLOAD_BYTES
                ),
            ));
        }
    }

    result
}

/// Validates a session format on its own.
///
/// Bit depth needs no check here; [`BitDepth`](crate::format::BitDepth)
/// only admits supported values.
pub fn validate_format(format: &AudioFormat) -> ValidationResult {
    let mut result = ValidationResult::success();
    check_format(format, &mut result);
    result
}

/// Validates one oscillator together with the session format it renders into.
///
/// Used when oscillators are fed to a render session one at a time. Besides
/// the per-field checks, rejects an oscillator whose own payload would not fit
/// the container, since the mix can only be longer.
///
/// # Example
/// ```
/// use wavsmith_spec::{AudioFormat, OscillatorSpec, Waveform};
/// use wavsmith_spec::validation::validate_oscillator;
///
/// let osc = OscillatorSpec::tone(Waveform::Saw, 0.5, 220.0);
/// assert!(validate_oscillator(&osc, 0, &AudioFormat::stereo(48000)).is_ok());
/// ```
pub fn validate_oscillator(
    osc: &OscillatorSpec,
    index: usize,
    format: &AudioFormat,
) -> ValidationResult {
    let mut result = ValidationResult::success();
    let format_ok = check_format(format, &mut result);
    check_oscillator(osc, index, format, &mut result);

    if format_ok && result.is_ok() {
        let bytes = osc.total_samples(format.sample_rate) as u64 * format.block_align() as u64;
        if bytes > MAX_PAYLOAD_BYTES {
            result.add_error(ValidationError::with_path(
                ErrorCode::PayloadTooLarge,
                format!(
                    "oscillator payload of {} bytes exceeds the container limit of {} bytes",
                    bytes, MAX_PAYLOAD_BYTES
                ),
                format!("oscillators[{}]", index),
            ));
        }
    }

    result
}

/// Validates session-level fields. Returns true if the format is usable.
fn check_format(format: &AudioFormat, result: &mut ValidationResult) -> bool {
    let mut ok = true;

    if !(1..=2).contains(&format.channels) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidChannelCount,
            format!("channels must be 1 or 2, got {}", format.channels),
            "channels",
        ));
        ok = false;
    }

    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&format.sample_rate) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            format!(
                "sample_rate must be in [{}, {}], got {}",
                MIN_SAMPLE_RATE, MAX_SAMPLE_RATE, format.sample_rate
            ),
            "sample_rate",
        ));
        ok = false;
    }

    ok
}

fn check_oscillator(
    osc: &OscillatorSpec,
    index: usize,
    format: &AudioFormat,
    result: &mut ValidationResult,
) {
    let path = |field: &str| format!("oscillators[{}].{}", index, field);

    if let Err(e) = validate_range("duration_seconds", osc.duration_seconds, 0.0, MAX_SECONDS) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            e.message,
            path("duration_seconds"),
        ));
    }

    if let Err(e) = validate_range("pre_delay_seconds", osc.pre_delay_seconds, 0.0, MAX_SECONDS) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPreDelay,
            e.message,
            path("pre_delay_seconds"),
        ));
    }

    if let Err(e) = validate_range(
        "amplitude_percent",
        osc.amplitude_percent,
        0.0,
        MAX_AMPLITUDE_PERCENT,
    ) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            e.message,
            path("amplitude_percent"),
        ));
    }

    if let Err(e) = validate_range("pan", osc.pan, -MAX_PAN, MAX_PAN) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidPan,
            e.message,
            path("pan"),
        ));
    } else if !format.is_stereo() && osc.pan != 0.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::PanIgnoredMono,
            format!("pan {} has no effect on mono output", osc.pan),
            path("pan"),
        ));
    }

    match (osc.shape.needs_frequency(), osc.frequency_hz) {
        (true, None) => {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidFrequency,
                format!("{} oscillator requires frequency_hz", osc.shape),
                path("frequency_hz"),
            ));
        }
        (true, Some(freq)) => {
            if let Err(e) = validate_positive("frequency_hz", freq) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidFrequency,
                    e.message,
                    path("frequency_hz"),
                ));
            } else {
                let nyquist = format.sample_rate as f64 / 2.0;
                if freq > nyquist {
                    result.add_warning(ValidationWarning::with_path(
                        WarningCode::AboveNyquist,
                        format!(
                            "frequency {} Hz exceeds the Nyquist limit of {} Hz and will alias",
                            freq, nyquist
                        ),
                        path("frequency_hz"),
                    ));
                }
            }
        }
        (false, Some(_)) => {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::FrequencyIgnored,
                format!("frequency_hz is ignored for {} oscillators", osc.shape),
                path("frequency_hz"),
            ));
        }
        (false, None) => {}
    }
}
