//! Wavsmith Render Spec Library
//!
//! This crate provides the types, validation, and hashing for Wavsmith render
//! specs. A render spec is a JSON document describing one offline render
//! session: the output format and the oscillators to mix.
//!
//! # Example
//!
//! ```
//! use wavsmith_spec::{AudioFormat, OscillatorSpec, RenderSpec, Waveform};
//! use wavsmith_spec::validation::validate_render_spec;
//!
//! let spec = RenderSpec::new(AudioFormat::stereo(44100))
//!     .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0).with_pan(-30.0))
//!     .oscillator(OscillatorSpec::noise(0.5).with_amplitude_percent(10.0));
//!
//! assert!(validate_render_spec(&spec).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`format`]: Session audio format (channels, sample rate, bit depth)
//! - [`oscillator`]: Waveform shapes and per-oscillator parameters
//! - [`render`]: The render spec and noise policy
//! - [`validation`]: Render spec validation
//! - [`hash`]: Canonical hashing and seed derivation

pub mod error;
pub mod format;
pub mod hash;
pub mod oscillator;
pub mod render;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use format::{
    seconds_to_samples, AudioFormat, BitDepth, DEFAULT_SAMPLE_RATE, MAX_SAMPLE_RATE,
    MIN_SAMPLE_RATE,
};
pub use hash::{canonical_spec_hash, derive_oscillator_seed};
pub use oscillator::{OscillatorSpec, Waveform, MAX_AMPLITUDE_PERCENT, MAX_PAN, MAX_SECONDS};
pub use render::{NoisePolicy, RenderSpec};
pub use validation::{validate_format, validate_oscillator, validate_render_spec};
