//! Render sessions: the full oscillator → mix → pan → quantize → container
//! pipeline.
//!
//! A [`RenderSession`] owns every piece of mutable state for one render: the
//! channel mixes, the noise source and the session format. Sessions share
//! nothing, so independent sessions can run on different threads.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wavsmith_spec::{
    canonical_spec_hash, validate_format, validate_oscillator, validate_render_spec, AudioFormat,
    NoisePolicy, OscillatorSpec, RenderSpec, ValidationResult, ValidationWarning,
};

use crate::error::{AudioError, AudioResult};
use crate::mixer::Mixer;
use crate::quantize::encode_pcm_with_stats;
use crate::rng::NoiseSource;
use crate::synthesis::generate_oscillator;
use crate::wav::{hash_pcm, write_wav_file, write_wav_to_vec, HEADER_LEN};

/// Summary of a finished render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    /// Output channel count.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: u16,
    /// Sample frames per channel.
    pub frames: usize,
    /// Payload size in bytes.
    pub payload_bytes: usize,
    /// Rendered length in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample before quantization.
    pub peak: f64,
    /// Samples clamped to [-1, 1] during quantization.
    pub clamped_samples: u64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
    /// Canonical hash of the render spec, when rendered from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
}

/// A rendered WAV file held in memory.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Complete file bytes, header included.
    pub wav_data: Vec<u8>,
    /// Render summary.
    pub report: RenderReport,
    /// Warnings raised while validating the input.
    pub warnings: Vec<ValidationWarning>,
}

impl RenderOutput {
    /// The PCM payload without the header.
    pub fn pcm_data(&self) -> &[u8] {
        &self.wav_data[HEADER_LEN..]
    }
}

/// A render written to disk.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    /// Path actually written (`.wav` appended if needed).
    pub path: PathBuf,
    /// Render summary.
    pub report: RenderReport,
    /// Warnings raised while validating the input.
    pub warnings: Vec<ValidationWarning>,
}

/// State for one render.
#[derive(Debug)]
pub struct RenderSession {
    format: AudioFormat,
    mixer: Mixer,
    noise: NoiseSource,
    oscillators: u32,
    warnings: Vec<ValidationWarning>,
}

impl RenderSession {
    /// Starts a session. Rejects formats the engine cannot encode.
    pub fn new(format: AudioFormat, noise: NoisePolicy) -> AudioResult<Self> {
        into_configuration(validate_format(&format))?;
        Ok(Self {
            format,
            mixer: Mixer::new(format.channels),
            noise: NoiseSource::new(noise),
            oscillators: 0,
            warnings: Vec::new(),
        })
    }

    /// Session format.
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Number of oscillators mixed so far.
    pub fn oscillator_count(&self) -> u32 {
        self.oscillators
    }

    /// Current mix length in frames.
    pub fn frames(&self) -> usize {
        self.mixer.len()
    }

    /// Generates one oscillator and folds it into the mix.
    ///
    /// Out-of-range parameters are rejected with
    /// [`AudioError::Configuration`] and leave the mix unchanged.
    pub fn add_oscillator(&mut self, osc: &OscillatorSpec) -> AudioResult<()> {
        let index = self.oscillators as usize;
        let warnings = into_configuration(validate_oscillator(osc, index, &self.format))?;
        self.warnings.extend(warnings);
        self.mix_oscillator(osc)
    }

    /// Generates and mixes an oscillator that has already been validated.
    fn mix_oscillator(&mut self, osc: &OscillatorSpec) -> AudioResult<()> {
        let index = self.oscillators;
        let buffer = generate_oscillator(osc, self.format.sample_rate, self.noise.stream_for(index))?;
        self.mixer.add(&buffer, osc.pan);
        self.oscillators += 1;
        Ok(())
    }

    /// Quantizes the mix and wraps it in a container.
    pub fn finish(self) -> AudioResult<RenderOutput> {
        let format = self.format;
        let frames = self.mixer.len();
        let interleaved = self.mixer.finish().into_interleaved();

        let (pcm, stats) = encode_pcm_with_stats(&interleaved, format.bit_depth);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        let report = RenderReport {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bit_depth: format.bit_depth.bits(),
            frames,
            payload_bytes: pcm.len(),
            duration_seconds: frames as f64 / format.sample_rate as f64,
            peak: stats.peak,
            clamped_samples: stats.clamped_samples,
            pcm_hash: hash_pcm(&pcm),
            spec_hash: None,
        };

        Ok(RenderOutput {
            wav_data,
            report,
            warnings: self.warnings,
        })
    }
}

fn into_configuration(result: ValidationResult) -> AudioResult<Vec<ValidationWarning>> {
    result
        .into_result()
        .map_err(|errors| AudioError::Configuration { errors })
}

/// Renders a complete spec in memory.
///
/// The whole spec is validated once, before any synthesis happens; warnings
/// are returned in [`RenderOutput::warnings`].
pub fn render(spec: &RenderSpec) -> AudioResult<RenderOutput> {
    let warnings = into_configuration(validate_render_spec(spec))?;

    let mut session = RenderSession::new(spec.format(), spec.noise)?;
    for osc in &spec.oscillators {
        session.mix_oscillator(osc)?;
    }

    let mut output = session.finish()?;
    output.warnings = warnings;
    output.report.spec_hash = canonical_spec_hash(spec).ok();
    Ok(output)
}

/// Renders a spec and writes it atomically to `path`.
pub fn render_to_file(spec: &RenderSpec, path: &Path) -> AudioResult<RenderedFile> {
    let output = render(spec)?;
    let path = write_wav_file(path, &spec.format(), output.pcm_data())?;
    Ok(RenderedFile {
        path,
        report: output.report,
        warnings: output.warnings,
    })
}
