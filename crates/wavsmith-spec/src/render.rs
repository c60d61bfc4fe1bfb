//! The render spec: one session's format, noise policy, and oscillators.

use serde::{Deserialize, Serialize};

use crate::format::{AudioFormat, BitDepth, DEFAULT_SAMPLE_RATE};
use crate::oscillator::OscillatorSpec;

/// How noise oscillators obtain their random streams.
///
/// The choice is explicit so that callers decide between fresh output on every
/// render and byte-identical re-renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum NoisePolicy {
    /// One generator per session, seeded once from OS entropy. All noise
    /// oscillators in the session draw successively from the same stream.
    #[default]
    Entropy,
    /// Each noise oscillator gets its own stream derived from `seed` and the
    /// oscillator's index. Output is reproducible.
    Seeded {
        /// Base seed.
        seed: u32,
    },
}

/// A complete, declarative render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderSpec {
    /// Number of output channels (1 or 2).
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Bits per sample (16 or 24).
    #[serde(default)]
    pub bit_depth: BitDepth,
    /// Noise seeding policy.
    #[serde(default)]
    pub noise: NoisePolicy,
    /// Oscillators to mix, in submission order.
    pub oscillators: Vec<OscillatorSpec>,
}

fn default_channels() -> u16 {
    1
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

impl RenderSpec {
    /// Creates an empty render spec for the given format.
    pub fn new(format: AudioFormat) -> Self {
        Self {
            channels: format.channels,
            sample_rate: format.sample_rate,
            bit_depth: format.bit_depth,
            noise: NoisePolicy::Entropy,
            oscillators: Vec::new(),
        }
    }

    /// Adds an oscillator.
    pub fn oscillator(mut self, osc: OscillatorSpec) -> Self {
        self.oscillators.push(osc);
        self
    }

    /// Sets the noise policy.
    pub fn noise(mut self, policy: NoisePolicy) -> Self {
        self.noise = policy;
        self
    }

    /// The session's audio format.
    pub fn format(&self) -> AudioFormat {
        AudioFormat::new(self.channels, self.sample_rate, self.bit_depth)
    }

    /// Length in samples per channel of the final mix.
    pub fn frames(&self) -> usize {
        self.oscillators
            .iter()
            .map(|osc| osc.total_samples(self.sample_rate))
            .max()
            .unwrap_or(0)
    }

    /// Size in bytes of the quantized payload this spec will produce.
    pub fn payload_bytes(&self) -> u64 {
        self.frames() as u64 * self.format().block_align() as u64
    }

    /// Parses a render spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the render spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Serializes the render spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
