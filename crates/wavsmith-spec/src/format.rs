//! Session-level audio format parameters.

use serde::{Deserialize, Serialize};

/// Lowest supported sample rate in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;
/// Highest supported sample rate in Hz.
pub const MAX_SAMPLE_RATE: u32 = 352_800;
/// Sample rate used when a render spec omits one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Quantization width of each PCM sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum BitDepth {
    /// 16-bit signed PCM.
    #[default]
    Sixteen,
    /// 24-bit signed PCM, packed as 3 bytes.
    TwentyFour,
}

impl BitDepth {
    /// Number of bits per sample.
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
        }
    }

    /// Number of bytes each sample occupies in the payload.
    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Largest positive code point, used for both polarities.
    ///
    /// `-max_magnitude()` is the most negative value ever emitted; the extra
    /// negative code point of the two's complement range stays unused.
    pub fn max_magnitude(self) -> i32 {
        match self {
            BitDepth::Sixteen => 32767,
            BitDepth::TwentyFour => 8_388_607,
        }
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = String;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            other => Err(format!("unsupported bit depth {} (expected 16 or 24)", other)),
        }
    }
}

impl From<BitDepth> for u16 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Audio format shared by every stage of one render session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Number of output channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bit_depth: BitDepth,
}

impl AudioFormat {
    /// Creates a new audio format.
    pub fn new(channels: u16, sample_rate: u32, bit_depth: BitDepth) -> Self {
        Self {
            channels,
            sample_rate,
            bit_depth,
        }
    }

    /// Creates a 16-bit mono format.
    pub fn mono(sample_rate: u32) -> Self {
        Self::new(1, sample_rate, BitDepth::Sixteen)
    }

    /// Creates a 16-bit stereo format.
    pub fn stereo(sample_rate: u32) -> Self {
        Self::new(2, sample_rate, BitDepth::Sixteen)
    }

    /// Returns true for two-channel output.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Bytes per sample frame (all channels).
    pub fn block_align(&self) -> u16 {
        self.channels * self.bit_depth.bytes() as u16
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Nyquist limit in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self::mono(DEFAULT_SAMPLE_RATE)
    }
}

/// Converts a duration in seconds to a whole number of samples.
///
/// Rounds to the nearest sample; negative or non-finite input yields 0.
pub fn seconds_to_samples(seconds: f64, sample_rate: u32) -> usize {
    let samples = (seconds * sample_rate as f64).round();
    if samples.is_finite() && samples > 0.0 {
        samples as usize
    } else {
        0
    }
}
