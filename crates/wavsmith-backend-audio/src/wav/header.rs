//! The 44-byte canonical header.

use wavsmith_spec::validation::MAX_PAYLOAD_BYTES;
use wavsmith_spec::{AudioFormat, BitDepth};

use crate::error::{AudioError, AudioResult};

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// Size of the PCM `fmt ` chunk body.
const FMT_CHUNK_SIZE: u32 = 16;

/// Audio format code for integer PCM.
const FORMAT_PCM: u16 = 1;

/// Header fields derived from the session format and payload size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Session format.
    pub format: AudioFormat,
    /// Payload length in bytes (`data` chunk size).
    pub data_size: u32,
}

impl WavHeader {
    /// Builds the header for a payload of `payload_len` bytes.
    ///
    /// Fails with [`AudioError::PayloadTooLarge`] if the RIFF chunk size would
    /// overflow 32 bits.
    pub fn for_payload(format: AudioFormat, payload_len: usize) -> AudioResult<Self> {
        let bytes = payload_len as u64;
        if bytes > MAX_PAYLOAD_BYTES {
            return Err(AudioError::PayloadTooLarge { bytes });
        }
        Ok(Self {
            format,
            data_size: bytes as u32,
        })
    }

    /// RIFF chunk size: everything after the first 8 bytes.
    pub fn riff_size(&self) -> u32 {
        self.data_size + 36
    }

    /// Total file length in bytes.
    pub fn file_len(&self) -> usize {
        HEADER_LEN + self.data_size as usize
    }

    /// Number of sample frames in the payload.
    pub fn frames(&self) -> usize {
        self.data_size as usize / self.format.block_align() as usize
    }

    /// Serializes the header.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let f = &self.format;
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&self.riff_size().to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        out[20..22].copy_from_slice(&FORMAT_PCM.to_le_bytes());
        out[22..24].copy_from_slice(&f.channels.to_le_bytes());
        out[24..28].copy_from_slice(&f.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&f.byte_rate().to_le_bytes());
        out[32..34].copy_from_slice(&f.block_align().to_le_bytes());
        out[34..36].copy_from_slice(&f.bit_depth.bits().to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }

    /// Parses a canonical header from the start of `bytes`.
    ///
    /// Rejects anything this crate would not have written: wrong magic, a
    /// non-PCM format code, unsupported channel counts or bit depths, and
    /// derived fields that disagree with each other.
    pub fn parse(bytes: &[u8]) -> AudioResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(AudioError::invalid_container(format!(
                "expected at least {} header bytes, got {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        expect_tag(bytes, 0, b"RIFF")?;
        expect_tag(bytes, 8, b"WAVE")?;
        expect_tag(bytes, 12, b"fmt ")?;
        expect_tag(bytes, 36, b"data")?;

        let fmt_size = read_u32(bytes, 16);
        if fmt_size != FMT_CHUNK_SIZE {
            return Err(AudioError::invalid_container(format!(
                "fmt chunk size must be {}, got {}",
                FMT_CHUNK_SIZE, fmt_size
            )));
        }

        let format_code = read_u16(bytes, 20);
        if format_code != FORMAT_PCM {
            return Err(AudioError::invalid_container(format!(
                "audio format code must be {} (PCM), got {}",
                FORMAT_PCM, format_code
            )));
        }

        let channels = read_u16(bytes, 22);
        if !(1..=2).contains(&channels) {
            return Err(AudioError::invalid_container(format!(
                "unsupported channel count {}",
                channels
            )));
        }

        let bits = read_u16(bytes, 34);
        let bit_depth = BitDepth::try_from(bits).map_err(AudioError::invalid_container)?;

        let format = AudioFormat::new(channels, read_u32(bytes, 24), bit_depth);
        let byte_rate = read_u32(bytes, 28);
        let expected_rate = format.sample_rate as u64 * format.block_align() as u64;
        if byte_rate as u64 != expected_rate {
            return Err(AudioError::invalid_container(format!(
                "byte rate {} does not match format (expected {})",
                byte_rate, expected_rate
            )));
        }
        if read_u16(bytes, 32) != format.block_align() {
            return Err(AudioError::invalid_container(format!(
                "block align {} does not match format (expected {})",
                read_u16(bytes, 32),
                format.block_align()
            )));
        }

        let data_size = read_u32(bytes, 40);
        let riff_size = read_u32(bytes, 4);
        if riff_size as u64 != data_size as u64 + 36 {
            return Err(AudioError::invalid_container(format!(
                "RIFF size {} does not match data size {}",
                riff_size, data_size
            )));
        }

        Ok(Self { format, data_size })
    }
}

/// Parses the canonical header of a WAV file.
pub fn read_header(bytes: &[u8]) -> AudioResult<WavHeader> {
    WavHeader::parse(bytes)
}

fn expect_tag(bytes: &[u8], offset: usize, tag: &[u8; 4]) -> AudioResult<()> {
    if &bytes[offset..offset + 4] == tag {
        Ok(())
    } else {
        Err(AudioError::invalid_container(format!(
            "expected {:?} at offset {}",
            String::from_utf8_lossy(tag),
            offset
        )))
    }
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
