//! Payload extraction and hashing.

use super::header::{WavHeader, HEADER_LEN};

/// Extracts the PCM payload from a canonical WAV file.
///
/// Returns `None` if the header does not parse or the file is shorter than
/// the header claims.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    let header = WavHeader::parse(wav_data).ok()?;
    wav_data.get(HEADER_LEN..header.file_len())
}

/// BLAKE3 hex digest of a raw PCM payload.
pub fn hash_pcm(pcm: &[u8]) -> String {
    blake3::hash(pcm).to_hex().to_string()
}

/// Computes the PCM hash of a WAV file.
///
/// # Returns
/// BLAKE3 hash of the payload, or None if the container is invalid
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(hash_pcm)
}
