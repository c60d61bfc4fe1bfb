//! Container serialization to writers, buffers and files.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use wavsmith_spec::AudioFormat;

use super::header::{WavHeader, HEADER_LEN};
use crate::error::AudioResult;

/// Writes a complete WAV file to a writer.
///
/// The header is computed from the final payload length before anything is
/// written, so an oversized payload fails without emitting a byte.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - Session format
/// * `pcm_data` - Quantized, interleaved payload
pub fn write_wav<W: Write>(writer: &mut W, format: &AudioFormat, pcm_data: &[u8]) -> AudioResult<()> {
    let header = WavHeader::for_payload(*format, pcm_data.len())?;
    writer.write_all(&header.to_bytes())?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &AudioFormat, pcm_data: &[u8]) -> AudioResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data)?;
    Ok(buffer)
}

/// Returns `path` with a `.wav` extension appended if it has none.
pub fn output_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".wav");
    PathBuf::from(name)
}

/// Writes a WAV file atomically.
///
/// Bytes go to a temporary file next to the destination, which is renamed
/// over the target only once everything has been flushed. On failure the
/// destination is left untouched.
///
/// # Returns
/// The path actually written (see [`output_path`]).
pub fn write_wav_file(path: &Path, format: &AudioFormat, pcm_data: &[u8]) -> AudioResult<PathBuf> {
    let target = output_path(path);
    let header = WavHeader::for_payload(*format, pcm_data.len())?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(file.as_file_mut());
        writer.write_all(&header.to_bytes())?;
        writer.write_all(pcm_data)?;
        writer.flush()?;
    }
    file.as_file().sync_all()?;
    file.persist(&target).map_err(|e| e.error)?;

    Ok(target)
}
