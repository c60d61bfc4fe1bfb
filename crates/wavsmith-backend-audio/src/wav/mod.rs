//! Canonical PCM RIFF/WAVE container.
//!
//! Files are a fixed 44-byte header followed by the raw interleaved payload.
//! There are no metadata chunks and no extended format chunk, so identical
//! payloads always produce identical files.

mod header;
mod pcm;
mod writer;


pub use header::{read_header, WavHeader, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data, hash_pcm};
pub use writer::{output_path, write_wav, write_wav_file, write_wav_to_vec};
