//! Header parsing must reject malformed containers without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wavsmith_backend_audio::wav::{extract_pcm_data, read_header, HEADER_LEN};

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = read_header(data) {
        // Anything accepted must serialize back to the same 44 bytes.
        assert_eq!(&header.to_bytes()[..], &data[..HEADER_LEN]);
    }
    let _ = extract_pcm_data(data);
});
