//! Arbitrary bytes must never panic the render spec parser, validator or hasher.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wavsmith_spec::{canonical_spec_hash, validate_render_spec, RenderSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = RenderSpec::from_json(text) else {
        return;
    };

    let result = validate_render_spec(&spec);
    let _ = canonical_spec_hash(&spec);

    if result.is_ok() {
        // Valid specs must serialize back to something that parses.
        let json = spec.to_json_pretty().expect("valid spec serializes");
        let reparsed: serde_json::Value = serde_json::from_str(&json).expect("output is JSON");
        assert!(reparsed.get("oscillators").is_some());
    }
});
