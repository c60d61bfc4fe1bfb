//! Canonical hashing and seed derivation.
//!
//! - Render spec canonicalization (sorted keys, no whitespace) hashed with BLAKE3
//! - Per-oscillator seed derivation for reproducible noise

use crate::error::SpecError;
use crate::render::RenderSpec;

/// Computes the canonical BLAKE3 hash of a render spec.
///
/// ```text
/// spec_hash = hex(BLAKE3(canonical_json(spec)))
/// ```
///
/// # Example
/// ```
/// use wavsmith_spec::{AudioFormat, OscillatorSpec, RenderSpec, Waveform};
/// use wavsmith_spec::hash::canonical_spec_hash;
///
/// let spec = RenderSpec::new(AudioFormat::mono(44100))
///     .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0));
///
/// let hash = canonical_spec_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &RenderSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &serde_json::Value) -> String {
    let canonical = canonicalize_value(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with object keys sorted and no whitespace.
pub fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(canonicalize_value).collect();
            format!("[{}]", items.join(","))
        }
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let pairs: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| {
                    // Serializing a string key cannot fail.
                    let key = serde_json::Value::String(k.clone()).to_string();
                    format!("{}:{}", key, canonicalize_value(v))
                })
                .collect();
            format!("{{{}}}", pairs.join(","))
        }
        scalar => format_scalar(scalar),
    }
}

fn format_scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Number(n) => match n.as_f64() {
            // Integer-valued floats hash the same as integers.
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Derives a seed for a specific oscillator from the base seed.
///
/// ```text
/// oscillator_seed = truncate_u32(BLAKE3(base_seed || oscillator_index))
/// ```
///
/// # Example
/// ```
/// use wavsmith_spec::hash::derive_oscillator_seed;
///
/// assert_ne!(derive_oscillator_seed(42, 0), derive_oscillator_seed(42, 1));
/// ```
pub fn derive_oscillator_seed(base_seed: u32, oscillator_index: u32) -> u32 {
    let mut input = [0u8; 8];
    input[..4].copy_from_slice(&base_seed.to_le_bytes());
    input[4..].copy_from_slice(&oscillator_index.to_le_bytes());

    let hash = blake3::hash(&input);

    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioFormat, OscillatorSpec, Waveform};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonicalize_sorts_keys() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"b": 1, "a": {"d": [1, 2], "c": "x"}}"#).unwrap();
        assert_eq!(canonicalize_value(&value), r#"{"a":{"c":"x","d":[1,2]},"b":1}"#);
    }

    #[test]
    fn test_integer_valued_floats_match_integers() {
        let a: serde_json::Value = serde_json::from_str(r#"{"x": 1.0}"#).unwrap();
        let b: serde_json::Value = serde_json::from_str(r#"{"x": 1}"#).unwrap();
        assert_eq!(canonical_value_hash(&a), canonical_value_hash(&b));
    }

    #[test]
    fn test_spec_hash_is_stable_and_sensitive() {
        let spec = RenderSpec::new(AudioFormat::mono(44100))
            .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0));
        let same = spec.clone();
        let different = RenderSpec::new(AudioFormat::mono(44100))
            .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 441.0));

        let hash = canonical_spec_hash(&spec).unwrap();
        assert_eq!(hash, canonical_spec_hash(&same).unwrap());
        assert_ne!(hash, canonical_spec_hash(&different).unwrap());
    }

    #[test]
    fn test_oscillator_seed_derivation_consistency() {
        assert_eq!(derive_oscillator_seed(42, 3), derive_oscillator_seed(42, 3));
        assert_ne!(derive_oscillator_seed(42, 3), derive_oscillator_seed(43, 3));
        assert_ne!(derive_oscillator_seed(42, 3), derive_oscillator_seed(42, 4));
    }
}
