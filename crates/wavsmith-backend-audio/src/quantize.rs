//! Float to integer PCM quantization.
//!
//! Samples are clamped to [-1.0, 1.0], scaled by the bit depth's maximum
//! magnitude and rounded half away from zero. Clamping is silent; callers
//! that care can read the count from [`QuantizeStats`].

use wavsmith_spec::BitDepth;

/// Summary of one quantization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuantizeStats {
    /// Largest absolute input sample, before clamping.
    pub peak: f64,
    /// Number of samples outside [-1.0, 1.0].
    pub clamped_samples: u64,
}

impl QuantizeStats {
    fn record(&mut self, sample: f64) {
        let magnitude = sample.abs();
        if magnitude > self.peak {
            self.peak = magnitude;
        }
        if magnitude > 1.0 {
            self.clamped_samples += 1;
        }
    }
}

/// Quantizes one sample to a signed integer at `depth`.
///
/// NaN quantizes to zero.
#[inline]
pub fn quantize_sample(sample: f64, depth: BitDepth) -> i32 {
    if sample.is_nan() {
        return 0;
    }
    let clamped = sample.clamp(-1.0, 1.0);
    (clamped * depth.max_magnitude() as f64).round() as i32
}

/// Quantizes a buffer of samples.
pub fn quantize(samples: &[f64], depth: BitDepth) -> Vec<i32> {
    samples.iter().map(|&s| quantize_sample(s, depth)).collect()
}

/// Encodes samples as little-endian signed PCM bytes.
///
/// 16-bit samples take two bytes and 24-bit samples take three, the low three
/// bytes of the two's-complement value.
pub fn encode_pcm(samples: &[f64], depth: BitDepth) -> Vec<u8> {
    encode_pcm_with_stats(samples, depth).0
}

/// Like [`encode_pcm`], also returning peak and clamp statistics.
pub fn encode_pcm_with_stats(samples: &[f64], depth: BitDepth) -> (Vec<u8>, QuantizeStats) {
    let mut stats = QuantizeStats::default();
    let mut pcm = Vec::with_capacity(samples.len() * depth.bytes());

    for &sample in samples {
        stats.record(sample);
        let value = quantize_sample(sample, depth);
        match depth {
            BitDepth::Sixteen => pcm.extend_from_slice(&(value as i16).to_le_bytes()),
            BitDepth::TwentyFour => pcm.extend_from_slice(&value.to_le_bytes()[..3]),
        }
    }

    (pcm, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quantize_16bit_extremes() {
        assert_eq!(quantize_sample(1.0, BitDepth::Sixteen), 32767);
        assert_eq!(quantize_sample(-1.0, BitDepth::Sixteen), -32767);
        assert_eq!(quantize_sample(0.0, BitDepth::Sixteen), 0);
        assert_eq!(quantize_sample(0.5, BitDepth::Sixteen), 16384);
    }

    #[test]
    fn test_quantize_24bit_extremes() {
        assert_eq!(quantize_sample(1.0, BitDepth::TwentyFour), 8_388_607);
        assert_eq!(quantize_sample(-1.0, BitDepth::TwentyFour), -8_388_607);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(quantize_sample(3.5, BitDepth::Sixteen), 32767);
        assert_eq!(quantize_sample(-7.0, BitDepth::Sixteen), -32767);
        assert_eq!(quantize_sample(f64::INFINITY, BitDepth::TwentyFour), 8_388_607);
        assert_eq!(quantize_sample(f64::NAN, BitDepth::Sixteen), 0);
    }

    #[test]
    fn test_encode_16bit_little_endian() {
        let pcm = encode_pcm(&[1.0, -1.0, 0.0], BitDepth::Sixteen);
        assert_eq!(pcm, vec![0xFF, 0x7F, 0x01, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_encode_24bit_little_endian() {
        let pcm = encode_pcm(&[1.0, -1.0, 0.0], BitDepth::TwentyFour);
        assert_eq!(
            pcm,
            vec![0xFF, 0xFF, 0x7F, 0x01, 0x00, 0x80, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn test_encode_length() {
        let samples = vec![0.25; 100];
        assert_eq!(encode_pcm(&samples, BitDepth::Sixteen).len(), 200);
        assert_eq!(encode_pcm(&samples, BitDepth::TwentyFour).len(), 300);
    }

    #[test]
    fn test_stats_count_clamped_samples() {
        let (_, stats) = encode_pcm_with_stats(&[0.5, 1.5, -2.0, 1.0, -0.1], BitDepth::Sixteen);
        assert_eq!(stats.clamped_samples, 2);
        assert_eq!(stats.peak, 2.0);
    }

    #[test]
    fn test_quantize_buffer() {
        assert_eq!(quantize(&[0.0, 1.0, -1.0], BitDepth::Sixteen), vec![0, 32767, -32767]);
    }
}
