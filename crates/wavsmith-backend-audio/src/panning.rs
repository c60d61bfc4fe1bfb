//! Linear stereo panning.
//!
//! Pan runs from -100 (hard left) through 0 (center) to 100 (hard right).
//! Each side is attenuated linearly toward the opposite extreme; the other side
//! stays at full gain. At pan 0 both gains are exactly 1.0, so a centered
//! signal is copied to both channels unchanged.

use crate::mixer::StereoOutput;

/// Per-channel gains for one pan position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGains {
    /// Gain applied to the left channel.
    pub left: f64,
    /// Gain applied to the right channel.
    pub right: f64,
}

impl PanGains {
    /// Computes linear pan gains. Pan is clamped to [-100, 100].
    pub fn linear(pan: f64) -> Self {
        let left = (pan.clamp(0.0, 100.0) - 100.0) * -0.01;
        let right = (pan.clamp(-100.0, 0.0) + 100.0) * 0.01;
        Self { left, right }
    }
}

/// Splits a mono buffer into left and right channels.
pub fn split(mono: &[f64], pan: f64) -> StereoOutput {
    let gains = PanGains::linear(pan);
    let left = mono.iter().map(|&s| s * gains.left).collect();
    let right = mono.iter().map(|&s| s * gains.right).collect();
    StereoOutput::new(left, right)
}

/// Pans a mono buffer into an interleaved `L0 R0 L1 R1 ...` buffer.
pub fn apply(mono: &[f64], pan: f64) -> Vec<f64> {
    let gains = PanGains::linear(pan);
    let mut out = Vec::with_capacity(mono.len() * 2);
    for &sample in mono {
        out.push(sample * gains.left);
        out.push(sample * gains.right);
    }
    out
}
