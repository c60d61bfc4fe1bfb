//! Running mix buffers and the per-session mixer.

use crate::panning::PanGains;

use super::types::{MixerOutput, StereoOutput};

/// The running master buffer of one channel.
///
/// Grows to the longest buffer summed into it and never shrinks. No
/// normalization is applied; sums may leave [-1, 1] and are clamped later by
/// the quantizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MixState {
    buffer: Vec<f64>,
}

impl MixState {
    /// Creates an empty mix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `buffer` into the mix, zero-padding the mix if `buffer` is longer.
    pub fn sum(&mut self, buffer: &[f64]) {
        self.sum_scaled(buffer, 1.0);
    }

    /// Adds `buffer * gain` into the mix, growing it like [`MixState::sum`].
    pub fn sum_scaled(&mut self, buffer: &[f64], gain: f64) {
        if buffer.len() > self.buffer.len() {
            self.buffer.resize(buffer.len(), 0.0);
        }
        for (acc, &sample) in self.buffer.iter_mut().zip(buffer) {
            *acc += sample * gain;
        }
    }

    /// Current length in samples.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing non-empty has been summed yet.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The mixed samples.
    pub fn samples(&self) -> &[f64] {
        &self.buffer
    }

    /// Consumes the mix and returns its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.buffer
    }
}

/// Mixer owning one [`MixState`] per output channel.
#[derive(Debug, Clone, PartialEq)]
pub enum Mixer {
    /// Single-channel mix; pan is ignored.
    Mono(MixState),
    /// Two-channel mix; every buffer is split by the linear pan law.
    Stereo {
        /// Left channel mix.
        left: MixState,
        /// Right channel mix.
        right: MixState,
    },
}

impl Mixer {
    /// Creates a mixer for `channels` outputs (2 = stereo, anything else = mono).
    pub fn new(channels: u16) -> Self {
        if channels == 2 {
            Mixer::Stereo {
                left: MixState::new(),
                right: MixState::new(),
            }
        } else {
            Mixer::Mono(MixState::new())
        }
    }

    /// Adds one oscillator buffer at the given pan position.
    ///
    /// # Arguments
    /// * `buffer` - Oscillator samples, pre-delay included
    /// * `pan` - -100 (left) to 100 (right); unused for mono
    pub fn add(&mut self, buffer: &[f64], pan: f64) {
        match self {
            Mixer::Mono(mix) => mix.sum(buffer),
            Mixer::Stereo { left, right } => {
                let gains = PanGains::linear(pan);
                left.sum_scaled(buffer, gains.left);
                right.sum_scaled(buffer, gains.right);
            }
        }
    }

    /// Returns whether the mixer produces stereo output.
    pub fn is_stereo(&self) -> bool {
        matches!(self, Mixer::Stereo { .. })
    }

    /// Current length in samples per channel.
    pub fn len(&self) -> usize {
        match self {
            Mixer::Mono(mix) => mix.len(),
            Mixer::Stereo { left, right } => left.len().min(right.len()),
        }
    }

    /// Returns true if the mix is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the mixer and returns the channel buffers.
    pub fn finish(self) -> MixerOutput {
        match self {
            Mixer::Mono(mix) => MixerOutput::Mono(mix.into_samples()),
            Mixer::Stereo { left, right } => {
                MixerOutput::Stereo(StereoOutput::new(left.into_samples(), right.into_samples()))
            }
        }
    }
}
