//! Mixer output types.

/// Stereo audio output.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoOutput {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoOutput {
    /// Creates a stereo output from two channel buffers.
    pub fn new(left: Vec<f64>, right: Vec<f64>) -> Self {
        Self { left, right }
    }

    /// Creates interleaved stereo samples `[l0, r0, l1, r1, ...]`.
    ///
    /// Stops at the shorter channel.
    pub fn interleave(&self) -> Vec<f64> {
        let mut output = Vec::with_capacity(self.len() * 2);
        for (l, r) in self.left.iter().zip(self.right.iter()) {
            output.push(*l);
            output.push(*r);
        }
        output
    }

    /// Gets the number of complete sample frames.
    pub fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output from the mixer (mono or stereo).
#[derive(Debug, Clone, PartialEq)]
pub enum MixerOutput {
    /// Mono output.
    Mono(Vec<f64>),
    /// Stereo output.
    Stereo(StereoOutput),
}

impl MixerOutput {
    /// Returns true if this is stereo output.
    pub fn is_stereo(&self) -> bool {
        matches!(self, MixerOutput::Stereo(_))
    }

    /// Number of output channels.
    pub fn channels(&self) -> u16 {
        if self.is_stereo() {
            2
        } else {
            1
        }
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        match self {
            MixerOutput::Mono(samples) => samples.len(),
            MixerOutput::Stereo(stereo) => stereo.len(),
        }
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flattens to the sample order written to the container.
    pub fn into_interleaved(self) -> Vec<f64> {
        match self {
            MixerOutput::Mono(samples) => samples,
            MixerOutput::Stereo(stereo) => stereo.interleave(),
        }
    }
}
