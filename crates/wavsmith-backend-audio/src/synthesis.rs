//! Oscillator synthesis: turns one [`OscillatorSpec`] into a sample buffer.
//!
//! The buffer starts with `round(pre_delay_seconds * sample_rate)` zeros
//! followed by `round(duration_seconds * sample_rate)` waveform samples.

use rand::Rng;
use rand_pcg::Pcg32;
use wavsmith_spec::{ErrorCode, OscillatorSpec, ValidationError, Waveform};

use crate::error::{AudioError, AudioResult};
use crate::oscillator;

/// Common trait for waveform generators.
pub trait Synthesizer {
    /// Generates audio samples.
    ///
    /// # Arguments
    /// * `num_samples` - Number of samples to generate
    /// * `sample_rate` - Audio sample rate in Hz
    /// * `rng` - Random stream for noise
    fn synthesize(&self, num_samples: usize, sample_rate: u32, rng: &mut Pcg32) -> Vec<f64>;
}

/// A periodic waveform at a fixed frequency and amplitude.
#[derive(Debug, Clone, Copy)]
pub struct PeriodicSynth {
    /// Waveform evaluated per sample.
    pub shape: fn(f64, f64, f64) -> f64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Peak amplitude.
    pub amplitude: f64,
}

impl Synthesizer for PeriodicSynth {
    fn synthesize(&self, num_samples: usize, sample_rate: u32, _rng: &mut Pcg32) -> Vec<f64> {
        let period = oscillator::period_samples(sample_rate, self.frequency);
        (0..num_samples)
            .map(|x| (self.shape)(x as f64, period, self.amplitude))
            .collect()
    }
}

/// Uniform white noise in `[-amplitude, amplitude]`.
#[derive(Debug, Clone, Copy)]
pub struct NoiseSynth {
    /// Peak amplitude.
    pub amplitude: f64,
}

impl Synthesizer for NoiseSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: u32, rng: &mut Pcg32) -> Vec<f64> {
        (0..num_samples)
            .map(|_| self.amplitude * rng.gen_range(-1.0..=1.0))
            .collect()
    }
}

/// Digital silence.
#[derive(Debug, Clone, Copy)]
pub struct SilenceSynth;

impl Synthesizer for SilenceSynth {
    fn synthesize(&self, num_samples: usize, _sample_rate: u32, _rng: &mut Pcg32) -> Vec<f64> {
        vec![0.0; num_samples]
    }
}

/// Picks the generator for an oscillator's shape.
fn synth_for(osc: &OscillatorSpec) -> AudioResult<Box<dyn Synthesizer>> {
    let amplitude = osc.amplitude();

    let shape: fn(f64, f64, f64) -> f64 = match osc.shape {
        Waveform::Noise => return Ok(Box::new(NoiseSynth { amplitude })),
        Waveform::Silence => return Ok(Box::new(SilenceSynth)),
        Waveform::Sine => oscillator::sine,
        Waveform::Triangle => oscillator::triangle,
        Waveform::Square => oscillator::square,
        Waveform::Saw => oscillator::saw,
        Waveform::SawReverse => oscillator::saw_reverse,
    };

    let frequency = match osc.frequency_hz {
        Some(f) if f.is_finite() && f > 0.0 => f,
        other => {
            return Err(AudioError::configuration(ValidationError::with_path(
                ErrorCode::InvalidFrequency,
                format!(
                    "{} oscillator requires a positive frequency, got {:?}",
                    osc.shape, other
                ),
                "frequency_hz",
            )))
        }
    };

    Ok(Box::new(PeriodicSynth {
        shape,
        frequency,
        amplitude,
    }))
}

/// Generates the full buffer for one oscillator, pre-delay included.
///
/// # Arguments
/// * `osc` - Oscillator parameters
/// * `sample_rate` - Session sample rate in Hz
/// * `rng` - Random stream, consumed only by noise
///
/// # Returns
/// `pre_delay_samples + duration_samples` samples, the first
/// `pre_delay_samples` of which are exactly zero.
pub fn generate_oscillator(
    osc: &OscillatorSpec,
    sample_rate: u32,
    rng: &mut Pcg32,
) -> AudioResult<Vec<f64>> {
    let synth = synth_for(osc)?;
    let pre_delay = osc.pre_delay_samples(sample_rate);
    let duration = osc.duration_samples(sample_rate);

    let mut output = Vec::with_capacity(pre_delay + duration);
    output.resize(pre_delay, 0.0);
    output.extend(synth.synthesize(duration, sample_rate, rng));
    Ok(output)
}
