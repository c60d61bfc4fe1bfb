//! Oscillator types: waveform shapes and per-oscillator parameters.

use serde::{Deserialize, Serialize};

use crate::format::seconds_to_samples;

/// Longest accepted oscillator duration or pre-delay, in seconds.
pub const MAX_SECONDS: f64 = 2000.0;
/// Largest accepted amplitude, as a percentage of full scale.
pub const MAX_AMPLITUDE_PERCENT: f64 = 1000.0;
/// Magnitude of the pan range; pan lies in [-MAX_PAN, MAX_PAN].
pub const MAX_PAN: f64 = 100.0;

/// Waveform shape of one oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Triangle wave.
    Triangle,
    /// Bipolar square wave.
    Square,
    /// Rising sawtooth.
    Saw,
    /// Falling sawtooth.
    SawReverse,
    /// Uniform white noise.
    Noise,
    /// Digital silence.
    Silence,
}

impl Waveform {
    /// All shapes, in declaration order.
    pub const ALL: [Waveform; 7] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Square,
        Waveform::Saw,
        Waveform::SawReverse,
        Waveform::Noise,
        Waveform::Silence,
    ];

    /// Returns true if this shape is periodic and therefore needs a frequency.
    pub fn needs_frequency(self) -> bool {
        !matches!(self, Waveform::Noise | Waveform::Silence)
    }

    /// Returns the snake_case name used in render specs.
    pub fn as_str(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
            Waveform::SawReverse => "saw_reverse",
            Waveform::Noise => "noise",
            Waveform::Silence => "silence",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown waveform '{}' (expected one of: sine, triangle, square, saw, saw_reverse, noise, silence)",
                    s
                )
            })
    }
}

/// Parameters for a single oscillator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OscillatorSpec {
    /// Waveform shape.
    pub shape: Waveform,
    /// Length of the waveform in seconds (excluding pre-delay).
    pub duration_seconds: f64,
    /// Frequency in Hz. Required for periodic shapes, ignored for noise and silence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency_hz: Option<f64>,
    /// Amplitude as a percentage of full scale (100 = 1.0).
    #[serde(default = "default_amplitude_percent")]
    pub amplitude_percent: f64,
    /// Silence prepended before the waveform starts, in seconds.
    #[serde(default)]
    pub pre_delay_seconds: f64,
    /// Stereo position, -100 (left) to 100 (right). Ignored for mono output.
    #[serde(default)]
    pub pan: f64,
}

fn default_amplitude_percent() -> f64 {
    100.0
}

impl OscillatorSpec {
    /// Creates a periodic oscillator at full amplitude.
    pub fn tone(shape: Waveform, duration_seconds: f64, frequency_hz: f64) -> Self {
        Self {
            shape,
            duration_seconds,
            frequency_hz: Some(frequency_hz),
            amplitude_percent: 100.0,
            pre_delay_seconds: 0.0,
            pan: 0.0,
        }
    }

    /// Creates a white noise oscillator at full amplitude.
    pub fn noise(duration_seconds: f64) -> Self {
        Self {
            shape: Waveform::Noise,
            duration_seconds,
            frequency_hz: None,
            amplitude_percent: 100.0,
            pre_delay_seconds: 0.0,
            pan: 0.0,
        }
    }

    /// Creates a silent oscillator.
    pub fn silence(duration_seconds: f64) -> Self {
        Self {
            shape: Waveform::Silence,
            ..Self::noise(duration_seconds)
        }
    }

    /// Sets the amplitude as a percentage of full scale.
    pub fn with_amplitude_percent(mut self, percent: f64) -> Self {
        self.amplitude_percent = percent;
        self
    }

    /// Sets the pre-delay in seconds.
    pub fn with_pre_delay(mut self, seconds: f64) -> Self {
        self.pre_delay_seconds = seconds;
        self
    }

    /// Sets the stereo pan.
    pub fn with_pan(mut self, pan: f64) -> Self {
        self.pan = pan;
        self
    }

    /// Normalized amplitude (percentage / 100).
    pub fn amplitude(&self) -> f64 {
        self.amplitude_percent / 100.0
    }

    /// Number of leading zero samples.
    pub fn pre_delay_samples(&self, sample_rate: u32) -> usize {
        seconds_to_samples(self.pre_delay_seconds, sample_rate)
    }

    /// Number of waveform samples after the pre-delay.
    pub fn duration_samples(&self, sample_rate: u32) -> usize {
        seconds_to_samples(self.duration_seconds, sample_rate)
    }

    /// Total rendered length in samples (pre-delay plus duration).
    pub fn total_samples(&self, sample_rate: u32) -> usize {
        self.pre_delay_samples(sample_rate) + self.duration_samples(sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_waveform_serde_names() {
        let json = serde_json::to_string(&Waveform::SawReverse).unwrap();
        assert_eq!(json, "\"saw_reverse\"");

        for shape in Waveform::ALL {
            let parsed: Waveform = shape.as_str().parse().unwrap();
            assert_eq!(parsed, shape);
        }

        assert!("pulse".parse::<Waveform>().is_err());
    }

    #[test]
    fn test_needs_frequency() {
        assert!(Waveform::Sine.needs_frequency());
        assert!(Waveform::SawReverse.needs_frequency());
        assert!(!Waveform::Noise.needs_frequency());
        assert!(!Waveform::Silence.needs_frequency());
    }

    #[test]
    fn test_oscillator_defaults_from_json() {
        let osc: OscillatorSpec =
            serde_json::from_str(r#"{"shape": "sine", "duration_seconds": 1.0, "frequency_hz": 440.0}"#)
                .unwrap();
        assert_eq!(osc, OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0));
        assert_eq!(osc.amplitude(), 1.0);
    }

    #[test]
    fn test_oscillator_rejects_unknown_fields() {
        let result = serde_json::from_str::<OscillatorSpec>(
            r#"{"shape": "noise", "duration_seconds": 1.0, "volume": 0.5}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_amplitude_percent_scaling() {
        let osc = OscillatorSpec::noise(1.0).with_amplitude_percent(250.0);
        assert_eq!(osc.amplitude(), 2.5);
    }

    #[test]
    fn test_sample_counts() {
        let osc = OscillatorSpec::tone(Waveform::Square, 0.5, 100.0).with_pre_delay(0.25);
        assert_eq!(osc.pre_delay_samples(8000), 2000);
        assert_eq!(osc.duration_samples(8000), 4000);
        assert_eq!(osc.total_samples(8000), 6000);
    }
}
