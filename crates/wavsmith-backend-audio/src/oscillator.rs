//! Waveform primitives.
//!
//! Each function evaluates one shape at sample index `x` (counted from the end
//! of the pre-delay) for a waveform whose period is `period` samples long.
//! Phase is a pure function of `x`, so a buffer can be generated in any order
//! and stays phase-consistent regardless of its length.

use std::f64::consts::PI;

/// Two times PI.
pub const TWO_PI: f64 = 2.0 * PI;

/// Period of a waveform in samples.
#[inline]
pub fn period_samples(sample_rate: u32, frequency: f64) -> f64 {
    sample_rate as f64 / frequency
}

/// Sine: `amplitude * sin(2π·x / period)`.
#[inline]
pub fn sine(x: f64, period: f64, amplitude: f64) -> f64 {
    amplitude * (TWO_PI * x / period).sin()
}

/// Triangle starting at zero and rising to `amplitude` a quarter period in.
#[inline]
pub fn triangle(x: f64, period: f64, amplitude: f64) -> f64 {
    let shifted = (x + period - period / 4.0).rem_euclid(period);
    (4.0 * amplitude / period) * (shifted - period / 2.0).abs() - amplitude
}

/// Bipolar square: `+amplitude` over the first half of each period (both ends
/// included), `-amplitude` over the rest.
///
/// The sign comes from the phase rather than from `sin`, which is slightly
/// negative at exact multiples of 2π. Never returns zero for a non-zero
/// amplitude.
#[inline]
pub fn square(x: f64, period: f64, amplitude: f64) -> f64 {
    if x.rem_euclid(period) <= period / 2.0 {
        amplitude
    } else {
        -amplitude
    }
}

/// Rising sawtooth from `-amplitude` to just below `+amplitude`.
#[inline]
pub fn saw(x: f64, period: f64, amplitude: f64) -> f64 {
    2.0 * amplitude * (x.rem_euclid(period) / period - 0.5)
}

/// Falling sawtooth; exactly the negation of [`saw`].
#[inline]
pub fn saw_reverse(x: f64, period: f64, amplitude: f64) -> f64 {
    -saw(x, period, amplitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_period_samples() {
        assert_eq!(period_samples(44100, 441.0), 100.0);
        assert_eq!(period_samples(8000, 1000.0), 8.0);
    }

    #[test]
    fn test_sine_quarter_points() {
        let p = 8.0;
        assert!(sine(0.0, p, 1.0).abs() < EPS);
        assert!((sine(2.0, p, 0.5) - 0.5).abs() < EPS);
        assert!(sine(4.0, p, 1.0).abs() < EPS);
        assert!((sine(6.0, p, 1.0) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_shape() {
        let p = 8.0;
        assert!(triangle(0.0, p, 1.0).abs() < EPS);
        assert!((triangle(1.0, p, 1.0) - 0.5).abs() < EPS);
        assert!((triangle(2.0, p, 1.0) - 1.0).abs() < EPS);
        assert!(triangle(4.0, p, 1.0).abs() < EPS);
        assert!((triangle(6.0, p, 1.0) + 1.0).abs() < EPS);
        // Periodic
        assert!((triangle(10.0, p, 1.0) - triangle(2.0, p, 1.0)).abs() < EPS);
    }

    #[test]
    fn test_triangle_stays_within_amplitude() {
        let p = 44100.0 / 261.63;
        for x in 0..2000 {
            let v = triangle(x as f64, p, 0.7);
            assert!(v.abs() <= 0.7 + EPS, "x={} v={}", x, v);
        }
    }

    #[test]
    fn test_square_sign_at_zero_is_positive() {
        assert_eq!(square(0.0, 8.0, 0.25), 0.25);
        assert_eq!(square(1.0, 8.0, 0.25), 0.25);
        assert_eq!(square(5.0, 8.0, 0.25), -0.25);
    }

    #[test]
    fn test_square_positive_at_every_cycle_start() {
        for cycle in 0..100 {
            let x = cycle as f64 * 8.0;
            assert_eq!(square(x, 8.0, 1.0), 1.0, "cycle {}", cycle);
        }
        assert_eq!(square(8.0, 8.0, 1.0), 1.0);
        assert_eq!(square(4.0, 8.0, 1.0), 1.0);
    }

    #[test]
    fn test_square_duty_cycle_is_constant() {
        let p = 8.0;
        let positives: Vec<usize> = (0..5)
            .map(|cycle| {
                (0..8)
                    .filter(|i| square((cycle * 8 + i) as f64, p, 1.0) > 0.0)
                    .count()
            })
            .collect();
        assert_eq!(positives, vec![5; 5]);
    }

    #[test]
    fn test_saw_ramp() {
        let p = 4.0;
        assert_eq!(saw(0.0, p, 1.0), -1.0);
        assert_eq!(saw(1.0, p, 1.0), -0.5);
        assert_eq!(saw(2.0, p, 1.0), 0.0);
        assert_eq!(saw(3.0, p, 1.0), 0.5);
        assert_eq!(saw(4.0, p, 1.0), -1.0);
    }

    #[test]
    fn test_saw_reverse_negates_saw() {
        let p = 44100.0 / 440.0;
        for x in 0..500 {
            let x = x as f64;
            assert_eq!(saw(x, p, 0.8), -saw_reverse(x, p, 0.8));
        }
    }
}
