//! Tests for the running mix buffer.

use super::*;

#[test]
fn test_new_mix_is_empty() {
    let mix = MixState::new();
    assert!(mix.is_empty());
    assert_eq!(mix.len(), 0);
}

#[test]
fn test_sum_into_empty_copies_buffer() {
    let mut mix = MixState::new();
    mix.sum(&[0.1, -0.2, 0.3]);
    assert_eq!(mix.samples(), &[0.1, -0.2, 0.3]);
}

#[test]
fn test_sum_grows_to_longest() {
    let mut mix = MixState::new();
    mix.sum(&[1.0, 1.0]);
    mix.sum(&[0.5, 0.5, 0.5, 0.5]);
    assert_eq!(mix.samples(), &[1.5, 1.5, 0.5, 0.5]);

    // Shorter buffers never shrink the mix.
    mix.sum(&[0.25]);
    assert_eq!(mix.samples(), &[1.75, 1.5, 0.5, 0.5]);
}

#[test]
fn test_sum_empty_buffer_is_noop() {
    let mut mix = MixState::new();
    mix.sum(&[0.5; 3]);
    mix.sum(&[]);
    assert_eq!(mix.samples(), &[0.5; 3]);
}

#[test]
fn test_sum_is_commutative() {
    let a = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let b = vec![-0.3, 0.7];

    let mut ab = MixState::new();
    ab.sum(&a);
    ab.sum(&b);

    let mut ba = MixState::new();
    ba.sum(&b);
    ba.sum(&a);

    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 5);
    for i in 0..5 {
        let expected = a[i] + b.get(i).copied().unwrap_or(0.0);
        assert_eq!(ab.samples()[i], expected);
    }
}

#[test]
fn test_sum_does_not_normalize() {
    let mut mix = MixState::new();
    mix.sum(&[0.8, -0.8]);
    mix.sum(&[0.8, -0.8]);
    assert_eq!(mix.samples(), &[1.6, -1.6]);
}

#[test]
fn test_sum_scaled_applies_gain() {
    let mut mix = MixState::new();
    mix.sum_scaled(&[1.0, -1.0, 0.5], 0.5);
    assert_eq!(mix.samples(), &[0.5, -0.5, 0.25]);
}

#[test]
fn test_into_samples() {
    let mut mix = MixState::new();
    mix.sum(&[0.25, 0.5]);
    assert_eq!(mix.into_samples(), vec![0.25, 0.5]);
}

#[test]
fn test_sum_matches_unity_sum_scaled_bit_for_bit() {
    let a: Vec<f64> = (0..64).map(|i| (i as f64 * 0.37).sin() * 0.9).collect();
    let b: Vec<f64> = (0..40).map(|i| (i as f64 * 1.3).cos() * 0.4).collect();

    let mut plain = MixState::new();
    plain.sum(&a);
    plain.sum(&b);

    let mut scaled = MixState::new();
    scaled.sum_scaled(&a, 1.0);
    scaled.sum_scaled(&b, 1.0);

    let bits = |m: &MixState| m.samples().iter().map(|s| s.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&plain), bits(&scaled));
}
