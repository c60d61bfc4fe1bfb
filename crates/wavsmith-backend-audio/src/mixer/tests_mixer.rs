//! Tests for the per-channel mixer.

use super::*;

// ============================================================================
// Mono Mixing Tests
// ============================================================================

#[test]
fn test_mono_mixer_sums_buffers() {
    let mut mixer = Mixer::new(1);
    mixer.add(&[0.3; 10], 0.0);
    mixer.add(&[0.2; 5], 0.0);

    match mixer.finish() {
        MixerOutput::Mono(samples) => {
            assert_eq!(samples.len(), 10);
            assert!((samples[0] - 0.5).abs() < 1e-12);
            assert!((samples[9] - 0.3).abs() < 1e-12);
        }
        other => panic!("expected mono output, got {:?}", other),
    }
}

#[test]
fn test_mono_mixer_ignores_pan() {
    let mut panned = Mixer::new(1);
    panned.add(&[0.5, -0.5], 100.0);

    let mut centered = Mixer::new(1);
    centered.add(&[0.5, -0.5], 0.0);

    assert_eq!(panned, centered);
}

// ============================================================================
// Stereo Mixing Tests
// ============================================================================

#[test]
fn test_stereo_mixer_center_pan_duplicates() {
    let mut mixer = Mixer::new(2);
    assert!(mixer.is_stereo());
    mixer.add(&[0.3, -0.7, 0.9], 0.0);

    match mixer.finish() {
        MixerOutput::Stereo(stereo) => {
            assert_eq!(stereo.left, vec![0.3, -0.7, 0.9]);
            assert_eq!(stereo.right, vec![0.3, -0.7, 0.9]);
        }
        other => panic!("expected stereo output, got {:?}", other),
    }
}

#[test]
fn test_stereo_mixer_hard_pans() {
    let mut mixer = Mixer::new(2);
    mixer.add(&[1.0; 4], -100.0); // left only
    mixer.add(&[0.5; 2], 100.0); // right only

    match mixer.finish() {
        MixerOutput::Stereo(stereo) => {
            assert_eq!(stereo.left, vec![1.0; 4]);
            assert_eq!(stereo.right, vec![0.5, 0.5, 0.0, 0.0]);
        }
        other => panic!("expected stereo output, got {:?}", other),
    }
}

#[test]
fn test_stereo_mixer_partial_pan() {
    let mut mixer = Mixer::new(2);
    mixer.add(&[1.0], 50.0);

    match mixer.finish() {
        MixerOutput::Stereo(stereo) => {
            assert!((stereo.left[0] - 0.5).abs() < 1e-12);
            assert_eq!(stereo.right[0], 1.0);
        }
        other => panic!("expected stereo output, got {:?}", other),
    }
}

#[test]
fn test_stereo_channels_grow_together() {
    let mut mixer = Mixer::new(2);
    mixer.add(&[0.1; 3], -100.0);
    mixer.add(&[0.1; 7], 100.0);
    assert_eq!(mixer.len(), 7);

    let stereo = match mixer.finish() {
        MixerOutput::Stereo(stereo) => stereo,
        other => panic!("expected stereo output, got {:?}", other),
    };
    assert_eq!(stereo.left.len(), stereo.right.len());
}

#[test]
fn test_empty_mixer() {
    let mixer = Mixer::new(2);
    assert!(mixer.is_empty());
    assert!(mixer.finish().is_empty());
}
