//! Tests for StereoOutput and MixerOutput.

use super::*;

#[test]
fn test_interleave() {
    let stereo = StereoOutput::new(vec![1.0, 2.0, 3.0], vec![-1.0, -2.0, -3.0]);
    assert_eq!(stereo.interleave(), vec![1.0, -1.0, 2.0, -2.0, 3.0, -3.0]);
}

#[test]
fn test_interleave_truncates_to_shorter_channel() {
    let stereo = StereoOutput::new(vec![1.0, 2.0, 3.0], vec![-1.0]);
    assert_eq!(stereo.len(), 1);
    assert_eq!(stereo.interleave(), vec![1.0, -1.0]);
}

#[test]
fn test_empty_stereo() {
    let stereo = StereoOutput::new(vec![], vec![]);
    assert!(stereo.is_empty());
    assert!(stereo.interleave().is_empty());
}

#[test]
fn test_mixer_output_mono_passthrough() {
    let output = MixerOutput::Mono(vec![0.1, 0.2]);
    assert!(!output.is_stereo());
    assert_eq!(output.channels(), 1);
    assert_eq!(output.len(), 2);
    assert_eq!(output.into_interleaved(), vec![0.1, 0.2]);
}

#[test]
fn test_mixer_output_stereo_interleaves() {
    let output = MixerOutput::Stereo(StereoOutput::new(vec![0.1, 0.2], vec![0.3, 0.4]));
    assert!(output.is_stereo());
    assert_eq!(output.channels(), 2);
    assert_eq!(output.len(), 2);
    assert_eq!(output.into_interleaved(), vec![0.1, 0.3, 0.2, 0.4]);
}
