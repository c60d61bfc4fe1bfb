//! Additive mixing of oscillator buffers.
//!
//! [`MixState`] is the running master buffer of one channel. [`Mixer`] owns one
//! `MixState` per output channel and routes each oscillator through the pan
//! law when the session is stereo.

#[allow(clippy::module_inception)]
mod mixer;
mod types;

#[cfg(test)]
mod tests_mix_state;
#[cfg(test)]
mod tests_mixer;
#[cfg(test)]
mod tests_stereo_output;

// Re-export public API
pub use mixer::{MixState, Mixer};
pub use types::{MixerOutput, StereoOutput};
