//! Wavsmith Audio Engine
//!
//! Renders oscillators into a canonical PCM WAV file. The pipeline runs in
//! five stages, each in its own module:
//!
//! 1. [`synthesis`] generates one buffer per oscillator from the waveform
//!    primitives in [`oscillator`].
//! 2. [`mixer`] sums the buffers, growing to the longest.
//! 3. [`panning`] splits each buffer between left and right on stereo output.
//! 4. [`quantize`] clamps and rounds samples to 16- or 24-bit integers.
//! 5. [`wav`] writes the 44-byte header followed by the payload.
//!
//! # Noise
//!
//! Every waveform except noise is a pure function of the sample index. Noise
//! follows the session's [`NoisePolicy`](wavsmith_spec::NoisePolicy): fresh OS
//! entropy per session by default, or PCG32 streams derived from a seed for
//! reproducible renders.
//!
//! # Example
//!
//! ```
//! use wavsmith_backend_audio::render;
//! use wavsmith_spec::{AudioFormat, OscillatorSpec, RenderSpec, Waveform};
//!
//! let spec = RenderSpec::new(AudioFormat::mono(44100))
//!     .oscillator(OscillatorSpec::tone(Waveform::Sine, 1.0, 440.0));
//! let output = render(&spec).unwrap();
//!
//! assert_eq!(output.wav_data.len(), 44 + 44100 * 2);
//! assert_eq!(&output.wav_data[0..4], b"RIFF");
//! ```

pub mod error;
pub mod mixer;
pub mod oscillator;
pub mod panning;
pub mod quantize;
pub mod render;
pub mod rng;
pub mod synthesis;
pub mod wav;

pub use error::{AudioError, AudioResult};
pub use render::{render, render_to_file, RenderOutput, RenderReport, RenderSession, RenderedFile};
pub use synthesis::generate_oscillator;
