//! Noise random streams using PCG32.
//!
//! All randomness in a render session flows through one [`NoiseSource`]. The
//! session's [`NoisePolicy`] decides how streams are seeded:
//!
//! - `Entropy`: one stream per session, seeded once from OS entropy. Successive
//!   noise oscillators continue the same stream.
//! - `Seeded`: every oscillator gets an independent stream whose seed is derived
//!   from the base seed and the oscillator index with BLAKE3.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wavsmith_spec::{derive_oscillator_seed, NoisePolicy};

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Per-session supplier of noise streams.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    policy: NoisePolicy,
    rng: Pcg32,
}

impl NoiseSource {
    /// Creates a noise source for one render session.
    pub fn new(policy: NoisePolicy) -> Self {
        let rng = match policy {
            NoisePolicy::Entropy => Pcg32::from_entropy(),
            NoisePolicy::Seeded { seed } => create_rng(seed),
        };
        Self { policy, rng }
    }

    /// Returns the policy this source was created with.
    pub fn policy(&self) -> NoisePolicy {
        self.policy
    }

    /// Returns the stream the oscillator at `oscillator_index` draws from.
    ///
    /// Under `Seeded` the stream is reset to the oscillator's derived seed, so
    /// the result does not depend on what earlier oscillators consumed.
    pub fn stream_for(&mut self, oscillator_index: u32) -> &mut Pcg32 {
        if let NoisePolicy::Seeded { seed } = self.policy {
            self.rng = create_rng(derive_oscillator_seed(seed, oscillator_index));
        }
        &mut self.rng
    }
}
