//! Credential hashing primitives for the Wicket server.

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub mod argon2;
pub mod future;

/// Gets the default RNG (random number generator) for the Wicket server
/// which is [`ChaCha20Rng`]. It generates secure numbers while keeping
/// good performance, which matters on a per-request path.
pub fn default_rng() -> ChaCha20Rng {
    ChaCha20Rng::from_entropy()
}
