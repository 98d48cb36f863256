//! Sample message generation.
//!
//! When no message is specified, we generate a short text-like sample so
//! the tool runs out of the box. Generation is seeded, so the same seed
//! always produces the same message.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a sample message of text-like words.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `len`: exact length of the generated message in bytes
pub fn generate_sample_message(seed: u64, len: usize) -> String {
    let alphabet = b"abcdefghijklmnopqrstuvwxyz";
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut message = String::with_capacity(len);
    let mut word_left = rng.gen_range(2..=8);

    while message.len() < len {
        if word_left == 0 {
            message.push(' ');
            word_left = rng.gen_range(2..=8);
        } else {
            let idx = rng.gen_range(0..alphabet.len());
            message.push(alphabet[idx] as char);
            word_left -= 1;
        }
    }

    message
}
