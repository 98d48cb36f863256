//! Binary-symmetric channel simulator.
//!
//! Every transmitted bit is flipped independently with a fixed
//! probability — a memoryless Bernoulli channel with no burst or
//! correlation model.
//!
//! # Determinism
//!
//! All randomness comes from a seeded ChaCha8 RNG. Given the same seed
//! and inputs, flip decisions are bit-identical, which makes noisy runs
//! reproducible.

use crate::error::{ConfigError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration for the simulated channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelConfig {
    /// Per-bit flip probability in [0.0, 1.0]
    pub flip_probability: f64,

    /// Random seed for determinism
    pub seed: u64,
}

impl ChannelConfig {
    /// A channel with no noise (every bit arrives unchanged).
    pub fn perfect(seed: u64) -> Self {
        Self {
            flip_probability: 0.0,
            seed,
        }
    }

    /// Validate the flip probability.
    ///
    /// # Errors
    /// `ConfigError::Probability` if the probability is outside [0, 1]
    /// or not a number.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.flip_probability) {
            return Err(ConfigError::Probability(self.flip_probability).into());
        }
        Ok(())
    }
}

/// A frame after passing through the channel.
///
/// The toggle mask records which positions were flipped. It exists for
/// diagnostic display only — the receive side of the pipeline decodes
/// from `bits` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    /// The received bit values
    pub bits: Vec<u8>,

    /// Per-position flip record, same length as `bits`
    pub toggled: Vec<bool>,
}

impl Transmission {
    /// Positions that were flipped in transit.
    pub fn flipped_positions(&self) -> Vec<usize> {
        self.toggled
            .iter()
            .enumerate()
            .filter_map(|(i, &t)| t.then_some(i))
            .collect()
    }
}

/// The channel itself: seeded RNG plus running statistics.
///
/// Not thread-safe; use one instance per pipeline run.
pub struct BinarySymmetricChannel {
    config: ChannelConfig,
    rng: ChaCha8Rng,

    bits_sent: u64,
    bits_flipped: u64,
}

impl BinarySymmetricChannel {
    /// Create a channel from a validated configuration.
    pub fn new(config: ChannelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            bits_sent: 0,
            bits_flipped: 0,
        })
    }

    /// Pass a frame through the channel.
    ///
    /// Each bit draws a uniform value in [0, 1); draws below the flip
    /// probability invert the bit and mark the toggle mask.
    pub fn transmit(&mut self, frame: &[u8]) -> Transmission {
        let mut bits = Vec::with_capacity(frame.len());
        let mut toggled = Vec::with_capacity(frame.len());

        for &bit in frame {
            self.bits_sent += 1;

            let roll: f64 = self.rng.gen();
            if roll < self.config.flip_probability {
                self.bits_flipped += 1;
                bits.push(bit ^ 1);
                toggled.push(true);
            } else {
                bits.push(bit);
                toggled.push(false);
            }
        }

        Transmission { bits, toggled }
    }

    /// Get statistics about channel behavior.
    pub fn stats(&self) -> ChannelStats {
        ChannelStats {
            bits_sent: self.bits_sent,
            bits_flipped: self.bits_flipped,
        }
    }
}

/// Statistics about channel behavior.
#[derive(Debug, Clone, Copy)]
pub struct ChannelStats {
    /// Total bits pushed through the channel
    pub bits_sent: u64,

    /// Bits inverted in transit
    pub bits_flipped: u64,
}

impl ChannelStats {
    /// Observed flip rate (flipped / sent).
    pub fn flip_rate(&self) -> f64 {
        if self.bits_sent == 0 {
            0.0
        } else {
            self.bits_flipped as f64 / self.bits_sent as f64
        }
    }
}
