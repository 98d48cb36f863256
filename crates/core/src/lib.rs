//! framelink-core: link-layer framing pipeline simulator
//!
//! This library models the framing pipeline of a point-to-point digital
//! channel:
//! - Expands a text message into bits and pads it into fixed-width rows
//! - Protects each row with an interleaved single-error-correcting
//!   Hamming code
//! - Appends a CRC computed by GF(2) polynomial division
//! - Simulates a noisy binary-symmetric channel
//! - Detects and corrects errors on the receive side and reconstructs
//!   the message
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries, leaf-first:
//! - `bits`: byte/bit conversion
//! - `hamming`: check-bit derivation, block encode, syndrome decode
//! - `interleave`: column-major serialization and its inverse
//! - `crc`: GF(2) polynomial division, checksum append and verify
//! - `channel`: binary-symmetric channel with seeded randomness
//! - `pipeline`: orchestration, run parameters, and the full report
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and surface as variants
//! - **Deterministic**: the channel is the only randomness and is seeded
//! - **Observable**: every intermediate artifact is exposed in the run
//!   report so a front-end can render the whole journey

pub mod bits;
pub mod channel;
pub mod crc;
pub mod error;
pub mod hamming;
pub mod interleave;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pipeline::{transmit_message, PipelineConfig, TransmissionReport};
