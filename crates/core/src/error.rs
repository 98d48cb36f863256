//! Error types for the framelink pipeline.
//!
//! All operations return structured errors rather than panicking.
//! Fatal errors surface as distinct variants before any garbage output
//! can be produced.

use thiserror::Error;

/// Top-level error type for all operations in the pipeline.
///
/// Each variant corresponds to a specific failure domain:
/// - Config: invalid run parameters, rejected before any encoding
/// - Input: malformed data handed to an encoder (caller contract violation)
/// - Framing: row/column mismatch between encode and decode stages
/// - Decode: reassembly of corrected bits into bytes failed
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration (row width, probability, generator polynomial)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed input passed to an encoding stage
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Frame shape mismatch between encode and decode
    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    /// Bit-to-byte reassembly failure
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Configuration errors. All are fatal and abort the run before encoding.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Row width must be at least one byte
    #[error("row width must be positive, got {0}")]
    RowWidth(usize),

    /// Bit-flip probability outside [0, 1]
    #[error("flip probability {0} outside [0, 1]")]
    Probability(f64),

    /// Generator polynomial empty or all zeros after trimming
    #[error("enter a valid generator polynomial")]
    EmptyGenerator,

    /// Generator polynomial contains characters other than '0'/'1'
    #[error("generator polynomial contains non-binary digit {0:?}")]
    NonBinaryDigit(char),
}

/// Encoder input contract violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Payload row has the wrong number of bits
    #[error("row length mismatch: expected {expected} bits, got {actual}")]
    RowLength { expected: usize, actual: usize },
}

/// Frame shape errors between the serializer and deserializer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FramingError {
    /// Frame length doesn't factor into the expected rows x columns
    #[error("frame length mismatch: expected {expected} bits ({n_rows} rows x {n_cols} cols), got {actual}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        n_rows: usize,
        n_cols: usize,
    },

    /// Frame shorter than the CRC checksum it should carry
    #[error("frame too short for checksum: need at least {required} bits, got {actual}")]
    TooShortForChecksum { required: usize, actual: usize },
}

/// Message reassembly errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Corrected payload bit count isn't a whole number of bytes
    #[error("payload bit count {0} is not a multiple of 8")]
    BitCount(usize),
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
