//! The full encode → corrupt → decode pipeline.
//!
//! A message is padded to a whole number of rows, expanded to bits,
//! Hamming-encoded row by row, interleaved column-major, protected with a
//! CRC, pushed through the simulated channel, and then decoded back:
//! CRC verdict, de-interleave, per-row syndrome correction, check-bit
//! stripping, byte reassembly, padding removal.
//!
//! The pipeline is fully sequential: each stage consumes the complete
//! output of the previous one. Every intermediate artifact is kept in the
//! returned [`TransmissionReport`] so a presentation layer can show the
//! whole journey without the core knowing anything about terminals.
//!
//! Run parameters (`row_bytes`, check-bit count, column count, generator)
//! are derived once up front and are immutable for the run.

use crate::bits;
use crate::channel::{BinarySymmetricChannel, ChannelConfig, ChannelStats, Transmission};
use crate::crc::Generator;
use crate::error::{ConfigError, FramingError, Result};
use crate::hamming::{self, Correction};
use crate::interleave::{deinterleave, interleave};

/// Sentinel byte appended until the message length divides the row width.
pub const PADDING_BYTE: u8 = b'~';

/// Derived, immutable run parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Payload bytes per row (`m`)
    pub row_bytes: usize,

    /// Check bits per row (`r`), the minimum satisfying
    /// `8*m + r + 1 <= 2^r`
    pub check_bits: usize,

    /// Total bits per encoded row excluding the placeholder: `8*m + r`
    pub n_cols: usize,
}

impl Params {
    /// Derive the check-bit and column counts for a row width.
    ///
    /// # Errors
    /// `ConfigError::RowWidth` if `row_bytes` is zero.
    pub fn new(row_bytes: usize) -> Result<Self> {
        if row_bytes == 0 {
            return Err(ConfigError::RowWidth(row_bytes).into());
        }

        let check_bits = hamming::check_bit_count(8 * row_bytes);
        Ok(Self {
            row_bytes,
            check_bits,
            n_cols: 8 * row_bytes + check_bits,
        })
    }

    /// Payload bits per row.
    pub fn data_bits(&self) -> usize {
        8 * self.row_bytes
    }
}

/// Complete configuration for one pipeline run.
///
/// An explicit value passed into [`transmit_message`]; nothing in the
/// pipeline reads process-wide state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Payload bytes per row (`m`)
    pub row_bytes: usize,

    /// Per-bit channel flip probability
    pub flip_probability: f64,

    /// CRC generator polynomial
    pub generator: Generator,

    /// Seed for the channel RNG
    pub seed: u64,
}

/// Role of one position in the sent frame, for presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitRole {
    /// A payload bit from some row
    Data,
    /// A Hamming check bit from some row
    Check,
    /// Part of the trailing CRC checksum
    Crc,
}

/// Per-row decode outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOutcome {
    /// Row index in the original block matrix
    pub row: usize,

    /// What syndrome decoding did to this row
    pub correction: Correction,
}

/// Every artifact of one run, in pipeline order.
#[derive(Debug, Clone)]
pub struct TransmissionReport {
    /// Derived run parameters
    pub params: Params,

    /// Message after sentinel padding
    pub padded_message: Vec<u8>,

    /// ASCII/bit expansion of the padded message
    pub data_bits: Vec<u8>,

    /// Per-row 1-indexed Hamming blocks as encoded
    pub encoded_blocks: Vec<Vec<u8>>,

    /// Column-major serialization of the blocks
    pub frame: Vec<u8>,

    /// Frame with the CRC checksum attached
    pub sent_frame: Vec<u8>,

    /// What came out of the channel, toggle mask included
    pub received: Transmission,

    /// CRC verdict on the received frame (advisory; correction never
    /// consults it)
    pub crc_ok: bool,

    /// Blocks after de-interleaving and syndrome correction
    pub corrected_blocks: Vec<Vec<u8>>,

    /// Per-row correction outcomes
    pub rows: Vec<RowOutcome>,

    /// Reassembled message with padding stripped
    pub decoded_message: Vec<u8>,

    /// Channel flip statistics
    pub channel_stats: ChannelStats,
}

impl TransmissionReport {
    /// Number of rows in the block matrix.
    pub fn n_rows(&self) -> usize {
        self.encoded_blocks.len()
    }

    /// Decoded message as text (lossy for non-UTF-8 corruption survivors).
    pub fn decoded_text(&self) -> String {
        String::from_utf8_lossy(&self.decoded_message).into_owned()
    }

    /// Role of every position in the sent frame, in transmit order.
    ///
    /// Position `row + n_rows * (col - 1)` carries column `col` of some
    /// row, so its role depends only on whether `col` is a check
    /// position. The trailing span is the CRC checksum. Combined with
    /// the received toggle mask this is everything a renderer needs to
    /// colorize the stream.
    pub fn sent_frame_roles(&self) -> Vec<BitRole> {
        let n_rows = self.n_rows();
        let mut roles = Vec::with_capacity(self.sent_frame.len());

        for col in 1..=self.params.n_cols {
            let role = if hamming::is_check_position(col) {
                BitRole::Check
            } else {
                BitRole::Data
            };
            roles.extend(std::iter::repeat(role).take(n_rows));
        }

        let checksum_len = self.sent_frame.len() - self.frame.len();
        roles.extend(std::iter::repeat(BitRole::Crc).take(checksum_len));
        roles
    }
}

/// Run the whole pipeline for one message.
///
/// Configuration problems (row width, probability, generator) are
/// rejected here before any encoding happens.
pub fn transmit_message(message: &[u8], config: &PipelineConfig) -> Result<TransmissionReport> {
    let params = Params::new(config.row_bytes)?;
    let mut channel = BinarySymmetricChannel::new(ChannelConfig {
        flip_probability: config.flip_probability,
        seed: config.seed,
    })?;

    // Pad so the message splits into whole rows.
    let mut padded_message = message.to_vec();
    while padded_message.len() % params.row_bytes != 0 {
        padded_message.push(PADDING_BYTE);
    }

    let n_rows = padded_message.len() / params.row_bytes;
    let data_bits = bits::bytes_to_bits(&padded_message);

    // Encode each row independently.
    let encoded_blocks = data_bits
        .chunks_exact(params.data_bits())
        .map(|row| hamming::encode_block(row, params.check_bits))
        .collect::<Result<Vec<_>>>()?;

    // Serialize column-major and attach the checksum.
    let frame = interleave(&encoded_blocks);
    let sent_frame = config.generator.append(&frame);

    // The only nondeterministic stage.
    let received = channel.transmit(&sent_frame);

    // CRC verdict on the raw received frame, checksum still attached.
    let crc_ok = config.generator.verify(&received.bits);

    // Strip the checksum span and restore the block matrix.
    let checksum_len = config.generator.checksum_len();
    if received.bits.len() < checksum_len {
        return Err(FramingError::TooShortForChecksum {
            required: checksum_len,
            actual: received.bits.len(),
        }
        .into());
    }
    let body = &received.bits[..received.bits.len() - checksum_len];
    let mut corrected_blocks = deinterleave(body, n_rows, params.n_cols)?;

    // Per-row syndrome correction, in place.
    let rows = corrected_blocks
        .iter_mut()
        .enumerate()
        .map(|(row, block)| RowOutcome {
            row,
            correction: hamming::correct_block(block, params.check_bits),
        })
        .collect();

    // Reassemble bytes and drop the padding sentinels.
    let mut payload_bits = Vec::with_capacity(n_rows * params.data_bits());
    for block in &corrected_blocks {
        payload_bits.extend(hamming::strip_check_bits(block));
    }

    let mut decoded_message = bits::bits_to_bytes(&payload_bits)?;
    while decoded_message.last() == Some(&PADDING_BYTE) {
        decoded_message.pop();
    }

    let channel_stats = channel.stats();

    Ok(TransmissionReport {
        params,
        padded_message,
        data_bits,
        encoded_blocks,
        frame,
        sent_frame,
        received,
        crc_ok,
        corrected_blocks,
        rows,
        decoded_message,
        channel_stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(row_bytes: usize, p: f64, generator: &str, seed: u64) -> PipelineConfig {
        PipelineConfig {
            row_bytes,
            flip_probability: p,
            generator: Generator::parse(generator).unwrap(),
            seed,
        }
    }

    #[test]
    fn test_worked_example_ab() {
        // "AB", m = 1, generator 1011: r = 4, 12 columns, two rows of
        // 13 positions with check bits at 1, 2, 4, 8.
        let report = transmit_message(b"AB", &config(1, 0.0, "1011", 42)).unwrap();

        assert_eq!(report.padded_message, b"AB");
        assert_eq!(report.params.check_bits, 4);
        assert_eq!(report.params.n_cols, 12);
        assert_eq!(report.n_rows(), 2);
        assert!(report.encoded_blocks.iter().all(|b| b.len() == 13));

        assert_eq!(report.frame.len(), 24);
        assert_eq!(report.sent_frame.len(), 27); // + 3 checksum bits
        assert!(report.crc_ok);
        assert_eq!(report.decoded_message, b"AB");
    }

    #[test]
    fn test_noiseless_round_trip_various_shapes() {
        let messages: [&[u8]; 4] = [b"x", b"hello world", b"framelink!", &[0u8, 255, 7, 128]];

        for message in messages {
            for row_bytes in [1, 2, 3, 5] {
                for generator in ["101", "1011", "10011"] {
                    let report =
                        transmit_message(message, &config(row_bytes, 0.0, generator, 1)).unwrap();
                    assert_eq!(
                        report.decoded_message, message,
                        "m={row_bytes} gen={generator}"
                    );
                    assert!(report.crc_ok);
                    assert!(report.rows.iter().all(|r| r.correction == Correction::Clean));
                }
            }
        }
    }

    #[test]
    fn test_padding_applied_and_stripped() {
        let report = transmit_message(b"ABC", &config(2, 0.0, "1011", 0)).unwrap();
        assert_eq!(report.padded_message, b"ABC~");
        assert_eq!(report.n_rows(), 2);
        assert_eq!(report.decoded_message, b"ABC");
    }

    #[test]
    fn test_config_rejected_before_encoding() {
        let zero_width = transmit_message(b"hi", &config(0, 0.0, "101", 0));
        assert!(zero_width.is_err());

        let bad_probability = transmit_message(b"hi", &config(1, 1.5, "101", 0));
        assert!(bad_probability.is_err());

        assert!(Generator::parse("000").is_err());
    }

    #[test]
    fn test_noisy_run_is_deterministic() {
        let cfg = config(2, 0.05, "10011", 777);
        let a = transmit_message(b"determinism check", &cfg).unwrap();
        let b = transmit_message(b"determinism check", &cfg).unwrap();

        assert_eq!(a.received, b.received);
        assert_eq!(a.decoded_message, b.decoded_message);
        assert_eq!(a.crc_ok, b.crc_ok);
    }

    #[test]
    fn test_single_channel_flip_detected_and_corrected() {
        // Scan seeds until the channel flips exactly one bit. A single-bit
        // error is always visible to x^3 + x + 1, and if it lands in the
        // body the row's Hamming decoder repairs it — so the decoded text
        // survives either way while the CRC still reports the damage.
        for seed in 0..500 {
            let report = transmit_message(b"noisy", &config(1, 0.02, "1011", seed)).unwrap();
            if report.received.flipped_positions().len() == 1 {
                assert!(!report.crc_ok);
                assert_eq!(report.decoded_message, b"noisy");
                return;
            }
        }
        panic!("no seed in 0..500 produced exactly one flip");
    }

    #[test]
    fn test_sent_frame_roles() {
        let report = transmit_message(b"AB", &config(1, 0.0, "1011", 0)).unwrap();
        let roles = report.sent_frame_roles();
        assert_eq!(roles.len(), 27);

        // Columns 1, 2, 4, 8 are check positions; each column spans
        // n_rows = 2 consecutive frame positions.
        for col in 1..=12usize {
            let expected = if col.is_power_of_two() {
                BitRole::Check
            } else {
                BitRole::Data
            };
            for row in 0..2 {
                assert_eq!(roles[row + 2 * (col - 1)], expected, "col {col}");
            }
        }
        assert!(roles[24..].iter().all(|&r| r == BitRole::Crc));
    }

    #[test]
    fn test_empty_message() {
        // Zero rows: empty frame, checksum still attached and verified.
        let report = transmit_message(b"", &config(1, 0.0, "1011", 0)).unwrap();
        assert_eq!(report.n_rows(), 0);
        assert_eq!(report.sent_frame.len(), 3);
        assert!(report.crc_ok);
        assert!(report.decoded_message.is_empty());
    }
}
