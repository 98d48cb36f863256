//! Column-major interleaving of encoded blocks.
//!
//! Blocks are serialized column by column: the transmit stream carries
//! column 1 of every row, then column 2 of every row, and so on. Adjacent
//! bits on the wire therefore belong to different rows, which spreads a
//! transmission burst across blocks the Hamming decoder can each repair
//! independently.
//!
//! # Layout
//!
//! ```text
//! rows (1-indexed blocks):      frame (transmit order):
//!   row 0: _ a1 a2 a3             a1 b1 a2 b2 a3 b3
//!   row 1: _ b1 b2 b3
//! ```
//!
//! The inverse assigns `frame[row + n_rows * (col - 1)]` back to
//! `block[row][col]`, bit for bit.

use crate::error::{FramingError, Result};

/// Serialize 1-indexed blocks column-major into a single frame.
///
/// All blocks must share one length; the unused index 0 of each block is
/// skipped. The frame length is `n_rows * n_cols`.
pub fn interleave(blocks: &[Vec<u8>]) -> Vec<u8> {
    if blocks.is_empty() {
        return Vec::new();
    }

    let n_cols = blocks[0].len() - 1;
    debug_assert!(blocks.iter().all(|b| b.len() == n_cols + 1));

    let mut frame = Vec::with_capacity(blocks.len() * n_cols);
    for col in 1..=n_cols {
        for block in blocks {
            frame.push(block[col]);
        }
    }
    frame
}

/// Rebuild the 1-indexed blocks from a column-major frame.
///
/// # Errors
/// `FramingError::LengthMismatch` if the frame length is not exactly
/// `n_rows * n_cols` — the encode and decode stages disagree about the
/// frame shape, which is pipeline misuse.
pub fn deinterleave(frame: &[u8], n_rows: usize, n_cols: usize) -> Result<Vec<Vec<u8>>> {
    let expected = n_rows * n_cols;
    if frame.len() != expected {
        return Err(FramingError::LengthMismatch {
            expected,
            actual: frame.len(),
            n_rows,
            n_cols,
        }
        .into());
    }

    let mut blocks = vec![vec![0u8; n_cols + 1]; n_rows];
    for col in 1..=n_cols {
        for (row, block) in blocks.iter_mut().enumerate() {
            block[col] = frame[row + n_rows * (col - 1)];
        }
    }
    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_rows_transmit_order() {
        // Index 0 is the placeholder and never serialized.
        let blocks = vec![vec![9, 1, 0, 1], vec![9, 0, 1, 1]];
        assert_eq!(interleave(&blocks), vec![1, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn test_inverse_property() {
        let blocks = vec![
            vec![0, 1, 1, 0, 1, 0, 0, 1],
            vec![0, 0, 0, 1, 1, 1, 0, 0],
            vec![0, 1, 0, 1, 0, 1, 0, 1],
        ];

        let frame = interleave(&blocks);
        assert_eq!(frame.len(), 3 * 7);

        let rebuilt = deinterleave(&frame, 3, 7).unwrap();
        assert_eq!(rebuilt, blocks);
    }

    #[test]
    fn test_single_row_is_identity_without_placeholder() {
        let blocks = vec![vec![0, 1, 0, 1, 1]];
        let frame = interleave(&blocks);
        assert_eq!(frame, vec![1, 0, 1, 1]);
        assert_eq!(deinterleave(&frame, 1, 4).unwrap(), blocks);
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        let result = deinterleave(&[1, 0, 1], 2, 2);
        assert!(matches!(
            result,
            Err(crate::error::Error::Framing(FramingError::LengthMismatch {
                expected: 4,
                actual: 3,
                ..
            }))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(interleave(&[]).is_empty());
        assert!(deinterleave(&[], 0, 0).unwrap().is_empty());
    }
}
