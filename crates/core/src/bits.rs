//! Byte/bit conversion primitives.
//!
//! Every stage of the pipeline works on expanded bit sequences: `Vec<u8>`
//! where each element is 0 or 1. Bits are MSB-first within a byte, which
//! matches how the encoded rows are displayed (the ASCII expansion of a
//! character reads left to right).
//!
//! # Example
//! ```
//! use framelink_core::bits::{bytes_to_bits, bits_to_bytes};
//!
//! let bits = bytes_to_bits(b"A");
//! assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 0, 1]);
//! assert_eq!(bits_to_bytes(&bits).unwrap(), b"A");
//! ```

use crate::error::{DecodeError, Result};

/// Expand bytes into individual bits, MSB-first.
///
/// One byte becomes exactly eight elements, each 0 or 1.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Pack bits (MSB-first) back into bytes.
///
/// # Errors
/// `DecodeError::BitCount` if the bit count is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return Err(DecodeError::BitCount(bits.len()).into());
    }

    let bytes = bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect();

    Ok(bytes)
}

/// Render a bit sequence as a '0'/'1' string for display and tests.
pub fn bits_to_string(bits: &[u8]) -> String {
    bits.iter().map(|&b| if b == 0 { '0' } else { '1' }).collect()
}

/// Parse a '0'/'1' string into a bit sequence.
///
/// Returns `None` on any character other than '0' or '1'. Callers that
/// need a structured error (the generator polynomial parser) map it
/// themselves.
pub fn bits_from_string(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|c| match c {
            '0' => Some(0),
            '1' => Some(1),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_byte_expansion() {
        assert_eq!(bytes_to_bits(&[0b1011_0011]), vec![1, 0, 1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_round_trip() {
        let data = b"The quick brown fox";
        let bits = bytes_to_bits(data);
        assert_eq!(bits.len(), data.len() * 8);
        assert_eq!(bits_to_bytes(&bits).unwrap(), data);
    }

    #[test]
    fn test_ragged_bit_count_rejected() {
        let result = bits_to_bytes(&[1, 0, 1]);
        assert!(matches!(
            result,
            Err(crate::error::Error::Decode(DecodeError::BitCount(3)))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(bytes_to_bits(&[]).is_empty());
        assert!(bits_to_bytes(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_string_round_trip() {
        let bits = bits_from_string("100101").unwrap();
        assert_eq!(bits, vec![1, 0, 0, 1, 0, 1]);
        assert_eq!(bits_to_string(&bits), "100101");
    }

    #[test]
    fn test_string_rejects_junk() {
        assert!(bits_from_string("10x1").is_none());
    }
}
