//! Hamming single-error-correcting block code.
//!
//! Each row of the message (a fixed number of payload bits) is encoded
//! independently into a 1-indexed block. Positions whose index is a power
//! of two hold check bits; every other position holds a payload bit, in
//! increasing index order.
//!
//! # Block Layout
//!
//! ```text
//! index:  1  2  3  4  5  6  7  8  9 ...
//!         c1 c2 d  c4 d  d  d  c8 d ...
//! ```
//!
//! Check bit `c(2^b)` is the XOR parity of every payload bit whose
//! position index has bit `b` set. On receive, recomputing those parities
//! and comparing against the stored check bits yields the syndrome: the
//! 1-indexed position of a single flipped bit, or 0 when the block is
//! clean.
//!
//! Index 0 of every block is an unused placeholder; it keeps the
//! position arithmetic 1-indexed, which is what makes the syndrome equal
//! the error position.

use crate::error::{InputError, Result};

/// Upper bound for the check-bit search. 2^60 dwarfs any realistic row
/// width, so the search range is always sufficient.
const MAX_CHECK_BITS: usize = 60;

/// True if `index` (>= 1) is a power of two, i.e. a check-bit position.
#[inline]
pub fn is_check_position(index: usize) -> bool {
    index & (index - 1) == 0
}

/// Smallest number of check bits `r` such that `data_bits + r + 1 <= 2^r`.
///
/// The `+ 1` accounts for the syndrome value 0 meaning "no error". The
/// predicate is monotone in `r` (the right side grows exponentially), so
/// binary search over `0..=60` finds the minimum.
pub fn check_bit_count(data_bits: usize) -> usize {
    let (mut low, mut high) = (0usize, MAX_CHECK_BITS);
    let mut result = MAX_CHECK_BITS;

    while low <= high {
        let mid = (low + high) / 2;
        if data_bits + mid + 1 <= 1usize << mid {
            result = mid;
            if mid == 0 {
                break;
            }
            high = mid - 1;
        } else {
            low = mid + 1;
        }
    }

    result
}

/// Outcome of syndrome decoding for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Syndrome was zero; no bit was touched
    Clean,
    /// Syndrome pointed inside the block; that bit was flipped back
    Corrected(usize),
    /// Syndrome exceeded the block length (multi-bit damage beyond this
    /// code's capability); the block is left as received
    OutOfRange(usize),
}

impl Correction {
    /// The raw syndrome value (0 when clean).
    pub fn syndrome(&self) -> usize {
        match *self {
            Correction::Clean => 0,
            Correction::Corrected(s) | Correction::OutOfRange(s) => s,
        }
    }

    /// Whether a single-bit correction was applied.
    pub fn applied(&self) -> bool {
        matches!(self, Correction::Corrected(_))
    }
}

/// Encode one row of payload bits into a 1-indexed Hamming block.
///
/// The returned block has length `payload.len() + check_bits + 1`
/// (index 0 is the unused placeholder).
///
/// # Algorithm
/// A cursor walks the block starting at index 1. Each payload bit is
/// placed at the next non-power-of-two index, and immediately XORed into
/// every check bit `2^b` whose bit `b` is set in that index.
///
/// # Errors
/// `InputError::RowLength` if the payload doesn't fill the block exactly,
/// i.e. the caller derived `check_bits` for a different row width.
pub fn encode_block(payload: &[u8], check_bits: usize) -> Result<Vec<u8>> {
    let n_cols = payload.len() + check_bits;
    let expected = (1usize..=n_cols).filter(|&i| !is_check_position(i)).count();
    if payload.len() != expected {
        return Err(InputError::RowLength {
            expected,
            actual: payload.len(),
        }
        .into());
    }

    let mut block = vec![0u8; n_cols + 1];
    let mut cursor = 1usize;

    for &bit in payload {
        while is_check_position(cursor) {
            cursor += 1;
        }
        block[cursor] = bit;

        for b in 0..check_bits {
            if cursor & (1 << b) != 0 {
                block[1 << b] ^= bit;
            }
        }

        cursor += 1;
    }

    Ok(block)
}

/// Recompute syndromes and correct a single bit error in place.
///
/// For each check position `2^b`, the parity of all payload positions
/// with bit `b` set is compared against the stored check bit; mismatched
/// positions sum to the syndrome. A syndrome inside the block flips that
/// bit back. A syndrome beyond the block length means damage this code
/// cannot repair, and the block is left untouched — the CRC verdict is
/// the designated way such frames are surfaced to the caller.
pub fn correct_block(block: &mut [u8], check_bits: usize) -> Correction {
    let n_cols = block.len() - 1;
    let mut syndrome = 0usize;

    for b in 0..check_bits {
        let check_pos = 1usize << b;
        if check_pos > n_cols {
            break;
        }

        let mut parity = 0u8;
        for index in 1..=n_cols {
            if !is_check_position(index) && index & check_pos != 0 {
                parity ^= block[index];
            }
        }

        if parity != block[check_pos] {
            syndrome += check_pos;
        }
    }

    if syndrome == 0 {
        Correction::Clean
    } else if syndrome <= n_cols {
        block[syndrome] ^= 1;
        Correction::Corrected(syndrome)
    } else {
        Correction::OutOfRange(syndrome)
    }
}

/// Extract the payload bits of a block, dropping check positions.
pub fn strip_check_bits(block: &[u8]) -> Vec<u8> {
    (1..block.len())
        .filter(|&i| !is_check_position(i))
        .map(|i| block[i])
        .collect()
}
