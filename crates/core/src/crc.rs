//! Cyclic-redundancy check over GF(2) polynomials.
//!
//! Bit strings are treated as polynomial coefficients; subtraction is
//! bitwise XOR with no borrow. A generator polynomial of length `k`
//! (leading bit 1) yields a `k-1` bit checksum.
//!
//! Encode appends `k-1` zero bits to the frame and XORs the division
//! remainder into that trailing span. Verify divides the received frame
//! (checksum included) and reports whether the remainder trims to empty.
//! The verdict is advisory only: it never feeds into Hamming correction.

use crate::bits;
use crate::error::{ConfigError, Result};

/// A validated generator polynomial.
///
/// Leading zero bits are trimmed at parse time, so the stored bit string
/// always starts with 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    bits: Vec<u8>,
}

impl Generator {
    /// Parse a generator polynomial from a '0'/'1' string.
    ///
    /// # Errors
    /// - `ConfigError::NonBinaryDigit` on any other character
    /// - `ConfigError::EmptyGenerator` if nothing remains after trimming
    ///   leading zeros (e.g. "", "0", "000")
    pub fn parse(s: &str) -> Result<Self> {
        if let Some(c) = s.chars().find(|c| *c != '0' && *c != '1') {
            return Err(ConfigError::NonBinaryDigit(c).into());
        }

        let raw = bits::bits_from_string(s).unwrap_or_default();
        let trimmed: Vec<u8> = raw.iter().copied().skip_while(|&b| b == 0).collect();

        if trimmed.is_empty() {
            return Err(ConfigError::EmptyGenerator.into());
        }

        Ok(Self { bits: trimmed })
    }

    /// The divisor bit pattern (leading bit is always 1).
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Number of checksum bits this generator appends: `k - 1`.
    pub fn checksum_len(&self) -> usize {
        self.bits.len() - 1
    }

    /// Produce the sent frame: append `k-1` zero bits, then XOR the
    /// division remainder into the trailing span.
    ///
    /// XOR with the zero padding is equivalent to replacing it with the
    /// remainder; the element-wise XOR form mirrors GF(2) subtraction.
    pub fn append(&self, frame: &[u8]) -> Vec<u8> {
        let mut sent = frame.to_vec();
        sent.extend(std::iter::repeat(0).take(self.checksum_len()));

        let (_, remainder) = divide(&sent, &self.bits);

        let tail = frame.len();
        for (i, &bit) in remainder.iter().enumerate() {
            sent[tail + i] ^= bit;
        }
        sent
    }

    /// Check a received frame (checksum bits still attached).
    ///
    /// Returns true when the remainder trims to empty — "no error
    /// detected". Any surviving 1 bit means the transmitted pattern
    /// changed in a way this polynomial can see.
    pub fn verify(&self, frame: &[u8]) -> bool {
        let (_, remainder) = divide(frame, &self.bits);
        remainder.iter().all(|&b| b == 0)
    }
}

/// GF(2) polynomial long division.
///
/// Returns `(quotient, remainder)`. At each step the subtrahend is the
/// divisor when the leading window bit is 1 and all zeros otherwise;
/// subtraction is XOR.
///
/// When the dividend is shorter than the divisor the quotient is `[0]`
/// and the remainder is the dividend unchanged.
///
/// The divisor's leading bit must be 1; `Generator::parse` guarantees
/// this for all callers inside the crate.
pub fn divide(dividend: &[u8], divisor: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let k = divisor.len();
    debug_assert!(!divisor.is_empty() && divisor[0] == 1);

    if dividend.len() < k {
        return (vec![0], dividend.to_vec());
    }

    let mut window: Vec<u8> = dividend[..k].to_vec();
    let mut quotient = Vec::with_capacity(dividend.len() - k + 1);
    let mut next = k;

    loop {
        if window[0] == 1 {
            quotient.push(1);
            for (w, &d) in window.iter_mut().zip(divisor) {
                *w ^= d;
            }
        } else {
            quotient.push(0);
        }

        window.remove(0);
        if next < dividend.len() {
            window.push(dividend[next]);
            next += 1;
        } else {
            break;
        }
    }

    // k-1 bits remain in the window: the remainder
    (quotient, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{bits_from_string, bits_to_string};
    use crate::error::Error;

    fn b(s: &str) -> Vec<u8> {
        bits_from_string(s).unwrap()
    }

    #[test]
    fn test_divide_worked_example() {
        // 1011 / 101 = 10 remainder 01 over GF(2)
        let (quotient, remainder) = divide(&b("1011"), &b("101"));
        assert_eq!(bits_to_string(&quotient), "10");
        assert_eq!(bits_to_string(&remainder), "01");
    }

    #[test]
    fn test_divide_exact() {
        // 1010 = 101 * 10, remainder zero
        let (quotient, remainder) = divide(&b("1010"), &b("101"));
        assert_eq!(bits_to_string(&quotient), "10");
        assert_eq!(bits_to_string(&remainder), "00");
    }

    #[test]
    fn test_divide_short_dividend() {
        let (quotient, remainder) = divide(&b("10"), &b("101"));
        assert_eq!(quotient, vec![0]);
        assert_eq!(bits_to_string(&remainder), "10");
    }

    #[test]
    fn test_append_then_verify_clean() {
        let generator = Generator::parse("101").unwrap();
        let frame = b("1011");

        let sent = generator.append(&frame);
        assert_eq!(sent.len(), frame.len() + 2);
        assert_eq!(&sent[..frame.len()], &frame[..]);

        // Self-consistency: dividing the sent frame leaves no remainder.
        assert!(generator.verify(&sent));
        let (_, remainder) = divide(&sent, generator.bits());
        assert!(remainder.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_corruption_detected() {
        let generator = Generator::parse("1011").unwrap();
        let sent = generator.append(&b("110101101"));

        for pos in 0..sent.len() {
            let mut corrupted = sent.clone();
            corrupted[pos] ^= 1;
            assert!(!generator.verify(&corrupted), "flip at {pos} undetected");
        }
    }

    #[test]
    fn test_parse_trims_leading_zeros() {
        let generator = Generator::parse("00101").unwrap();
        assert_eq!(generator.bits(), &[1, 0, 1]);
        assert_eq!(generator.checksum_len(), 2);
    }

    #[test]
    fn test_parse_all_zeros_rejected() {
        for s in ["", "0", "000"] {
            let result = Generator::parse(s);
            assert!(
                matches!(result, Err(Error::Config(ConfigError::EmptyGenerator))),
                "generator {s:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_junk() {
        let result = Generator::parse("10a1");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NonBinaryDigit('a')))
        ));
    }

    #[test]
    fn test_degenerate_single_bit_generator() {
        // k = 1: zero checksum bits, everything divides cleanly
        let generator = Generator::parse("1").unwrap();
        let frame = b("1101");
        assert_eq!(generator.append(&frame), frame);
        assert!(generator.verify(&frame));
    }
}
