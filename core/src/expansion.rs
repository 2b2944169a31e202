//! Binary expansion of the exponent, least-significant bit first.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::{
    error::{ModExpError, Result},
    operand::Operand,
};

/// Enough inline capacity for any non-negative `i64`.
const INLINE_BITS: usize = 64;

/// The bits of a non-negative integer; index 0 is the least significant bit
/// and the last index is the most significant one.
///
/// Always holds at least one bit. The only expansion whose last bit is 0 is
/// the expansion of 0 itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpansion {
    bits: SmallVec<[u8; INLINE_BITS]>,
}

/// Expands `k` into its binary digits, LSB first.
///
/// The expansion has `floor(log2(k)) + 1` bits for `k >= 1`. Zero has no
/// logarithm and is expanded to the single bit `[0]`.
pub fn expand(k: i64) -> Result<BinaryExpansion> {
    if k < 0 {
        return Err(ModExpError::Negative {
            operand: Operand::Exponent,
            value: k,
        });
    }
    if k == 0 {
        return Ok(BinaryExpansion { bits: smallvec![0] });
    }

    let length = bit_length(k);
    let mut bits = SmallVec::with_capacity(length);
    let mut rest = k;
    for _ in 0..length {
        bits.push((rest % 2) as u8);
        rest /= 2;
    }
    debug_assert_eq!(rest, 0);

    Ok(BinaryExpansion { bits })
}

/// `floor(log2(k)) + 1` for `k >= 1`.
const fn bit_length(k: i64) -> usize {
    (i64::BITS - k.leading_zeros()) as usize
}

impl BinaryExpansion {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Reads the bits back as the integer they encode.
    pub fn value(&self) -> i64 {
        self.bits
            .iter()
            .rev()
            .fold(0, |acc, &bit| (acc << 1) | bit as i64)
    }
}

/// Prints the bits MSB first, the way the number is written in base 2.
impl fmt::Display for BinaryExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().rev() {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}
