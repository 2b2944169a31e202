//! Error types for the modexp core.

use thiserror::Error;

use crate::operand::Operand;

/// Precondition violations detected when validating the operands of
/// x ≡ (a^k) mod n.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModExpError {
    /// An operand was below zero.
    #[error("{operand} = {value} is negative")]
    Negative { operand: Operand, value: i64 },

    /// Squaring the operand would overflow `i64`.
    #[error("{operand} = {value} would result in multiplicative overflow (largest allowed is {max})")]
    OutOfRange {
        operand: Operand,
        value: i64,
        max: i64,
    },

    /// The modulus was zero.
    #[error("n cannot be 0")]
    InvalidModulus,
}

/// Result type for the modexp core
pub type Result<T> = std::result::Result<T, ModExpError>;
