use strum_macros::{Display, EnumCount, EnumIter};

use crate::{
    bounds::{square_overflows, OVERFLOW_SAFE_MAX},
    error::{ModExpError, Result},
};

/// One of the three unknowns of x ≡ (a^k) mod n, named by the letter used in
/// the equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Operand {
    #[strum(to_string = "a")]
    Base,
    #[strum(to_string = "k")]
    Exponent,
    #[strum(to_string = "n")]
    Modulus,
}

impl Operand {
    /// Checks `value` against the constraints of this operand.
    ///
    /// - every operand must be non-negative;
    /// - `a` and `n` must square without overflowing `i64`;
    /// - `n` must be non-zero.
    pub fn validate(self, value: i64) -> Result<i64> {
        if value < 0 {
            return Err(ModExpError::Negative {
                operand: self,
                value,
            });
        }

        match self {
            Operand::Exponent => Ok(value),
            Operand::Base | Operand::Modulus if square_overflows(value) => {
                Err(ModExpError::OutOfRange {
                    operand: self,
                    value,
                    max: OVERFLOW_SAFE_MAX,
                })
            }
            Operand::Modulus if value == 0 => Err(ModExpError::InvalidModulus),
            Operand::Base | Operand::Modulus => Ok(value),
        }
    }
}

/// A validated `(a, k, n)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    a: i64,
    k: i64,
    n: i64,
}

impl Operands {
    pub fn new(a: i64, k: i64, n: i64) -> Result<Self> {
        Ok(Self {
            a: Operand::Base.validate(a)?,
            k: Operand::Exponent.validate(k)?,
            n: Operand::Modulus.validate(n)?,
        })
    }

    pub const fn a(&self) -> i64 {
        self.a
    }

    pub const fn k(&self) -> i64 {
        self.k
    }

    pub const fn n(&self) -> i64 {
        self.n
    }
}
