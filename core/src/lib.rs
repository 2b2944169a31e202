//! Core of the modexp chart calculator.
//!
//! Solves x ≡ (a^k) mod n with the square-and-multiply ("chart") method:
//! [`expand`] turns the exponent into its bits, least significant first, and
//! [`evaluate`] walks those bits, squaring a running power of `a` and folding
//! it into the result for every set bit. The evaluation keeps one
//! [`TraceRow`] per bit so callers can display the whole chart.
//!
//! All arithmetic is done in `i64`. [`Operands::new`] rejects any `a` or `n`
//! whose square would overflow, as well as `n = 0`.

pub mod bounds;
mod error;
mod evaluator;
mod expansion;
mod operand;

pub use bounds::{MAX_INPUT_DIGITS, OVERFLOW_SAFE_MAX};
pub use error::{ModExpError, Result};
pub use evaluator::{evaluate, solve, Evaluation, TraceRow, UNSET_RESULT};
pub use expansion::{expand, BinaryExpansion};
pub use operand::{Operand, Operands};
