//! Text rendering of the square-and-multiply chart.

use std::fmt;

use modexp_core::{Evaluation, Operands, TraceRow};

/// Gap between the power column and the `x` column.
const COLUMN_GAP: usize = 4;

/// Placeholder printed while `x` has not been assigned yet.
const UNSET: &str = "-";

/// The chart of one evaluation:
///
/// ```text
/// i   b_i power=2^(2^i) mod 13    x
/// 0   1   2                       2
/// 1   0   4                       2
/// 2   1   3                       6
/// ```
///
/// Columns are tab separated up to the power, which is padded to the width of
/// its header so that `x` lines up under its own header.
pub struct Chart<'a> {
    a: i64,
    n: i64,
    trace: &'a [TraceRow],
}

impl<'a> Chart<'a> {
    pub fn new(operands: &Operands, evaluation: &'a Evaluation) -> Self {
        Self {
            a: operands.a(),
            n: operands.n(),
            trace: &evaluation.trace,
        }
    }
}

impl fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let power_header = format!("power={}^(2^i) mod {}", self.a, self.n);
        let width = power_header.len() + COLUMN_GAP;
        writeln!(f, "i\tb_i\t{power_header:<width$}x")?;

        for row in self.trace {
            write!(f, "{}\t{}\t{:<width$}", row.index, row.bit, row.power)?;
            match row.x {
                Some(x) => writeln!(f, "{x}")?,
                None => writeln!(f, "{UNSET}")?,
            }
        }
        Ok(())
    }
}
