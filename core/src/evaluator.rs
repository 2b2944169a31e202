//! Square-and-multiply evaluation of x ≡ (a^k) mod n.
//!
//! The evaluator walks the binary expansion of `k` from the least significant
//! bit upward. At bit `i` it holds `a^(2^i) mod n`, obtained by squaring the
//! previous power, and folds that power into the running product whenever the
//! bit is set. Every step is recorded as a [`TraceRow`] so the full chart can
//! be printed afterwards.

use tracing::{debug, instrument, trace};

use crate::{
    bounds::OVERFLOW_SAFE_MAX,
    error::Result,
    expansion::{expand, BinaryExpansion},
    operand::Operands,
};

/// Result reported when no bit of the exponent is set, i.e. `k = 0`.
///
/// Mathematically `a^0 mod n` is `1 mod n`; the chart method as taught leaves
/// `x` unfilled and reports 0 instead.
pub const UNSET_RESULT: i64 = 0;

/// One row of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    /// Bit position `i`.
    pub index: usize,
    /// `b_i`, the bit of `k` at position `i`.
    pub bit: u8,
    /// `a^(2^i) mod n`.
    pub power: i64,
    /// The running product after this row, `None` until the first set bit.
    pub x: Option<i64>,
}

/// Outcome of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub result: i64,
    /// One row per bit of the exponent, in increasing bit order.
    pub trace: Vec<TraceRow>,
}

/// Computes `a^k mod n` from the binary expansion of `k`.
///
/// The caller guarantees `0 <= a <= OVERFLOW_SAFE_MAX` and
/// `1 <= n <= OVERFLOW_SAFE_MAX`, typically by building [`Operands`]. Under
/// those bounds every product below is smaller than `n^2` and fits in `i64`.
#[instrument(level = "debug", skip(expansion), fields(k = %expansion))]
pub fn evaluate(a: i64, expansion: &BinaryExpansion, n: i64) -> Evaluation {
    debug_assert!((0..=OVERFLOW_SAFE_MAX).contains(&a), "a = {a} out of range");
    debug_assert!((1..=OVERFLOW_SAFE_MAX).contains(&n), "n = {n} out of range");

    let mut rows = Vec::with_capacity(expansion.len());
    let mut power = a % n;
    let mut x: Option<i64> = None;

    for (index, bit) in expansion.iter().enumerate() {
        if index > 0 {
            power = power * power % n;
        }
        if bit == 1 {
            x = Some(match x {
                None => power,
                Some(acc) => acc * power % n,
            });
        }

        trace!(index, bit, power, x = ?x, "chart row");
        rows.push(TraceRow {
            index,
            bit,
            power,
            x,
        });
    }

    let result = x.unwrap_or(UNSET_RESULT);
    debug!(result, rows = rows.len(), "evaluation finished");

    Evaluation {
        result,
        trace: rows,
    }
}

/// Expands `k` and evaluates `a^k mod n` for a validated triple.
pub fn solve(operands: &Operands) -> Result<Evaluation> {
    let expansion = expand(operands.k())?;
    Ok(evaluate(operands.a(), &expansion, operands.n()))
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;

    fn eval(a: i64, k: i64, n: i64) -> Evaluation {
        evaluate(a, &expand(k).unwrap(), n)
    }

    fn reference(a: i64, k: i64, n: i64) -> BigUint {
        BigUint::from(a as u64).modpow(&BigUint::from(k as u64), &BigUint::from(n as u64))
    }

    #[test]
    fn test_two_to_the_fifth_mod_thirteen() {
        let ev = eval(2, 5, 13);
        assert_eq!(ev.result, 6);
        assert_eq!(
            ev.trace,
            vec![
                TraceRow {
                    index: 0,
                    bit: 1,
                    power: 2,
                    x: Some(2)
                },
                TraceRow {
                    index: 1,
                    bit: 0,
                    power: 4,
                    x: Some(2)
                },
                TraceRow {
                    index: 2,
                    bit: 1,
                    power: 3,
                    x: Some(6)
                },
            ]
        );
    }

    #[test]
    fn test_zero_exponent_reports_unset_result() {
        let ev = eval(7, 0, 5);
        assert_eq!(ev.result, 0);
        assert_eq!(
            ev.trace,
            vec![TraceRow {
                index: 0,
                bit: 0,
                power: 2,
                x: None
            }]
        );
    }

    #[test]
    fn test_exponent_one() {
        let ev = eval(3, 1, 7);
        assert_eq!(ev.result, 3);
        assert_eq!(ev.trace.len(), 1);
    }

    #[test]
    fn test_leading_zero_bits_leave_x_unset() {
        let ev = eval(5, 4, 9);
        assert_eq!(ev.result, 4);
        let xs: Vec<_> = ev.trace.iter().map(|row| row.x).collect();
        assert_eq!(xs, [None, None, Some(4)]);
        let powers: Vec<_> = ev.trace.iter().map(|row| row.power).collect();
        assert_eq!(powers, [5, 7, 4]);
    }

    #[test]
    fn test_base_reduced_before_first_row() {
        let ev = eval(20, 3, 7);
        assert_eq!(ev.trace[0].power, 6);
        assert_eq!(ev.result, 8000 % 7);
    }

    #[test]
    fn test_zero_product_stays_set() {
        // 2^3 mod 4: the product hits 0 at bit 1 and must not be treated as unset.
        let ev = eval(2, 3, 4);
        assert_eq!(ev.result, 0);
        assert_eq!(ev.trace[1].x, Some(0));
    }

    #[test]
    fn test_modulus_one() {
        let ev = eval(123, 45, 1);
        assert_eq!(ev.result, 0);
        assert!(ev.trace.iter().all(|row| row.power == 0));
    }

    #[test]
    fn test_largest_operands_do_not_overflow() {
        let max = OVERFLOW_SAFE_MAX;
        let k = i64::MAX;
        let ev = eval(max - 1, k, max);
        assert_eq!(BigUint::from(ev.result as u64), reference(max - 1, k, max));
        assert_eq!(ev.trace.len(), 63);

        let ev = eval(max, 1_000_003, max - 2);
        assert_eq!(BigUint::from(ev.result as u64), reference(max, 1_000_003, max - 2));
    }

    #[test]
    fn test_solve() {
        let ops = Operands::new(2, 5, 13).unwrap();
        assert_eq!(solve(&ops).unwrap(), eval(2, 5, 13));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(200))]

        #[test]
        fn test_matches_big_integer_reference(
            a in prop_oneof![
                0..=OVERFLOW_SAFE_MAX,
                0i64..100,
                Just(OVERFLOW_SAFE_MAX),
            ],
            k in prop_oneof![
                1..=i64::MAX,
                1i64..64,
            ],
            n in prop_oneof![
                1..=OVERFLOW_SAFE_MAX,
                1i64..50,
                Just(OVERFLOW_SAFE_MAX),
            ],
        ) {
            let expansion = expand(k).unwrap();
            let ev = evaluate(a, &expansion, n);

            prop_assert!((0..n).contains(&ev.result));
            prop_assert_eq!(ev.trace.len(), expansion.len());
            prop_assert_eq!(BigUint::from(ev.result as u64), reference(a, k, n));
        }

        #[test]
        fn test_trace_rows_follow_bits(
            a in 0..=OVERFLOW_SAFE_MAX,
            k in 0..=i64::MAX,
            n in 1..=OVERFLOW_SAFE_MAX,
        ) {
            let expansion = expand(k).unwrap();
            let ev = evaluate(a, &expansion, n);

            let mut seen_set_bit = false;
            for (row, bit) in ev.trace.iter().zip(expansion.iter()) {
                seen_set_bit |= bit == 1;
                prop_assert_eq!(row.bit, bit);
                prop_assert!((0..n).contains(&row.power));
                prop_assert_eq!(row.x.is_some(), seen_set_bit);
            }
            prop_assert_eq!(
                ev.trace.iter().map(|row| row.index).collect::<Vec<_>>(),
                (0..expansion.len()).collect::<Vec<_>>()
            );
        }
    }
}
