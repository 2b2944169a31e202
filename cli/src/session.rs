//! The interactive prompt loop.
//!
//! A [`Session`] repeatedly asks for `a`, `k` and `n`, re-prompting the same
//! operand until it gets an acceptable value, then prints the chart and the
//! answer. It ends when the user types the quit sentinel or input runs out.

use std::io::{BufRead, Write};

use anyhow::Context;
use modexp_core::{solve, ModExpError, Operand, Operands};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{debug, info};

use crate::{
    banner::write_banner,
    chart::Chart,
    input::{parse_line, Input},
    style::Palette,
};

pub struct Session<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn print_banner(&mut self) -> anyhow::Result<()> {
        write_banner(&mut self.output).context("failed to write banner")
    }

    /// Solves problems until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while let Some(operands) = self.read_operands()? {
            self.solve(&operands)?;
        }
        debug!("session finished");
        Ok(())
    }

    /// Prompts for `a`, `k` and `n` in turn. Returns `None` if the user quits.
    pub fn read_operands(&mut self) -> anyhow::Result<Option<Operands>> {
        let mut values = [0i64; Operand::COUNT];
        for (slot, operand) in values.iter_mut().zip(Operand::iter()) {
            match self.prompt(operand)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            }
        }

        let [a, k, n] = values;
        Ok(Some(Operands::new(a, k, n)?))
    }

    /// Prints the problem, its chart and the answer.
    pub fn solve(&mut self, operands: &Operands) -> anyhow::Result<()> {
        let (a, k, n) = (operands.a(), operands.k(), operands.n());
        let evaluation = solve(operands)?;
        info!(a, k, n, result = evaluation.result, "solved");

        let out = &mut self.output;
        writeln!(out, "\na = {a}, k = {k}, n = {n}\n")?;
        writeln!(out, "\nSolving x ≡ ({a}^{k}) mod {n}...\n")?;
        write!(out, "{}", Chart::new(operands, &evaluation))?;
        writeln!(
            out,
            "{}",
            self.palette
                .success(format_args!("\nThe answer is x = {}.\n", evaluation.result))
        )?;
        out.flush()?;
        Ok(())
    }

    fn prompt(&mut self, operand: Operand) -> anyhow::Result<Option<i64>> {
        loop {
            write!(self.output, "Enter your {operand}: ")?;
            self.output.flush()?;

            let mut line = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut line)
                .context("failed to read input")?;
            if read == 0 {
                debug!(%operand, "input closed");
                writeln!(self.output)?;
                return Ok(None);
            }

            let value = match parse_line(&line) {
                Ok(Input::Quit) => {
                    debug!(%operand, "quit requested");
                    return Ok(None);
                }
                Ok(Input::Value(value)) => value,
                Err(err) => {
                    let shown = String::from_utf8_lossy(&line);
                    info!(%operand, line = %shown.trim(), "rejected input: {err}");
                    self.report(err)?;
                    continue;
                }
            };

            match operand.validate(value) {
                Ok(value) => {
                    debug!(%operand, value, "accepted");
                    return Ok(Some(value));
                }
                Err(err) => {
                    info!(%operand, value, "rejected operand: {err}");
                    self.report(feedback(&err))?;
                }
            }
        }
    }

    fn report(&mut self, message: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "{}",
            self.palette.error(format_args!("[ERROR]: {message}"))
        )?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// User-facing explanation of a rejected operand.
fn feedback(err: &ModExpError) -> String {
    match err {
        ModExpError::OutOfRange { operand, value, .. } => format!(
            "Cannot compute solution with {operand} = {value} as it\n\
             would result in multiplicative overflow.\n\
             Try using a smaller number for {operand} such that {operand}^2 does not exceed\n{}.",
            i64::MAX
        ),
        ModExpError::InvalidModulus => "n cannot be 0! Retry using a valid integer.".to_owned(),
        ModExpError::Negative { .. } => {
            "Entered integer is negative.\nTry again using a valid non-negative integer.".to_owned()
        }
    }
}
