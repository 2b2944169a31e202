use std::io::{self, IsTerminal};

use anyhow::Context;
use clap::Parser;
use modexp_cli::{init_logger, Palette, Session};
use modexp_core::Operands;

/// Solves x ≡ (a^k) mod n with the square-and-multiply chart method.
///
/// Without operands, runs interactively and keeps prompting for new problems
/// until `-1` is entered.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Base `a`; solves a single problem when given together with K and N
    #[arg(value_name = "A", requires_all = ["k", "n"], allow_negative_numbers = true)]
    a: Option<i64>,

    /// Exponent `k`
    #[arg(value_name = "K", requires = "n", allow_negative_numbers = true)]
    k: Option<i64>,

    /// Modulus `n`
    #[arg(value_name = "N", allow_negative_numbers = true)]
    n: Option<i64>,

    /// Do not print the title and directions
    #[arg(long)]
    no_banner: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn operands(&self) -> Option<(i64, i64, i64)> {
        Some((self.a?, self.k?, self.n?))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logger()?;

    let palette = Palette::new(!cli.no_color && io::stdout().is_terminal());
    let mut session = Session::new(io::stdin().lock(), io::stdout(), palette);

    match cli.operands() {
        Some((a, k, n)) => {
            let operands = Operands::new(a, k, n).context("cannot solve the given problem")?;
            session.solve(&operands)
        }
        None => {
            if !cli.no_banner {
                session.print_banner()?;
            }
            session.run()
        }
    }
}
