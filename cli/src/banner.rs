use std::io::{self, Write};

use crate::input::QUIT_SENTINEL;

const TITLE: &str = "Modular Exponentiation Calculator:
Calculates solutions to modular exponentiation problems of
the form: x ≡ (a^k) mod n, printing the square-and-multiply chart.";

const RULE: &str = "====================================================================";

/// Prints the program title followed by usage directions.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{TITLE}\n")?;
    writeln!(
        out,
        "============================[DIRECTIONS]============================"
    )?;
    writeln!(
        out,
        "HOW TO USE: Enter the respective non-negative integer\n\
         numbers to the equation: x ≡ (a^k) mod n in the\n\
         prompts below.\n"
    )?;
    writeln!(out, "*** TO QUIT: enter {QUIT_SENTINEL} at any of the prompts. ***")?;
    writeln!(out, "{RULE}\n")
}
