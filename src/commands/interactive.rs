//! Interactive session: read `a b c` lines, print the classified roots.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tracing::{debug, warn};

use crate::core::render::render;
use crate::core::Equation;

const PROMPT: &str = "Enter coefficients a b c:";

/// Tally of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub solved: usize,
    pub rejected: usize,
}

pub fn main(color: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_session(stdin.lock(), stdout.lock(), color)?;
    debug!(solved = summary.solved, rejected = summary.rejected, "session closed");
    Ok(())
}

/// Runs the prompt loop until EOF or `q`/`quit`/`exit`.
///
/// Malformed lines are reported on `out` and never reach the solver.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    color: bool,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    if color {
        writeln!(out, "{}", "Quadratic equation solver".bold().cyan())?;
        writeln!(out, "{}", "a·x² + b·x + c = 0  (q to quit)".dimmed())?;
    } else {
        writeln!(out, "Quadratic equation solver")?;
        writeln!(out, "a·x² + b·x + c = 0  (q to quit)")?;
    }

    loop {
        if color {
            write!(out, "{} ", PROMPT.bold())?;
        } else {
            write!(out, "{PROMPT} ")?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }

        let outcome = parse_coefficients(line)
            .and_then(|coeffs| Equation::from(coeffs).solve().map_err(|e| e.to_string()));
        match outcome {
            Ok(solution) => {
                summary.solved += 1;
                writeln!(out, "{}", render(&solution))?;
            }
            Err(msg) => {
                summary.rejected += 1;
                warn!(input = line, "{msg}");
                if color {
                    writeln!(out, "{} {}", "err:".red().bold(), msg)?;
                } else {
                    writeln!(out, "err: {msg}")?;
                }
            }
        }
    }
    Ok(summary)
}

/// Parses exactly three finite numbers separated by whitespace and/or commas.
pub fn parse_coefficients(line: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 coefficients, found {}", parts.len()));
    }

    let mut coeffs = [0.0; 3];
    for (slot, part) in coeffs.iter_mut().zip(parts) {
        let v: f64 = part
            .parse()
            .map_err(|_| format!("invalid number `{part}`"))?;
        if !v.is_finite() {
            return Err(format!("non-finite coefficient `{part}`"));
        }
        *slot = v;
    }
    Ok(coeffs)
}
