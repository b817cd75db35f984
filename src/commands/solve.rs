//! One-shot solve from command-line coefficients.

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::render::render;
use crate::core::Equation;

pub fn main(a: f64, b: f64, c: f64) -> Result<()> {
    let equation = Equation::new(a, b, c);
    debug!(a, b, c, "solving");
    let solution = equation
        .solve()
        .with_context(|| format!("cannot solve {a}·x² + {b}·x + {c} = 0"))?;
    debug!(?solution, "solved");
    println!("{}", render(&solution));
    Ok(())
}
