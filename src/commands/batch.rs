//! Batch test runner: solve every case in a test file, print each result,
//! write the verdict report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::core::batch::{self, BatchReport, CaseOutcome};
use crate::core::render::render;
use crate::io::atomic::atomic_write;

/// Returns 0 when every case passed, 1 otherwise.
pub fn main(input: &Path, report: Option<PathBuf>) -> Result<i32> {
    let src = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let result = batch::run(&src).with_context(|| format!("in {}", input.display()))?;
    info!(cases = result.outcomes.len(), failed = result.failed(), "batch finished");

    print_results(&result);

    if let Some(path) = report {
        atomic_write(&path, result.render())
            .with_context(|| format!("writing report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(if result.all_passed() { 0 } else { 1 })
}

fn print_results(result: &BatchReport) {
    for o in &result.outcomes {
        debug!(line = o.case.line, equation = ?o.case.equation, "case");
        println!("{}", case_line(o));
    }
    if result.all_passed() {
        println!("{}", result.summary().green().bold());
    } else {
        println!("{}", result.summary().red().bold());
    }
}

/// `  3: two roots: 1, 2 [ok]`; a failed case also names the expected count.
fn case_line(o: &CaseOutcome) -> String {
    let solution = render(&o.actual);
    if o.passed {
        format!("{:>3}: {} [{}]", o.number, solution, "ok".green())
    } else {
        format!(
            "{:>3}: {} [{}: expected {}]",
            o.number,
            solution,
            "FAILED".red().bold(),
            o.case.expected_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_case_names_expected_count() {
        colored::control::set_override(false);
        let report = batch::run("1 -3 2 2 1 2\n1 0 1 1 5 0\n").unwrap();
        assert_eq!(case_line(&report.outcomes[0]), "  1: two roots: 1, 2 [ok]");
        assert_eq!(
            case_line(&report.outcomes[1]),
            "  2: no roots [FAILED: expected one root]"
        );
    }
}
