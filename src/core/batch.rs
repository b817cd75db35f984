//! Batch test files: parse expected results, solve, compare, report.
//!
//! One case per line:
//!
//! ```text
//! # a  b  c  count  root1  root2
//! 1  -3   2   2      1      2
//! 0   0   0  -1      0      0
//! ```
//!
//! `count` is `-1` (infinitely many), `0`, `1` or `2`. Unused root columns are
//! ignored. Blank lines and `#` comments are skipped.

use std::fmt::Write as _;

use thiserror::Error;

use super::error::SolveError;
use super::solution::{RootCount, Solution};
use super::solver::Equation;
use super::tolerance::approx_eq;

/// File-format code for an infinite root count.
const INFINITE_CODE: i32 = -1;

const FIELDS: usize = 6;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("line {line}: {source}")]
    Solve {
        line: usize,
        #[source]
        source: SolveError,
    },
}

/// One expected-result row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestCase {
    /// 1-based line in the source file.
    pub line: usize,
    pub equation: Equation,
    pub expected_count: RootCount,
    pub expected_roots: [f64; 2],
}

impl TestCase {
    /// Whether `actual` agrees with the expected count and roots.
    pub fn accepts(&self, actual: &Solution) -> bool {
        if actual.count() != self.expected_count {
            return false;
        }
        actual
            .roots()
            .iter()
            .zip(self.expected_roots.iter())
            .all(|(x, want)| approx_eq(*x, *want))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaseOutcome {
    /// 1-based case number.
    pub number: usize,
    pub case: TestCase,
    pub actual: Solution,
    pub passed: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Final tally line.
    pub fn summary(&self) -> String {
        match self.failed() {
            0 => "ALL TESTS ARE DONE".to_string(),
            n => format!("TESTS FAILED: {n}"),
        }
    }

    /// Report file contents: a verdict line per case, then the tally.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for o in &self.outcomes {
            if o.passed {
                out.push_str("YES\n");
            } else {
                let _ = writeln!(out, "TEST {} FAILED", o.number);
            }
        }
        out.push_str(&self.summary());
        out.push('\n');
        out
    }
}

pub fn parse_cases(src: &str) -> Result<Vec<TestCase>, BatchError> {
    let mut cases = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        cases.push(parse_case(line, text)?);
    }
    Ok(cases)
}

fn parse_case(line: usize, text: &str) -> Result<TestCase, BatchError> {
    let parse_err = |message: String| BatchError::Parse { line, message };

    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != FIELDS {
        return Err(parse_err(format!(
            "expected {FIELDS} fields, found {}",
            fields.len()
        )));
    }

    let mut nums = [0.0f64; 5];
    let numeric = [0, 1, 2, 4, 5];
    for (slot, &i) in nums.iter_mut().zip(numeric.iter()) {
        let v: f64 = fields[i]
            .parse()
            .map_err(|_| parse_err(format!("invalid number `{}`", fields[i])))?;
        if !v.is_finite() {
            return Err(parse_err(format!("non-finite value `{}`", fields[i])));
        }
        *slot = v;
    }

    let expected_count = fields[3]
        .parse::<i32>()
        .ok()
        .and_then(count_from_code)
        .ok_or_else(|| parse_err(format!("invalid root count `{}`", fields[3])))?;

    Ok(TestCase {
        line,
        equation: Equation::new(nums[0], nums[1], nums[2]),
        expected_count,
        expected_roots: [nums[3], nums[4]],
    })
}

fn count_from_code(code: i32) -> Option<RootCount> {
    match code {
        INFINITE_CODE => Some(RootCount::InfiniteRoots),
        0 => Some(RootCount::NoRoots),
        1 => Some(RootCount::OneRoot),
        2 => Some(RootCount::TwoRoots),
        _ => None,
    }
}

/// Solves every case. Mismatches are recorded, not raised.
pub fn run_cases(cases: &[TestCase]) -> Result<BatchReport, BatchError> {
    let mut outcomes = Vec::with_capacity(cases.len());
    for (idx, case) in cases.iter().enumerate() {
        let actual = case
            .equation
            .solve()
            .map_err(|source| BatchError::Solve { line: case.line, source })?;
        outcomes.push(CaseOutcome {
            number: idx + 1,
            case: *case,
            actual,
            passed: case.accepts(&actual),
        });
    }
    Ok(BatchReport { outcomes })
}

pub fn run(src: &str) -> Result<BatchReport, BatchError> {
    run_cases(&parse_cases(src)?)
}
