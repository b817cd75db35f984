use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadsolve",
    about = "Solve linear and quadratic equations a·x² + b·x + c = 0",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuadsolveCli {
    /// Global: path to config (TOML); default: ~/.quadsolve/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: more log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Global: disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Solve a single equation and print its roots
    ///
    /// Examples:
    ///   quadsolve solve 1 -3 2
    ///   quadsolve solve 0 2 -1
    #[command(allow_negative_numbers = true)]
    Solve {
        #[arg(value_name = "A")]
        a: f64,
        #[arg(value_name = "B")]
        b: f64,
        #[arg(value_name = "C")]
        c: f64,
    },

    /// Prompt for coefficients until EOF or `quit` (default)
    Interactive,

    /// Run a batch test file of expected results
    ///
    /// Each line: `a b c count root1 root2`, count -1 meaning infinitely many.
    Batch {
        /// Test file (default from config: input.txt)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Report file (default from config: output.txt)
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Print results only; do not write a report file
        #[arg(long = "no-report", action = ArgAction::SetTrue, conflicts_with = "out")]
        no_report: bool,
    },
}
