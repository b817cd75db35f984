//! quadsolve — solve, interactive and batch front ends.
use clap::Parser; // trait import enables QuadsolveCli::parse()
use colored::Colorize;
use tracing::level_filters::LevelFilter;

use quadsolve::cli::{Command, QuadsolveCli};
use quadsolve::commands;
use quadsolve::config::Config;

fn init_logging(verbose: u8) {
    let forced = std::env::var("QUADSOLVE_DEBUG").ok().as_deref() == Some("1");
    let level = match verbose {
        _ if forced => LevelFilter::DEBUG,
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: QuadsolveCli) -> anyhow::Result<i32> {
    let cfg = Config::load(args.config.as_deref())?;
    if args.no_color || !cfg.display.color {
        colored::control::set_override(false);
    }
    let color = !args.no_color && cfg.display.color;

    // No subcommand: interactive session.
    match args.cmd.unwrap_or(Command::Interactive) {
        Command::Solve { a, b, c } => commands::solve::main(a, b, c).map(|_| 0),
        Command::Interactive => commands::interactive::main(color).map(|_| 0),
        Command::Batch { input, out, no_report } => {
            let input = input.unwrap_or(cfg.batch.input);
            let report = if no_report || (!cfg.batch.write_report && out.is_none()) {
                None
            } else {
                Some(out.unwrap_or(cfg.batch.output))
            };
            commands::batch::main(&input, report)
        }
    }
}

fn main() {
    let args = QuadsolveCli::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "err:".red().bold(), e);
            std::process::exit(2);
        }
    }
}
