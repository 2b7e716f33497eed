//! Command-line front end
//!
//! One-shot checking of a formula given as an argument, or an interactive
//! session reading formulas from standard input.

pub mod display;
pub mod repl;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use log::LevelFilter;

use crate::config::Config;
use crate::validation::validate_timed;

pub use repl::{Repl, SessionSummary};

/// Entry point of the `wffcheck` binary
pub fn run() -> Result<ExitCode> {
    let config = Config::from_command_line()?;
    init_logging(config.log_level);

    if let Some(path) = &config.config_file {
        log::info!("Using config file {}", path.display());
    }

    let stdout = io::stdout();
    match &config.formula {
        Some(formula) => {
            let well_formed = check_once(&config, formula, &mut stdout.lock())?;
            Ok(if well_formed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        None => {
            let stdin = io::stdin();
            Repl::new(&config, stdin.lock(), stdout.lock()).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Check a single formula and print its report, returning whether it is well-formed
pub fn check_once<W: Write>(config: &Config, formula: &str, out: &mut W) -> Result<bool> {
    let report = validate_timed(formula);
    display::write_report(out, formula, &report, config)?;
    out.flush()?;
    Ok(report.verdict.is_valid())
}

/// Log to stderr at the configured level; `RUST_LOG` takes precedence
fn init_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();

    if let Err(e) = builder.try_init() {
        eprintln!("Failed to initialize logging: {e}");
    }
}
