use std::process::ExitCode;

use anyhow::Result;

fn main() -> Result<ExitCode> {
    wff_checker::cli::run()
}
