//! Interactive read-check-print loop

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::cli::display;
use crate::config::{Config, OutputFormat};
use crate::core::{VariableAssignments, Verdict};
use crate::validation::validate_timed;

const FORMULA_PROMPT: &str = "Enter a propositional logic formula (or 'exit' to quit): ";
const ASSIGNMENT_PROMPT: &str = "Assign a variable (e.g. 'A 1'), or 'q' to skip: ";

/// Counts of what happened during a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub checked: usize,
    pub well_formed: usize,
}

impl SessionSummary {
    fn record(&mut self, verdict: &Verdict) {
        self.checked += 1;
        if verdict.is_valid() {
            self.well_formed += 1;
        }
    }
}

/// Console session over any line-oriented input and output
pub struct Repl<'a, R, W> {
    config: &'a Config,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Run until an exit command or end of input
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            self.prompt(FORMULA_PROMPT)?;
            let Some(formula) = self.read_line()? else {
                log::debug!("End of input");
                break;
            };

            if self.config.is_exit_command(&formula) {
                log::debug!("Exit command received");
                break;
            }

            if self.config.collect_assignments {
                let assignments = self.collect_assignments()?;
                log::debug!("Collected {} assignment(s): {:?}", assignments.len(), assignments);
            }

            let report = validate_timed(&formula);
            display::write_report(&mut self.output, &formula, &report, self.config)?;
            self.output.flush()?;
            summary.record(&report.verdict);
        }

        log::info!(
            "Session ended: {} formula(s) checked, {} well-formed",
            summary.checked,
            summary.well_formed
        );
        Ok(summary)
    }

    fn collect_assignments(&mut self) -> Result<VariableAssignments> {
        let mut assignments = VariableAssignments::new();

        loop {
            self.prompt(ASSIGNMENT_PROMPT)?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if self.config.is_skip_command(&line) {
                break;
            }

            match assignments.assign_entry(&line) {
                Ok((variable, value)) => log::trace!("{variable} = {value}"),
                Err(e) if self.config.format == OutputFormat::Text => {
                    writeln!(self.output, "Ignored assignment: {e}")?;
                }
                Err(e) => log::warn!("Ignored assignment: {e}"),
            }
        }

        Ok(assignments)
    }

    /// Prompts are left out of JSON output so it stays machine-readable
    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.config.format == OutputFormat::Text {
            write!(self.output, "{text}")?;
            self.output.flush()?;
        }
        Ok(())
    }

    /// Next line without its line terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Give back the output, e.g. to inspect it in tests
    pub fn into_output(self) -> W {
        self.output
    }
}
