//! Rendering of validation reports as text or JSON

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::config::{Config, OutputFormat};
use crate::core::{ErrorKind, Verdict};
use crate::validation::{Phase, ValidationReport};

pub const WELL_FORMED: &str = "The formula is well-formed.";

/// Write a report in the configured format
pub fn write_report<W: Write>(
    out: &mut W,
    formula: &str,
    report: &ValidationReport,
    config: &Config,
) -> Result<()> {
    match config.format {
        OutputFormat::Text => write_text(out, formula, report, config.show_timings),
        OutputFormat::Json => write_json(out, formula, report, config.show_timings),
    }
}

fn write_text<W: Write>(
    out: &mut W,
    formula: &str,
    report: &ValidationReport,
    show_timings: bool,
) -> Result<()> {
    match &report.verdict {
        Verdict::Valid => writeln!(out, "{WELL_FORMED}")?,
        Verdict::Invalid(diagnostic) => {
            writeln!(out, "Error: {}", diagnostic.message())?;
            writeln!(out, "{}", render_caret(formula, diagnostic.position))?;
        }
    }

    if show_timings {
        for phase in Phase::ALL {
            if let Some(elapsed) = report.timings.get(phase) {
                writeln!(out, "  {}: {:?}", phase.label(), elapsed)?;
            }
        }
        writeln!(
            out,
            "Verification time: {:.9} seconds.",
            report.timings.total().as_secs_f64()
        )?;
    }

    Ok(())
}

/// The formula on one line and a caret under `position` on the next
///
/// Whitespace is flattened to spaces so the caret lines up under tabs.
pub fn render_caret(formula: &str, position: usize) -> String {
    let flattened: String = formula
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    format!("  {}\n  {}^", flattened, " ".repeat(position))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    formula: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostic: Option<JsonDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timings_us: Option<JsonTimings>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    position: usize,
    kind: ErrorKind,
    message: String,
}

#[derive(Serialize)]
struct JsonTimings {
    characters: Option<f64>,
    parentheses: Option<f64>,
    grammar: Option<f64>,
    total: f64,
}

fn micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000_000.0
}

fn write_json<W: Write>(
    out: &mut W,
    formula: &str,
    report: &ValidationReport,
    show_timings: bool,
) -> Result<()> {
    let timings = &report.timings;
    let json = JsonReport {
        formula,
        valid: report.verdict.is_valid(),
        diagnostic: report.verdict.diagnostic().map(|d| JsonDiagnostic {
            position: d.position,
            kind: d.kind(),
            message: d.error.to_string(),
        }),
        timings_us: show_timings.then(|| JsonTimings {
            characters: timings.characters.map(micros),
            parentheses: timings.parentheses.map(micros),
            grammar: timings.grammar.map(micros),
            total: micros(timings.total()),
        }),
    };

    serde_json::to_writer(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
