//! Validation Engine
//!
//! Runs the three checks in order, each gating the next, and optionally
//! measures how long each one took.

use std::time::{Duration, Instant};

use crate::core::{Diagnostic, Verdict};
use crate::validation::{charset, grammar, parens};

/// Validation phases in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Characters,
    Parentheses,
    Grammar,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Characters, Phase::Parentheses, Phase::Grammar];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Characters => "character check",
            Phase::Parentheses => "parenthesis check",
            Phase::Grammar => "grammar check",
        }
    }

    fn run(self, formula: &str) -> Result<(), Diagnostic> {
        match self {
            Phase::Characters => charset::check_characters(formula),
            Phase::Parentheses => parens::check_parentheses(formula),
            Phase::Grammar => grammar::check_grammar(formula),
        }
    }
}

/// Elapsed time of each phase that ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub characters: Option<Duration>,
    pub parentheses: Option<Duration>,
    pub grammar: Option<Duration>,
}

impl PhaseTimings {
    pub fn get(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Characters => self.characters,
            Phase::Parentheses => self.parentheses,
            Phase::Grammar => self.grammar,
        }
    }

    fn record(&mut self, phase: Phase, elapsed: Duration) {
        let slot = match phase {
            Phase::Characters => &mut self.characters,
            Phase::Parentheses => &mut self.parentheses,
            Phase::Grammar => &mut self.grammar,
        };
        *slot = Some(elapsed);
    }

    /// Sum of all recorded phases
    pub fn total(&self) -> Duration {
        Phase::ALL.iter().filter_map(|&phase| self.get(phase)).sum()
    }
}

/// Verdict together with per-phase timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub verdict: Verdict,
    pub timings: PhaseTimings,
}

/// Check a formula, stopping at the first failing phase
pub fn check_formula(formula: &str) -> Result<(), Diagnostic> {
    Phase::ALL
        .iter()
        .try_for_each(|&phase| phase.run(formula))
}

/// Validate a formula
pub fn validate(formula: &str) -> Verdict {
    check_formula(formula).into()
}

/// Validate a formula and time each phase
///
/// Phases after a failure do not run and have no timing.
pub fn validate_timed(formula: &str) -> ValidationReport {
    let mut timings = PhaseTimings::default();

    for phase in Phase::ALL {
        let start = Instant::now();
        let result = phase.run(formula);
        let elapsed = start.elapsed();
        timings.record(phase, elapsed);

        if let Err(diagnostic) = result {
            log::debug!("{} failed after {:?}: {}", phase.label(), elapsed, diagnostic);
            return ValidationReport {
                verdict: Verdict::Invalid(diagnostic),
                timings,
            };
        }
        log::debug!("{} passed in {:?}", phase.label(), elapsed);
    }

    ValidationReport {
        verdict: Verdict::Valid,
        timings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, FormulaError};

    #[test]
    fn test_validate_valid_formula() {
        assert_eq!(validate("(A & B) -> ~C"), Verdict::Valid);
    }

    #[test]
    fn test_character_check_runs_first() {
        // Both an invalid character and an unmatched parenthesis
        let verdict = validate("(A + B");
        assert_eq!(verdict.diagnostic().map(|d| d.kind()), Some(ErrorKind::InvalidCharacter));
    }

    #[test]
    fn test_parenthesis_check_runs_before_grammar() {
        let verdict = validate("(A&&B");
        let diagnostic = verdict.diagnostic().unwrap();
        assert_eq!(diagnostic.error, FormulaError::UnmatchedOpeningParenthesis);
        assert_eq!(diagnostic.position, 0);
    }

    #[test]
    fn test_timings_stop_at_failing_phase() {
        let report = validate_timed(")A(");

        assert!(!report.verdict.is_valid());
        assert!(report.timings.characters.is_some());
        assert!(report.timings.parentheses.is_some());
        assert!(report.timings.grammar.is_none());
    }

    #[test]
    fn test_timings_cover_all_phases_when_valid() {
        let report = validate_timed("A->B");

        assert!(report.verdict.is_valid());
        for phase in Phase::ALL {
            assert!(report.timings.get(phase).is_some(), "{} missing", phase.label());
        }
        assert!(report.timings.total() >= report.timings.grammar.unwrap_or_default());
    }

    #[test]
    fn test_timed_and_untimed_agree() {
        for formula in ["", "A", "A&&B", "(A|)", "-A", "~~A", "A $ B"] {
            assert_eq!(validate_timed(formula).verdict, validate(formula));
        }
    }
}
