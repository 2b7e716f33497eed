//! Parenthesis balance checker

use crate::core::{Diagnostic, FormulaError};

/// Check that every `(` is closed and every `)` has an opener
///
/// Unmatched openers are reported at the outermost one, i.e. the earliest
/// position still open when the scan ends.
pub fn check_parentheses(formula: &str) -> Result<(), Diagnostic> {
    let mut open_positions: Vec<usize> = Vec::new();

    for (position, ch) in formula.chars().enumerate() {
        match ch {
            '(' => open_positions.push(position),
            ')' => {
                if open_positions.pop().is_none() {
                    return Err(Diagnostic::new(
                        position,
                        FormulaError::UnmatchedClosingParenthesis,
                    ));
                }
            }
            _ => {}
        }
    }

    match open_positions.first() {
        Some(&position) => Err(Diagnostic::new(
            position,
            FormulaError::UnmatchedOpeningParenthesis,
        )),
        None => Ok(()),
    }
}
