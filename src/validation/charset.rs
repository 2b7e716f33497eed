//! Character-set filter

use crate::core::{Diagnostic, FormulaError};
use crate::parser::is_formula_char;

/// Reject the first character outside the formula alphabet
pub fn check_characters(formula: &str) -> Result<(), Diagnostic> {
    match formula
        .chars()
        .enumerate()
        .find(|&(_, ch)| !is_formula_char(ch))
    {
        Some((position, ch)) => Err(Diagnostic::new(position, FormulaError::InvalidCharacter(ch))),
        None => Ok(()),
    }
}
