//! Diagnostics
//!
//! The error taxonomy of the validator and the single diagnostic a failed
//! validation produces.

use std::fmt;

use serde::Serialize;

use crate::parser::BinaryOperator;

/// Broad category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    InvalidCharacter,
    UnbalancedParenthesis,
    UnexpectedOperand,
    UnexpectedOperator,
    EmptyFormula,
    IncompleteExpression,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidCharacter => "invalid character",
            ErrorKind::UnbalancedParenthesis => "unbalanced parenthesis",
            ErrorKind::UnexpectedOperand => "unexpected operand",
            ErrorKind::UnexpectedOperator => "unexpected operator",
            ErrorKind::EmptyFormula => "empty formula",
            ErrorKind::IncompleteExpression => "incomplete expression",
        };
        f.write_str(name)
    }
}

/// Why a formula was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    EmptyFormula,

    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("closing parenthesis has no matching opening parenthesis")]
    UnmatchedClosingParenthesis,

    #[error("opening parenthesis is never closed")]
    UnmatchedOpeningParenthesis,

    #[error("variable '{0}' follows another operand without an operator between them")]
    AdjacentOperands(char),

    #[error("negation '~' cannot follow a complete operand")]
    MisplacedNegation,

    #[error("opening parenthesis cannot follow a complete operand")]
    MisplacedOpeningParenthesis,

    #[error("operator '{operator}' cannot directly follow '{after}'")]
    OperatorAfter {
        operator: BinaryOperator,
        after: char,
    },

    #[error("operator '{0}' is missing its left operand")]
    MissingLeftOperand(BinaryOperator),

    #[error("operator '{0}' is missing its right operand")]
    MissingRightOperand(BinaryOperator),

    #[error("'-' must be immediately followed by '>' to form an implication")]
    IncompleteImplication,

    #[error("'>' must be immediately preceded by '-' to form an implication")]
    StrayArrowHead,

    #[error("parentheses enclose an empty subexpression")]
    EmptySubexpression,

    #[error("closing parenthesis where an operand is expected")]
    MisplacedClosingParenthesis,

    #[error("formula ends with an incomplete expression")]
    IncompleteExpression,
}

impl FormulaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormulaError::EmptyFormula => ErrorKind::EmptyFormula,
            FormulaError::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            FormulaError::UnmatchedClosingParenthesis
            | FormulaError::UnmatchedOpeningParenthesis => ErrorKind::UnbalancedParenthesis,
            FormulaError::AdjacentOperands(_)
            | FormulaError::MisplacedNegation
            | FormulaError::MisplacedOpeningParenthesis => ErrorKind::UnexpectedOperand,
            FormulaError::OperatorAfter { .. }
            | FormulaError::MissingLeftOperand(_)
            | FormulaError::MissingRightOperand(_)
            | FormulaError::IncompleteImplication
            | FormulaError::StrayArrowHead
            | FormulaError::EmptySubexpression
            | FormulaError::MisplacedClosingParenthesis => ErrorKind::UnexpectedOperator,
            FormulaError::IncompleteExpression => ErrorKind::IncompleteExpression,
        }
    }
}

/// A validation failure pinned to a character index of the formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based character index where the violation was detected
    pub position: usize,
    pub error: FormulaError,
}

impl Diagnostic {
    pub fn new(position: usize, error: FormulaError) -> Self {
        Self { position, error }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Human-readable reason, including the position
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at position {})", self.error, self.position)
    }
}

impl std::error::Error for Diagnostic {}

/// Outcome of validating one formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(Diagnostic),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(diagnostic) => Some(diagnostic),
        }
    }
}

impl From<Result<(), Diagnostic>> for Verdict {
    fn from(result: Result<(), Diagnostic>) -> Self {
        match result {
            Ok(()) => Verdict::Valid,
            Err(diagnostic) => Verdict::Invalid(diagnostic),
        }
    }
}
