//! Propositional Formula Checker
//!
//! Decides whether a propositional logic formula is well-formed.
//!
//! This library provides:
//! - Formula tokenization
//! - Character-set, parenthesis, and grammar validation with positioned diagnostics
//! - Configuration management
//! - The `wffcheck` console front end

pub mod cli;
pub mod config;
pub mod core;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{Diagnostic, ErrorKind, FormulaError, VariableAssignments, Verdict};
pub use parser::{tokenize_formula, Token, TokenKind};
pub use validation::{check_formula, validate, validate_timed, ValidationReport};
