//! Validation Engine
//!
//! Character-set filter, parenthesis balance, and grammar checks, kept apart
//! from tokenization and console concerns.

pub mod charset;
pub mod engine;
pub mod grammar;
pub mod parens;

pub use charset::check_characters;
pub use engine::{check_formula, validate, validate_timed, Phase, PhaseTimings, ValidationReport};
pub use grammar::check_grammar;
pub use parens::check_parentheses;
