//! Formula Parser
//!
//! Tokenization only. Formulas are never turned into a tree; the validation
//! engine walks the token stream directly.

pub mod lexer;

pub use lexer::{is_formula_char, tokenize_formula, BinaryOperator, Token, TokenKind};
