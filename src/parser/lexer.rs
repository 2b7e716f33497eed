//! Formula Lexer
//!
//! Fast, simple tokenization of propositional formulas.
//! Whitespace is dropped; every token remembers the character index it starts at.

use std::fmt;

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Conjunction `&`
    And,
    /// Disjunction `|`
    Or,
    /// Implication `->`
    Implies,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::And => "&",
            BinaryOperator::Or => "|",
            BinaryOperator::Implies => "->",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Token types in a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Single-character variable like `A` or `p`
    Variable(char),
    /// Negation `~`
    Negation,
    /// `&`, `|` or `->`
    Binary(BinaryOperator),
    OpenParen,
    CloseParen,
    /// A `-` not immediately followed by `>`
    BareDash,
    /// A `>` not immediately preceded by `-`
    BareArrowHead,
    /// Anything outside the formula alphabet
    Unknown(char),
}

/// A token with the character index it starts at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Tokenize a formula into positioned tokens
///
/// `-` directly followed by `>` becomes a single implication token positioned
/// at the `-`. Any whitespace between them breaks the arrow.
pub fn tokenize_formula(formula: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = formula.chars().enumerate().peekable();

    while let Some((position, ch)) = chars.next() {
        let kind = match ch {
            c if c.is_whitespace() => continue,

            c if c.is_ascii_alphanumeric() => TokenKind::Variable(c),
            '~' => TokenKind::Negation,
            '&' => TokenKind::Binary(BinaryOperator::And),
            '|' => TokenKind::Binary(BinaryOperator::Or),
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,

            '-' => {
                if matches!(chars.peek(), Some(&(_, '>'))) {
                    chars.next();
                    TokenKind::Binary(BinaryOperator::Implies)
                } else {
                    TokenKind::BareDash
                }
            }
            '>' => TokenKind::BareArrowHead,

            other => TokenKind::Unknown(other),
        };

        tokens.push(Token { kind, position });
    }

    tokens
}

/// Whether a character belongs to the formula alphabet (whitespace included)
pub fn is_formula_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_whitespace()
        || matches!(ch, '(' | ')' | '~' | '|' | '&' | '-' | '>')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(formula: &str) -> Vec<TokenKind> {
        tokenize_formula(formula).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_simple_conjunction() {
        let tokens = tokenize_formula("A & B");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].kind, TokenKind::Variable('A'));
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].kind, TokenKind::Binary(BinaryOperator::And));
        assert_eq!(tokens[1].position, 2);
        assert_eq!(tokens[2].kind, TokenKind::Variable('B'));
        assert_eq!(tokens[2].position, 4);
    }

    #[test]
    fn test_tokenize_implication_is_one_token() {
        let tokens = tokenize_formula("p->q");

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Binary(BinaryOperator::Implies));
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 3);
    }

    #[test]
    fn test_tokenize_split_arrow() {
        assert_eq!(
            kinds("A - > B"),
            vec![
                TokenKind::Variable('A'),
                TokenKind::BareDash,
                TokenKind::BareArrowHead,
                TokenKind::Variable('B'),
            ]
        );
    }

    #[test]
    fn test_tokenize_double_dash() {
        // Only the second dash pairs with the arrow head
        assert_eq!(
            kinds("A-->B"),
            vec![
                TokenKind::Variable('A'),
                TokenKind::BareDash,
                TokenKind::Binary(BinaryOperator::Implies),
                TokenKind::Variable('B'),
            ]
        );
    }

    #[test]
    fn test_tokenize_parens_and_negation() {
        assert_eq!(
            kinds("~(x|1)"),
            vec![
                TokenKind::Negation,
                TokenKind::OpenParen,
                TokenKind::Variable('x'),
                TokenKind::Binary(BinaryOperator::Or),
                TokenKind::Variable('1'),
                TokenKind::CloseParen,
            ]
        );
    }

    #[test]
    fn test_tokenize_unknown_character() {
        let tokens = tokenize_formula("A+B");
        assert_eq!(tokens[1].kind, TokenKind::Unknown('+'));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_positions_count_characters_not_bytes() {
        let tokens = tokenize_formula("é&A");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_tokenize_whitespace_only() {
        assert!(tokenize_formula(" \t ").is_empty());
    }

    #[test]
    fn test_is_formula_char() {
        for ch in ['A', 'z', '7', '(', ')', '~', '|', '&', '-', '>', ' ', '\t'] {
            assert!(is_formula_char(ch), "{ch:?} should be accepted");
        }
        for ch in ['+', '!', '^', '<', 'é', '.'] {
            assert!(!is_formula_char(ch), "{ch:?} should be rejected");
        }
    }
}
