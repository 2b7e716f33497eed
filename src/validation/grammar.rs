//! Grammar Validator
//!
//! A two-state machine over the token stream. The validator is either
//! expecting an operand (a variable, a negation, or an opening parenthesis)
//! or an operator (a binary connective or a closing parenthesis). The previous
//! token is kept for adjacency checks that produce more precise diagnostics.

use crate::core::{Diagnostic, FormulaError};
use crate::parser::{tokenize_formula, Token, TokenKind};

/// Check the operand/operator structure of a formula
///
/// Assumes nothing about the earlier phases: unknown characters are still
/// reported, but parenthesis depth is not tracked here.
pub fn check_grammar(formula: &str) -> Result<(), Diagnostic> {
    if formula.is_empty() {
        return Err(Diagnostic::new(0, FormulaError::EmptyFormula));
    }

    let mut machine = GrammarMachine::new();
    for token in tokenize_formula(formula) {
        log::trace!("token {:?} at {}", token.kind, token.position);
        machine.accept(token)?;
    }

    machine.finish(formula.chars().count())
}

#[derive(Debug)]
struct GrammarMachine {
    expecting_operand: bool,
    prev: Option<TokenKind>,
}

impl GrammarMachine {
    fn new() -> Self {
        Self {
            expecting_operand: true,
            prev: None,
        }
    }

    fn accept(&mut self, token: Token) -> Result<(), Diagnostic> {
        let fail = |error: FormulaError| -> Result<(), Diagnostic> {
            Err(Diagnostic::new(token.position, error))
        };

        match token.kind {
            TokenKind::Variable(name) => {
                if !self.expecting_operand {
                    return fail(FormulaError::AdjacentOperands(name));
                }
                self.expecting_operand = false;
            }

            // Negation keeps expecting the operand it applies to
            TokenKind::Negation => {
                if !self.expecting_operand {
                    return fail(FormulaError::MisplacedNegation);
                }
            }

            TokenKind::Binary(operator) => {
                if let Some(after @ (TokenKind::OpenParen | TokenKind::Negation)) = self.prev {
                    return fail(FormulaError::OperatorAfter {
                        operator,
                        after: if after == TokenKind::OpenParen { '(' } else { '~' },
                    });
                }
                if self.expecting_operand {
                    return fail(FormulaError::MissingLeftOperand(operator));
                }
                self.expecting_operand = true;
            }

            TokenKind::OpenParen => {
                let after_opener = matches!(
                    self.prev,
                    Some(TokenKind::OpenParen | TokenKind::Negation)
                );
                if !self.expecting_operand && !after_opener {
                    return fail(FormulaError::MisplacedOpeningParenthesis);
                }
                self.expecting_operand = true;
            }

            // Closing does not flip the expectation: `(A)` is itself an operand
            TokenKind::CloseParen => match self.prev {
                Some(TokenKind::OpenParen) => return fail(FormulaError::EmptySubexpression),
                Some(TokenKind::Binary(operator)) => {
                    return fail(FormulaError::MissingRightOperand(operator));
                }
                _ if self.expecting_operand => {
                    return fail(FormulaError::MisplacedClosingParenthesis);
                }
                _ => {}
            },

            TokenKind::BareDash => return fail(FormulaError::IncompleteImplication),
            TokenKind::BareArrowHead => return fail(FormulaError::StrayArrowHead),
            TokenKind::Unknown(ch) => return fail(FormulaError::InvalidCharacter(ch)),
        }

        self.prev = Some(token.kind);
        Ok(())
    }

    fn finish(self, length: usize) -> Result<(), Diagnostic> {
        if self.expecting_operand {
            return Err(Diagnostic::new(length, FormulaError::IncompleteExpression));
        }
        Ok(())
    }
}
