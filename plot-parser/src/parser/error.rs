//! Syntax errors reported by the parser.

use ariadne::Fmt;
use plot_attrs::ErrorKind;
use plot_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the formula was reached unexpectedly.
///
/// The `expected` field should start with "a" or "an" to make the error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    labels = [format!("I expected to see {} here", self.expected)],
)]
pub struct UnexpectedEof {
    /// What should have come next.
    pub expected: &'static str,
}

/// The end of the formula was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    labels = [format!("I could not understand the remaining {} here", "formula".fg(EXPR))],
    help = "check for a missing operator or an extra closing parenthesis",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}, found {}", self.expected, self.found),
    labels = [format!("I expected to see {} here", self.expected)],
)]
pub struct UnexpectedToken {
    /// What was expected.
    pub expected: &'static str,

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
///
/// The first span points at the opening parenthesis, the second at where the closing one should be.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed", "add a closing parenthesis here"],
    help = format!("add a {} to close the group", "`)`".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// Parentheses were used with nothing inside them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// The formula, or the part of it after `=`, is empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty formula",
    labels = ["I expected to see an expression here"],
    help = format!("try a formula like {} or {}", "y = x^2".fg(EXPR), "r = 2(1 + cos θ)".fg(EXPR)),
)]
pub struct EmptyExpression;

/// A number literal is too large to be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "number is too large",
    labels = ["this number does not fit in a 64-bit float"],
    help = format!("numbers must be smaller than about {}", "1.8e308".fg(EXPR)),
)]
pub struct NumberOutOfRange;
