use crate::{
    parser::{
        ast::{binary::Binary, expr::{parse_atom, Expr}},
        token::op::UnaryOp,
        Parser,
    },
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    ///
    /// The operand of `-` extends over any exponentiation that follows it, so `-x^2` parses as
    /// `-(x^2)`, while `-2*x` parses as `(-2)*x`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if input.current_token().map(|token| token.kind) != Some(TokenKind::Sub) {
            return parse_atom(input);
        }

        let op = input.try_parse::<UnaryOp>()?;
        let operand = Self::parse_or_lower(input)?;
        let operand = Binary::parse_expr(input, operand, op.precedence())?;

        let span = op.span.start..operand.span().end;
        Ok(Expr::Unary(Self {
            operand: Box::new(operand),
            op,
            span,
        }))
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.op.fmt(f)?;
        if self.operand.precedence() <= self.op.precedence() {
            write!(f, "({})", self.operand)
        } else {
            self.operand.fmt(f)
        }
    }
}
