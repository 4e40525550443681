use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use plot_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing the expression `1 + 2 * 3`, we will first parse the left-hand-side `1`,
    /// then the operator `+`, then the right-hand-side `2`. However, before we build the
    /// corresponding AST node, we should check if the operator after `2` has higher precedence
    /// than `+` (if it exists).
    ///
    /// If it does, we should parse the expression starting with `2` first, so that we get `2 * 3`
    /// as the right-hand-side to the `1 +` node. This works by calling into [`Self::parse_expr`]
    /// again, but with `rhs` (`2` in this case) as the `lhs` argument.
    ///
    /// If it does not (such as in the expression `3 * 2 + 1`), we build the AST node `3 * 2`
    /// first. Then, [`Self::parse_expr`] will pick up the `+ 1` part of the expression, and
    /// build the AST node `3 * 2 + 1`.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        while let Some(next_op) = input.peek::<BinOp>() {
            let binds_tighter = next_op.precedence() > precedence
                || (next_op.precedence() == precedence
                    && next_op.associativity() == Associativity::Right);

            if binds_tighter {
                // parse the expression starting with `rhs` first: `1 + 2 * 3`, `2 ^ 3 ^ 4`
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                // lower precedence, or equal precedence and left-associativity: `1 * 2 + 3` or
                // `1 * 2 * 3`; let the caller build `lhs op rhs` first
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there is a binary operator of at least the given precedence and a right-hand-side.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            match input.peek::<BinOp>() {
                Some(op) if op.precedence() >= precedence => {
                    let op = input.try_parse::<BinOp>()?;
                    let rhs = Unary::parse_or_lower(input)?;
                    lhs = Self::complete_rhs(input, lhs, op, rhs)?;
                },
                _ => return Ok(lhs),
            }
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precedence = self.op.precedence();
        let associativity = self.op.associativity();

        let lhs_parens = self.lhs.precedence() < precedence
            || (self.lhs.precedence() == precedence && associativity == Associativity::Right);
        let rhs_parens = self.rhs.precedence() < precedence
            || (self.rhs.precedence() == precedence && associativity == Associativity::Left);

        if lhs_parens {
            write!(f, "({})", self.lhs)?;
        } else {
            self.lhs.fmt(f)?;
        }

        self.op.fmt(f)?;

        if rhs_parens {
            write!(f, "({})", self.rhs)
        } else {
            self.rhs.fmt(f)
        }
    }
}
