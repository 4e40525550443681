use crate::parser::{
    ast::{
        binary::Binary,
        call::Call,
        iter::ExprIter,
        literal::Literal,
        paren::Paren,
        unary::Unary,
    },
    error::{UnexpectedEof, UnexpectedToken},
    Parse,
    Parser,
    Precedence,
};
use crate::tokenizer::TokenKind;
use plot_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression in a formula.
///
/// Parentheses do not produce a node of their own; grouping is encoded in the shape of the tree
/// and restored by the [`fmt::Display`] implementation where needed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value or a variable.
    Literal(Literal),

    /// A function call, such as `cos(2*theta)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// Returns the precedence of the outermost operation of this expression.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Literal(_) | Expr::Call(_) => Precedence::Atom,
            Expr::Unary(unary) => unary.op.precedence(),
            Expr::Binary(binary) => binary.op.precedence(),
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns the value of this expression if it is a number literal.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Literal(Literal::Number(num)) => Some(num.value),
            _ => None,
        }
    }

    /// Returns the name of this expression if it is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expr::Literal(Literal::Symbol(sym)) => Some(&sym.name),
            _ => None,
        }
    }

    /// Returns true if the given symbol appears anywhere in the expression as a variable.
    pub fn references(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.as_symbol() == Some(name))
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Parses an operand: a number, a variable, a call, or a parenthesized expression.
pub(crate) fn parse_atom(input: &mut Parser) -> Result<Expr, Error> {
    let expected = "an expression";
    let kind = match input.current_token() {
        Some(token) => token.kind,
        None => return Err(input.error(UnexpectedEof { expected })),
    };

    match kind {
        TokenKind::Number | TokenKind::Theta => input.try_parse::<Literal>().map(Expr::Literal),
        // a name directly followed by `(` is a call
        TokenKind::Name if input.lookahead(1).map(|token| token.kind) == Some(TokenKind::OpenParen) => {
            input.try_parse::<Call>().map(Expr::Call)
        },
        TokenKind::Name => input.try_parse::<Literal>().map(Expr::Literal),
        TokenKind::OpenParen => input.try_parse::<Paren>().map(|paren| paren.expr),
        found => Err(input.error(UnexpectedToken { expected, found })),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
