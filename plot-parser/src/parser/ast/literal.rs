use crate::{
    parser::{error::{NumberOutOfRange, UnexpectedToken}, Parse, Parser},
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal, such as `2` or `0.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token("a number")?;
        match token.value() {
            Some(value) if value.is_finite() => Ok(Self { value, span: token.span }),
            Some(_) => Err(Error::new(vec![token.span], NumberOutOfRange)),
            None => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: "a number",
                found: token.kind,
            })),
        }
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol / identifier literal: a variable, constant, or function name. Names are stored in
/// lowercase, and every spelling of theta is stored as `theta`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token("a name")?;
        if token.kind.is_name() {
            Ok(Self {
                name: token.text().into_owned(),
                span: token.span,
            })
        } else {
            Err(Error::new(vec![token.span], UnexpectedToken {
                expected: "a name",
                found: token.kind,
            }))
        }
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value in a formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.current_token().map(|token| token.kind) {
            Some(TokenKind::Number) => input.try_parse().map(Literal::Number),
            _ => input.try_parse().map(Literal::Symbol),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(sym) => sym.fmt(f),
        }
    }
}
