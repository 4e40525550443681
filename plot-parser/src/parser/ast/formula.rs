use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::EmptyExpression,
        token::{Assign, CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The dependent variable named on the left of `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dependent {
    /// `y = ...`
    Y,

    /// `r = ...`
    R,

    /// `z = ...`
    Z,

    /// A function header, such as `f(x) = ...`.
    Func {
        name: String,
        param: String,
    },
}

impl fmt::Display for Dependent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dependent::Y => write!(f, "y"),
            Dependent::R => write!(f, "r"),
            Dependent::Z => write!(f, "z"),
            Dependent::Func { name, param } => write!(f, "{}({})", name, param),
        }
    }
}

impl Parse for Dependent {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;

        let dependent = if input.current_token().map(|token| token.kind) == Some(TokenKind::OpenParen) {
            input.try_parse::<OpenParen>()?;
            let param = input.try_parse::<LitSym>()?;
            input.try_parse::<CloseParen>()?;
            Dependent::Func { name: name.name, param: param.name }
        } else {
            match name.name.as_str() {
                "y" => Dependent::Y,
                "r" => Dependent::R,
                "z" => Dependent::Z,
                _ => return Err(Error::new(vec![name.span], crate::parser::error::UnexpectedToken {
                    expected: "`y`, `r`, `z`, or a function header",
                    found: TokenKind::Name,
                })),
            }
        };

        input.try_parse::<Assign>()?;
        Ok(dependent)
    }
}

/// A complete formula: an expression, optionally preceded by the variable it defines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Formula {
    /// The dependent variable, if the formula names one.
    pub dependent: Option<Dependent>,

    /// The right-hand side of the formula.
    pub expr: Expr,
}

impl Parse for Formula {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let dependent = input.try_parse::<Dependent>().ok();
        if input.is_at_end() {
            return Err(input.error(EmptyExpression));
        }

        let expr = input.try_parse::<Expr>()?;
        Ok(Self { dependent, expr })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(dependent) = &self.dependent {
            write!(f, "{}=", dependent)?;
        }
        self.expr.fmt(f)
    }
}
