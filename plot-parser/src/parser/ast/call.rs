use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym, paren::close_paren},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `cos(2*theta)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end.saturating_sub(1)..self.paren_span.end,
        ]
    }

    /// Returns the single argument of the call, if it has exactly one.
    pub fn single_arg(&self) -> Option<&Expr> {
        match self.args.as_slice() {
            [arg] => Some(arg),
            _ => None,
        }
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open = input.try_parse::<OpenParen>()?;

        let args = match input.current_token().map(|token| token.kind) {
            Some(TokenKind::CloseParen) => Vec::new(),
            _ => input.try_parse_delimited::<Expr>(TokenKind::Comma)?,
        };
        let close = close_paren(input, &open)?;

        Ok(Self {
            span: name.span.start..close.span.end,
            paren_span: open.span.start..close.span.end,
            name,
            args,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)?;
        write!(f, "(")?;
        if let Some((last, args)) = self.args.split_last() {
            for arg in args {
                arg.fmt(f)?;
                write!(f, ",")?;
            }
            last.fmt(f)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use super::*;

    #[test]
    fn outer_span() {
        let call = Parser::new("sqrt(x + 1)").unwrap().try_parse_full::<Call>().unwrap();
        assert_eq!(call.outer_span(), [0..5, 10..11]);
        assert!(call.single_arg().is_some());
    }

    #[test]
    fn missing_argument() {
        assert!(Parser::new("f(x,)").unwrap().try_parse_full::<Call>().is_err());
    }
}
