use crate::{
    parser::{
        ast::expr::Expr,
        error::{EmptyParenthesis, UnclosedParenthesis, UnexpectedToken},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::ops::Range;

/// A parenthesized expression, such as `(1 + 2)`.
///
/// This is only a parsing helper. The parentheses are discarded when the inner expression is
/// placed into the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Paren {
    /// The inner expression.
    pub expr: Expr,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

/// Parses the closing parenthesis matching `open`, reporting an unclosed group at the end of the
/// formula, and an unexpected token anywhere else.
pub(crate) fn close_paren(input: &mut Parser, open: &OpenParen) -> Result<CloseParen, Error> {
    match input.current_token().map(|token| token.kind) {
        Some(TokenKind::CloseParen) => input.try_parse::<CloseParen>(),
        Some(found) => Err(input.error(UnexpectedToken { expected: "`)` or an operator", found })),
        None => Err(Error::new(vec![open.span.clone(), input.eof_span()], UnclosedParenthesis)),
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;

        if let Ok(close) = input.try_parse::<CloseParen>() {
            return Err(Error::new(vec![open.span.start..close.span.end], EmptyParenthesis));
        }

        let expr = input.try_parse::<Expr>()?;
        let close = close_paren(input, &open)?;

        Ok(Self {
            expr,
            span: open.span.start..close.span.end,
        })
    }
}
