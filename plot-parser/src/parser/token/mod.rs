//! Parsers for individual punctuation tokens.

pub mod op;

use crate::{
    parser::{error::UnexpectedToken, Parse, Parser},
    tokenizer::TokenKind,
};
use plot_error::Error;
use std::ops::Range;

/// Generates a unit-like struct with a span for a single token kind, and its [`Parse`]
/// implementation.
macro_rules! token_kinds {
    ($($(#[$attr:meta])* $name:ident => $expected:literal),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                /// The region of the source code that this token was parsed from.
                pub span: Range<usize>,
            }

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<Self, Error> {
                    let token = input.next_token($expected)?;
                    if token.kind == TokenKind::$name {
                        Ok(Self { span: token.span })
                    } else {
                        Err(Error::new(vec![token.span], UnexpectedToken {
                            expected: $expected,
                            found: token.kind,
                        }))
                    }
                }
            }
        )*
    };
}

token_kinds! {
    /// An opening parenthesis, `(`.
    OpenParen => "`(`",

    /// A closing parenthesis, `)`.
    CloseParen => "`)`",

    /// The assignment sign, `=`, separating a dependent variable from its definition.
    Assign => "`=`",
}
