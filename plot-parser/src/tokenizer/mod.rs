pub mod normalize;
pub mod token;

use ariadne::Fmt;
use logos::{Lexer, Logos};
use plot_attrs::ErrorKind;
use plot_error::{Error, EXPR};
pub use normalize::{normalize, Notation};
pub use token::{Token, TokenKind};

/// A character that is not part of the formula grammar was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", character),
    labels = ["this character"],
    help = format!(
        "formulas may only contain numbers, names, {} and parentheses",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnrecognizedCharacter {
    /// The offending character.
    pub character: char,
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, including
/// whitespace, so that the parser can backtrack.
///
/// Fails on the first character that does not begin any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                let span = lexer.span();
                let character = input[span.start..].chars().next().unwrap_or('\u{fffd}');
                let end = span.start + character.len_utf8();
                return Err(Error::new(vec![span.start..end], UnrecognizedCharacter { character }));
            },
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2.5",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2.5"),
            ],
        );
    }

    #[test]
    fn polar_formula() {
        compare_tokens(
            "r=2(1-Cos(θ))",
            [
                (TokenKind::Name, "r"),
                (TokenKind::Assign, "="),
                (TokenKind::Number, "2"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Number, "1"),
                (TokenKind::Sub, "-"),
                (TokenKind::Name, "Cos"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Theta, "θ"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn both_power_spellings() {
        compare_tokens(
            "x**2^3",
            [
                (TokenKind::Name, "x"),
                (TokenKind::Exp, "**"),
                (TokenKind::Number, "2"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, "3"),
            ],
        );
    }

    #[test]
    fn canonical_text() {
        let tokens = tokenize_complete("SIN ϴ ** 2").unwrap();
        let text = tokens.iter()
            .filter(|token| !token.is_whitespace())
            .map(|token| token.text())
            .collect::<String>();
        assert_eq!(text, "sintheta^2");
    }

    #[test]
    fn numeric_value() {
        let tokens = tokenize_complete("12.75").unwrap();
        assert_eq!(tokens[0].value(), Some(12.75));
    }

    #[test]
    fn unrecognized_character() {
        let err = tokenize_complete("x + 2 $ 3").unwrap_err();
        assert_eq!(err.position(), 6);
        assert_eq!(
            err.downcast_ref::<UnrecognizedCharacter>(),
            Some(&UnrecognizedCharacter { character: '$' }),
        );
    }

    #[test]
    fn unrecognized_multibyte_character() {
        let err = tokenize_complete("x²").unwrap_err();
        assert_eq!(err.position(), 1);
        assert_eq!(err.spans, vec![1..3]);
    }
}
