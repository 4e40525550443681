//! Token-stream normalization, run between tokenizing and parsing.
//!
//! Normalization drops whitespace, canonicalizes the polar variable, and makes implicit
//! multiplication explicit, so that the parser only ever sees the explicit grammar.

use super::token::{Token, TokenKind};

/// The notation a formula is read in. This only affects which bare names are treated as the polar
/// angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notation {
    /// `y = f(x)` or `z = f(x, y)`. The name `t` is an ordinary variable.
    #[default]
    Cartesian,

    /// `r = f(θ)`. The bare name `t` is read as `theta`.
    Polar,
}

/// Returns true if an implicit `*` belongs between the two tokens.
///
/// A number or closing parenthesis immediately followed by a name, theta, or an opening
/// parenthesis is a product: `2x`, `2(1 + x)`, `(x + 1)(x - 1)`, `3θ`.
fn implicit_mul(prev: TokenKind, next: TokenKind) -> bool {
    matches!(prev, TokenKind::Number | TokenKind::CloseParen)
        && matches!(next, TokenKind::Name | TokenKind::Theta | TokenKind::OpenParen)
}

/// Normalizes a complete token stream.
pub fn normalize<'source>(
    tokens: impl IntoIterator<Item = Token<'source>>,
    notation: Notation,
) -> Box<[Token<'source>]> {
    let mut out: Vec<Token<'source>> = Vec::new();

    for mut token in tokens.into_iter().filter(|token| !token.is_whitespace()) {
        if notation == Notation::Polar
            && token.kind == TokenKind::Name
            && token.lexeme.eq_ignore_ascii_case("t")
        {
            token.kind = TokenKind::Theta;
        }

        if let Some(prev) = out.last() {
            if implicit_mul(prev.kind, token.kind) {
                let at = prev.span.end;
                out.push(Token::synthetic(TokenKind::Mul, "*", at));
            }
        }

        out.push(token);
    }

    out.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::tokenizer::tokenize_complete;
    use super::*;

    /// Normalizes the input and joins the canonical text of every token.
    fn normalized(input: &str, notation: Notation) -> String {
        let tokens = tokenize_complete(input).unwrap();
        normalize(tokens.into_vec(), notation)
            .iter()
            .map(|token| token.text())
            .collect()
    }

    #[test]
    fn coefficient_before_paren() {
        assert_eq!(normalized("2(1+cos(theta))", Notation::Polar), "2*(1+cos(theta))");
    }

    #[test]
    fn coefficient_before_name() {
        assert_eq!(normalized("3 sin(2θ)", Notation::Polar), "3*sin(2*theta)");
        assert_eq!(normalized("2x^2 + 4x", Notation::Cartesian), "2*x^2+4*x");
    }

    #[test]
    fn adjacent_groups() {
        assert_eq!(normalized("(x + 1)(x - 1)", Notation::Cartesian), "(x+1)*(x-1)");
    }

    #[test]
    fn function_call_untouched() {
        assert_eq!(normalized("cos(x)", Notation::Cartesian), "cos(x)");
    }

    #[test]
    fn polar_t() {
        assert_eq!(normalized("r = 1 + 2cos(t)", Notation::Polar), "r=1+2*cos(theta)");
        assert_eq!(normalized("t + tan(t)", Notation::Cartesian), "t+tan(t)");
    }

    #[test]
    fn implicit_mul_span() {
        let tokens = tokenize_complete("2 x").unwrap();
        let tokens = normalize(tokens.into_vec(), Notation::Cartesian);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Mul);
        assert_eq!(tokens[1].span, 1..1);
    }
}
