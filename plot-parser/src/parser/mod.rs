pub mod ast;
pub mod error;
pub mod token;

use ast::formula::Formula;
use error::{EmptyExpression, ExpectedEof, UnexpectedEof};
use plot_error::{Error, ErrorKind};
use super::tokenizer::{normalize, tokenize_complete, Notation, Token};
use std::ops::Range;

/// A high-level parser for formulas. This is the type to use to parse a piece of text into an
/// abstract syntax tree.
///
/// The token stream is normalized on construction (see [`normalize`]), so the parser itself never
/// encounters whitespace or implicit multiplication.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The length of the source, used to point errors at the end of the input.
    source_len: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for a Cartesian formula.
    ///
    /// Returns an error if the source contains a character that cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Self::with_notation(source, Notation::Cartesian)
    }

    /// Create a new parser for a polar formula, where the bare name `t` is the angle `theta`.
    pub fn polar(source: &'source str) -> Result<Self, Error> {
        Self::with_notation(source, Notation::Polar)
    }

    /// Create a new parser for a formula written in the given notation.
    pub fn with_notation(source: &'source str, notation: Notation) -> Result<Self, Error> {
        let tokens = tokenize_complete(source)?;
        Ok(Self {
            tokens: normalize(tokens.into_vec(), notation),
            cursor: 0,
            source_len: source.len(),
        })
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source_len..self.source_len
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the token `offset` positions after the current token, without moving the cursor.
    pub fn lookahead(&self, offset: usize) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor + offset)
    }

    /// Returns true if every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens; `expected` describes what should have
    /// come next.
    pub fn next_token(&mut self, expected: &'static str) -> Result<Token<'source>, Error> {
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(UnexpectedEof { expected })),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Parses a value without consuming any tokens, returning [`None`] if it cannot be parsed.
    pub fn peek<T: Parse>(&mut self) -> Option<T> {
        let start = self.cursor;
        let value = T::parse(self).ok();
        self.cursor = start;
        value
    }

    /// Speculatively parses multiple values (at least one) from the given stream of tokens, each
    /// delimited by a certain token kind.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// values are returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse_delimited<T: Parse>(
        &mut self,
        delimiter: super::tokenizer::TokenKind,
    ) -> Result<Vec<T>, Error> {
        let start = self.cursor;
        let mut values = Vec::new();

        loop {
            match self.try_parse::<T>() {
                Ok(value) => values.push(value),
                Err(err) => {
                    self.cursor = start;
                    return Err(err);
                },
            }

            match self.current_token() {
                Some(token) if token.kind == delimiter => {
                    self.cursor += 1;
                },
                _ => return Ok(values),
            }
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.is_at_end() {
            return Err(self.error(EmptyExpression));
        }

        let value = T::parse(self)?;
        if self.is_at_end() {
            Ok(value)
        } else {
            Err(self.error(ExpectedEof))
        }
    }

    /// Parses a complete formula, including the optional dependent-variable prefix (`y =`,
    /// `r =`, `z =`, or `f(x) =`).
    pub fn try_parse_formula(&mut self) -> Result<Formula, Error> {
        self.try_parse_full::<Formula>()
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`.
    /// Prefix unary operators are also right-associative.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,

    /// Literals, symbols, function calls, and parenthesized expressions, which never need to be
    /// split.
    Atom,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use ast::{
        binary::Binary,
        call::Call,
        expr::Expr,
        formula::Dependent,
        literal::{Literal, LitNum, LitSym},
        unary::Unary,
    };
    use error::{EmptyParenthesis, NumberOutOfRange, UnclosedParenthesis, UnexpectedToken};
    use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};
    use crate::tokenizer::{TokenKind, UnrecognizedCharacter};

    fn parse(source: &str) -> Expr {
        Parser::new(source).unwrap().try_parse_full::<Expr>().unwrap()
    }

    fn parse_err(source: &str) -> Error {
        match Parser::new(source) {
            Ok(mut parser) => parser.try_parse_full::<Expr>().unwrap_err(),
            Err(err) => err,
        }
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse("16.5"), Expr::Literal(Literal::Number(LitNum {
            value: 16.5,
            span: 0..4,
        })));
    }

    #[test]
    fn symbol_case_insensitive() {
        assert_eq!(parse("X"), Expr::Literal(Literal::Symbol(LitSym {
            name: "x".to_string(),
            span: 0..1,
        })));
    }

    #[test]
    fn theta_glyph() {
        assert_eq!(parse("θ"), Expr::Literal(Literal::Symbol(LitSym {
            name: "theta".to_string(),
            span: 0..2,
        })));
    }

    #[test]
    fn binary_left_associativity() {
        assert_eq!(parse("1 - 2 - 3"), Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 1.0, span: 0..1 }))),
                op: BinOp { kind: BinOpKind::Sub, implicit: false, span: 2..3 },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 2.0, span: 4..5 }))),
                span: 0..5,
            })),
            op: BinOp { kind: BinOpKind::Sub, implicit: false, span: 6..7 },
            rhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 3.0, span: 8..9 }))),
            span: 0..9,
        }));
    }

    #[test]
    fn binary_right_associativity() {
        assert_eq!(parse("2^3**4"), Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 2.0, span: 0..1 }))),
            op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 1..2 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 3.0, span: 2..3 }))),
                op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 3..5 },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 4.0, span: 5..6 }))),
                span: 2..6,
            })),
            span: 0..6,
        }));
    }

    #[test]
    fn precedence() {
        assert_eq!(parse("1 + 2 * 3 ^ 4").to_string(), "1+2*3^4");
        assert_eq!(parse("(1 + 2) * 3").to_string(), "(1+2)*3");
        assert_eq!(parse("1 / (2 / 3)").to_string(), "1/(2/3)");
        assert_eq!(parse("(2 ^ 3) ^ 4").to_string(), "(2^3)^4");
        assert_eq!(parse("((x))").to_string(), "x");
    }

    #[test]
    fn unary_neg_below_power() {
        assert_eq!(parse("-x^2"), Expr::Unary(Unary {
            operand: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(Literal::Symbol(LitSym { name: "x".to_string(), span: 1..2 }))),
                op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
                rhs: Box::new(Expr::Literal(Literal::Number(LitNum { value: 2.0, span: 3..4 }))),
                span: 1..4,
            })),
            op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
            span: 0..4,
        }));
        assert_eq!(parse("2^-x").to_string(), "2^(-x)");
        assert_eq!(parse("(-x)^2").to_string(), "(-x)^2");
        assert_eq!(parse("-(x^2)").to_string(), "-x^2");
        assert_eq!(parse("2*-x").to_string(), "2*-x");
        assert_eq!(parse("--x").to_string(), "-(-x)");
    }

    #[test]
    fn implicit_multiplication() {
        let expr = parse("2(1+cos(theta))");
        let Expr::Binary(binary) = &expr else {
            panic!("expected a binary expression, got {:?}", expr);
        };
        assert_eq!(binary.op, BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 });
        assert_eq!(expr.to_string(), parse("2*(1+cos(theta))").to_string());
    }

    #[test]
    fn call_with_arguments() {
        assert_eq!(parse("f(x, 2)"), Expr::Call(Call {
            name: LitSym { name: "f".to_string(), span: 0..1 },
            args: vec![
                Expr::Literal(Literal::Symbol(LitSym { name: "x".to_string(), span: 2..3 })),
                Expr::Literal(Literal::Number(LitNum { value: 2.0, span: 5..6 })),
            ],
            span: 0..7,
            paren_span: 1..7,
        }));
        assert_eq!(parse("atan()").to_string(), "atan()");
    }

    #[test]
    fn polar_parser_reads_t() {
        let mut parser = Parser::polar("1 + 2cos(t)").unwrap();
        let expr = parser.try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.to_string(), "1+2*cos(theta)");
    }

    #[test]
    fn formula_prefix() {
        let mut parser = Parser::polar("r = 2(1 - sin θ)").unwrap_or_else(|err| panic!("{err}"));
        // `sin θ` without parentheses is not a call
        assert!(parser.try_parse_formula().is_err());

        let formula = Parser::polar("R = 2(1 - sin(θ))").unwrap().try_parse_formula().unwrap();
        assert_eq!(formula.dependent, Some(Dependent::R));
        assert_eq!(formula.to_string(), "r=2*(1-sin(theta))");

        let formula = Parser::new("f(x) = x^2").unwrap().try_parse_formula().unwrap();
        assert_eq!(formula.dependent, Some(Dependent::Func { name: "f".to_string(), param: "x".to_string() }));
        assert_eq!(formula.expr.to_string(), "x^2");

        let formula = Parser::new("x^2").unwrap().try_parse_formula().unwrap();
        assert_eq!(formula.dependent, None);
    }

    #[test]
    fn round_trip() {
        for source in [
            "2(1 + cos(θ))",
            "-x^2 + 3x - 1",
            "(x + 1)(x - 1) / (x^2 + 1)",
            "2^-x",
            "1 - (2 - 3)",
            "sin(x)^2 + cos(x)**2",
            "-(x + 1)",
            "exp(-(x^2)/2)",
        ] {
            let expr = parse(source);
            let reparsed = parse(&expr.to_string());
            assert_eq!(expr.to_string(), reparsed.to_string(), "round trip of {source:?}");
        }
    }

    #[test]
    fn unrecognized_character_position() {
        let err = parse_err("x + 2 # 3");
        assert!(err.is::<UnrecognizedCharacter>());
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn missing_operand() {
        let err = parse_err("1 +");
        assert!(err.is::<UnexpectedEof>());
        assert_eq!(err.position(), 3);

        let err = parse_err("1 + * 2");
        assert_eq!(
            err.downcast_ref::<UnexpectedToken>(),
            Some(&UnexpectedToken { expected: "an expression", found: TokenKind::Mul }),
        );
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn trailing_tokens() {
        let err = parse_err("x) + 1");
        assert!(err.is::<ExpectedEof>());
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn mismatched_parens() {
        let err = parse_err("2 * (x + 1");
        assert!(err.is::<UnclosedParenthesis>());
        assert_eq!(err.spans, vec![4..5, 10..10]);

        let err = parse_err("cos(x");
        assert!(err.is::<UnclosedParenthesis>());
        assert_eq!(err.position(), 3);

        let err = parse_err("()");
        assert!(err.is::<EmptyParenthesis>());
    }

    #[test]
    fn number_out_of_range() {
        let source = format!("2*{}", "9".repeat(400));
        let err = parse_err(&source);
        assert!(err.is::<NumberOutOfRange>());
        assert_eq!(err.spans, vec![2..402]);

        let largest = parse(&format!("{}", f64::MAX));
        assert_eq!(largest.to_string(), format!("{}", f64::MAX));
    }

    #[test]
    fn empty_input() {
        assert!(parse_err("").is::<EmptyExpression>());
        assert!(parse_err("   ").is::<EmptyExpression>());
        let err = Parser::new("y =").unwrap().try_parse_formula().unwrap_err();
        assert!(err.is::<EmptyExpression>());
        assert_eq!(err.position(), 3);
    }
}
