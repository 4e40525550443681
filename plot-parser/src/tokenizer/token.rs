use logos::Logos;
use std::{borrow::Cow, fmt, ops::Range};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    /// Exponentiation. Both `^` and `**` produce this token; `^` is never bitwise xor.
    #[token("^")]
    #[token("**")]
    Exp,

    #[token("=")]
    Assign,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z_]+")]
    Name,

    /// One of the Greek theta glyphs. The bare name `t` is rewritten into this kind when a formula
    /// is read in polar notation.
    #[token("θ")]
    #[token("ϴ")]
    #[token("Θ")]
    Theta,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token can begin a variable or function name.
    pub fn is_name(self) -> bool {
        matches!(self, TokenKind::Name | TokenKind::Theta)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Add => write!(f, "`+`"),
            TokenKind::Sub => write!(f, "`-`"),
            TokenKind::Mul => write!(f, "`*`"),
            TokenKind::Div => write!(f, "`/`"),
            TokenKind::Exp => write!(f, "`^`"),
            TokenKind::Assign => write!(f, "`=`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::OpenParen => write!(f, "`(`"),
            TokenKind::CloseParen => write!(f, "`)`"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Name => write!(f, "a name"),
            TokenKind::Theta => write!(f, "`θ`"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from. Tokens inserted by
    /// normalization have an empty span positioned between their neighbors.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl<'source> Token<'source> {
    /// Creates a token that does not come from the source, such as an implicit `*`.
    pub fn synthetic(kind: TokenKind, lexeme: &'static str, at: usize) -> Self {
        Self {
            span: at..at,
            kind,
            lexeme,
        }
    }

    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Returns the numeric value of a [`TokenKind::Number`] token.
    pub fn value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => self.lexeme.parse().ok(),
            _ => None,
        }
    }

    /// Returns the canonical text of the token: names are lowercased, every theta spelling is
    /// `theta`, and `**` is `^`.
    pub fn text(&self) -> Cow<'source, str> {
        match self.kind {
            TokenKind::Name if self.lexeme.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(self.lexeme.to_ascii_lowercase())
            },
            TokenKind::Theta => Cow::Borrowed("theta"),
            TokenKind::Exp => Cow::Borrowed("^"),
            _ => Cow::Borrowed(self.lexeme),
        }
    }
}
