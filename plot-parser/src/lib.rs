//! Tokenizer and parser for the formulas accepted by the plotting engine.
//!
//! A formula is a single expression in one or two free variables, optionally prefixed by the
//! dependent variable (`y =`, `r =`, `z =`, or `f(x) =`). The grammar is deliberately small:
//! numbers, variables, the operators `+ - * / ^` (`**` is accepted as a synonym for `^`), unary
//! minus, parentheses, and calls of the form `name(expr, ...)`.
//!
//! ```
//! use plot_parser::parser::{ast::expr::Expr, Parser};
//!
//! let mut parser = Parser::new("2(1 + cos(θ))").unwrap();
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "2*(1+cos(theta))");
//! ```

pub mod parser;
pub mod tokenizer;
