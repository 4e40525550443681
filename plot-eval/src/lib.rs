//! Vectorized evaluation of plot formulas.
//!
//! A formula parsed by `plot-parser` is evaluated against a [`VariableBinding`], which maps each
//! free variable to an array of samples. Every node is computed over all samples at once, and the
//! result has one value per sample:
//!
//! ```
//! use plot_eval::{evaluate, grid::linspace, VariableBinding};
//! use plot_parser::parser::{ast::expr::Expr, Parser};
//!
//! let expr = Parser::new("1/x").unwrap().try_parse_full::<Expr>().unwrap();
//! let binding = VariableBinding::single("x", linspace(-1.0, 1.0, 3)).unwrap();
//! let ys = evaluate(&expr, &binding).unwrap();
//!
//! assert_eq!(ys[0], -1.0);
//! assert!(ys[1].is_infinite());
//! assert_eq!(ys[2], 1.0);
//! ```
//!
//! Only the names in the [`Vocabulary`] can be called. A formula that refers to anything else is
//! rejected with an error pointing at the name before any arithmetic happens, while numeric
//! problems at individual samples (division by zero, `log` of a negative number) produce NaN or
//! infinite entries and never fail the evaluation.

pub mod binding;
pub mod error;
pub mod eval;
pub mod func;
pub mod grid;
pub mod surface;
pub mod value;
pub mod vocab;

pub use binding::VariableBinding;
pub use eval::{evaluate, Evaluator};
pub use func::Func;
pub use value::Value;
pub use vocab::Vocabulary;
