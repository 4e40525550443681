//! Structural errors raised before a formula is evaluated.
//!
//! Per-element numeric problems (division by zero, `log` of a negative number) are never errors;
//! they produce non-finite samples instead.

use ariadne::Fmt;
use plot_attrs::ErrorKind;
use plot_error::EXPR;

/// Formats a list of suggestions as a help message.
fn suggestion_help(kind: &str, suggestions: &[String], fallback: &str) -> String {
    match suggestions {
        [] => fallback.to_string(),
        [one] => format!("did you mean the `{}` {}?", one.fg(EXPR), kind),
        many => format!(
            "did you mean one of these {}s? {}",
            kind,
            many.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}

/// The variable is neither bound to samples nor a known constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", name),
    labels = ["this variable"],
    help = suggestion_help(
        "variable",
        suggestions,
        "only the plotted variables and the constants `pi` and `e` can be used",
    ),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// Similarly named variables and constants, if any.
    pub suggestions: Vec<String>,
}

/// The function is not in the vocabulary.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", name),
    labels = ["this function", ""],
    help = suggestion_help(
        "function",
        suggestions,
        "the available functions are sin, cos, tan, exp, log (or ln), sqrt, and abs",
    ),
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// Similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function takes {} argument(s), but {} were given", name, expected, given),
    labels = ["this function call", ""],
    help = format!("write the call as {}", format!("{}(<expression>)", name).fg(EXPR)),
)]
pub struct WrongArgumentCount {
    /// The name of the function that was called.
    pub name: String,

    /// The number of arguments that were expected.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// A function name was used as if it were a variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is a function, not a variable", name),
    labels = ["this name"],
    help = format!("to call it, write {}", format!("{}(<expression>)", name).fg(EXPR)),
)]
pub struct VariableIsFunction {
    /// The name of the function.
    pub name: String,
}

/// A variable was bound to a sample array whose length differs from the other variables.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "`{}` has {} samples, but the other variables have {}",
        name,
        given,
        expected,
    ),
    help = "every variable in one evaluation must be sampled at the same number of points",
)]
pub struct MismatchedSampleLength {
    /// The name of the variable.
    pub name: String,

    /// The number of samples of the variables already bound.
    pub expected: usize,

    /// The number of samples given for this variable.
    pub given: usize,
}

/// The binding does not define a sample count, because it binds no variables or only empty
/// arrays.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "no samples to evaluate the formula at",
    help = "bind at least one variable to a non-empty array of samples",
)]
pub struct EmptyBinding;
