use ariadne::Source;
use plot_attrs::ErrorKind;
use plot_error::Error as SpanError;
use plot_parser::tokenizer::UnrecognizedCharacter;
use std::fmt;

/// The formula evaluated, but not at a single sample did it produce a finite value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the formula has no finite values to plot",
    labels = ["this formula"],
    help = "every sample is undefined or infinite; check for a division by zero or a `log` or `sqrt` of a negative value",
)]
pub struct NoFiniteSamples;

/// Utility enum to package the errors that can occur while reading, evaluating, or classifying a
/// formula.
#[derive(Debug)]
pub enum Error {
    /// The formula contains a character that is not part of the grammar.
    Lex(SpanError),

    /// The formula is not well-formed.
    Syntax(SpanError),

    /// The formula refers to something that is not defined, or the samples are unusable.
    Eval(SpanError),

    /// The formula could not be classified, because nothing about it can be plotted.
    Classify(SpanError),
}

impl Error {
    /// Sorts an error returned by the parser into a lexical or syntax error.
    pub fn from_parse(err: SpanError) -> Self {
        if err.is::<UnrecognizedCharacter>() {
            Self::Lex(err)
        } else {
            Self::Syntax(err)
        }
    }

    /// Returns the underlying error.
    pub fn inner(&self) -> &SpanError {
        match self {
            Self::Lex(err) | Self::Syntax(err) | Self::Eval(err) | Self::Classify(err) => err,
        }
    }

    /// The byte offset in the formula at which the error was detected.
    pub fn position(&self) -> usize {
        self.inner().position()
    }

    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) -> std::io::Result<()> {
        self.inner()
            .build_report("input")
            .eprint(("input", Source::from(input)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "lexical error: {}", err),
            Self::Syntax(err) => write!(f, "syntax error: {}", err),
            Self::Eval(err) => write!(f, "evaluation error: {}", err),
            Self::Classify(err) => write!(f, "classification error: {}", err),
        }
    }
}

impl std::error::Error for Error {}
