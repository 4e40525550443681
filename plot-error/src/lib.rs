//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the span-carrying [`Error`] type shared by the parser and the evaluator.

// lets the `ErrorKind` derive refer to `plot_error::*` from inside this crate's tests
extern crate self as plot_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while reading or evaluating a formula.
///
/// This trait is normally implemented with the `ErrorKind` derive macro from `plot-attrs`.
pub trait ErrorKind: Debug + Send + Sync + 'static {
    /// Returns `self` as [`Any`], so callers can downcast to the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The byte offset in the source at which the error was detected: the start of the first span,
    /// or `0` if the error carries no span.
    pub fn position(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// Returns the error kind as `T`, if it is one.
    pub fn downcast_ref<T: ErrorKind>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the error kind is a `T`.
    pub fn is<T: ErrorKind>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report against the given source into a string, including ANSI colors.
    pub fn render(&self, src_id: &str, source: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(source)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at position {})", self.kind.message(), self.position())
    }
}

impl std::error::Error for Error {}
