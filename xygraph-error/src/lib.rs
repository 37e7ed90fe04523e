//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, highlighting the part of the equation that caused them.

use ariadne::{Color, Report};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while handling an equation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as an [`Any`] reference, allowing callers (mainly tests) to
    /// downcast it to the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report(
        &self,
        src_id: &'static str,
        spans: &[Range<usize>],
    ) -> Report<(&'static str, Range<usize>)>;
}

/// An error associated with regions of the equation text that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the equation that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report(&self, src_id: &'static str) -> Report<(&'static str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}
