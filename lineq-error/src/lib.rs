//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every error produced while solving an equation is an [`Error`]: a set of source spans and a
//! boxed [`ErrorKind`]. The kind knows how to describe itself, both as a colored [`Report`] for
//! terminals and as a plain [`ErrorKind::message`] for front ends that render their own markup.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// The broad class an error belongs to.
///
/// A front end can use this to decide how to phrase or style an error without inspecting the
/// concrete [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The equation is malformed before any parsing takes place: it contains disallowed
    /// characters, has no `=`, has more than one `=`, or never mentions the unknown.
    Syntax,

    /// One side of the equation is empty.
    Structural,

    /// A side could not be turned into a list of linear terms.
    Parse,

    /// The equation has no unique solution.
    Degenerate,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax error"),
            Self::Structural => write!(f, "structural error"),
            Self::Parse => write!(f, "parse error"),
            Self::Degenerate => write!(f, "degenerate equation"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error as a [`dyn Any`](Any), so that callers can downcast to the concrete
    /// kind.
    fn as_any(&self) -> &dyn Any;

    /// The category of this error.
    fn category(&self) -> Category;

    /// A short, plain-text description of the error.
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
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The category of the underlying error kind.
    pub fn category(&self) -> Category {
        self.kind.category()
    }

    /// A plain-text description of the error, without any terminal styling.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Returns the concrete error kind if it is of type `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Writes the report of this error to the given writer.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, w: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), w)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category(), self.message())
    }
}

impl std::error::Error for Error {}
