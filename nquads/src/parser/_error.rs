//! I define [`Error`].

use super::_common::{Inner, NxSource};

/// Parsing error, capturing the position in the input where the error was encountered.
#[derive(thiserror::Error, Debug)]
#[error("{kind} at {line}:{col}")]
pub struct Error {
    kind: ErrorKind,
    line: usize,
    col: usize,
}

impl Error {
    /// Construct an [`Error`]
    pub fn new<E: Into<ErrorKind>>(err: E, line: usize, col: usize) -> Self {
        Error {
            kind: err.into(),
            line,
            col,
        }
    }

    /// Return the [kind][`ErrorKind`]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume this error into its [kind][`ErrorKind`]
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// Return the position in the input.
    ///
    /// NB: lines and columns are numbered from 1, as expected by text editors.
    /// Columns count bytes, not characters.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Return the line number (from 1).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Return the column (from 1, in bytes).
    ///
    /// It is 0 when the error concerns a whole line that could not be read.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Display this error with context, typically a file name.
    pub fn in_context(&self, context: &str) -> String {
        format!("{context}:{}:{} {}", self.line, self.col, self.kind)
    }
}

/// Kind of [parsing errors][`Error`]
#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    /// `<>`
    #[error("empty URI reference")]
    EmptyUriReference,
    /// A character that IRIREF forbids, not escaped
    #[error("invalid character {0:?} in URI reference")]
    InvalidIriChar(char),
    /// A term that does not start as its first character announced
    #[error("expected leading '{0}'")]
    ExpectedLeading(&'static str),
    /// `_:` followed by whitespace
    #[error("empty blank node label")]
    EmptyBnodeLabel,
    /// Label rejected in strict mode
    #[error("invalid blank node label {0:?}")]
    InvalidBnodeLabel(String),
    /// `@` not followed by a language tag
    #[error("invalid language tag")]
    InvalidLanguageTag,
    /// Language tag longer than 42 characters
    #[error("oversized language tag (> 42 characters)")]
    OversizedLanguageTag,
    /// A single `^` after a literal
    #[error("invalid datatype specifier")]
    InvalidDatatypeSpecifier,
    /// Bad hex digits, NUL or surrogate code point
    #[error("invalid \\u or \\U escape sequence")]
    InvalidNumericEscape,
    /// Backslash followed by an unsupported character
    #[error("invalid escape character")]
    InvalidEscape,
    /// No closing delimiter before the end of the line
    #[error("unterminated term literal")]
    Unterminated,
    /// `.` before the subject, predicate and object were read
    #[error("premature end of statement")]
    PrematureEndOfStatement,
    /// Neither a term nor whitespace where a term was expected
    #[error("invalid input")]
    InvalidInput,
    /// All terms were read, but no `.` followed
    #[error("expected end of statement")]
    ExpectedEndOfStatement,
    /// Something else than whitespace or a comment after the `.`
    #[error("expected end of line")]
    ExpectedEndOfLine,
    /// The line is not valid UTF-8
    #[error("invalid UTF-8")]
    InvalidUtf8,
    /// IO error
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

pub(crate) trait ResultExt<O>: Sized {
    fn wrap_in<S: NxSource + ?Sized>(self, source: &S) -> Result<O, Error> {
        self.wrap_in_at(source, 0)
    }
    fn wrap_in_at<S: NxSource + ?Sized>(self, source: &S, offset: usize) -> Result<O, Error>;
}

impl<O, E> ResultExt<O> for Result<O, E>
where
    E: Into<ErrorKind>,
{
    fn wrap_in_at<S: NxSource + ?Sized>(self, source: &S, offset: usize) -> Result<O, Error> {
        self.map_err(|err| source.inner().error_at(err, offset))
    }
}

impl Inner {
    /// Build an error located `offset` bytes after the current column.
    pub(crate) fn error_at<E: Into<ErrorKind>>(&self, err: E, offset: usize) -> Error {
        Error::new(err, self.line, self.col + offset + 1)
    }
}

pub(crate) trait AdjustCol: Sized {
    fn adjust_col(self, offset: usize) -> Self;
}

impl AdjustCol for Error {
    fn adjust_col(mut self, offset: usize) -> Self {
        self.col += offset;
        self
    }
}

impl<O> AdjustCol for Result<O, Error> {
    fn adjust_col(self, offset: usize) -> Self {
        self.map_err(|err| err.adjust_col(offset))
    }
}
