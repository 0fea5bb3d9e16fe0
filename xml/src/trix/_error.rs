/// A TriX parse error, with the byte offset in the input where it was detected.
#[derive(Debug, thiserror::Error)]
#[error("{kind} at byte {offset}")]
pub struct Error {
    kind: ErrorKind,
    offset: u64,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, offset: u64) -> Self {
        Error { kind, offset }
    }

    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Consume this error, returning its kind.
    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    /// The offset in the input (in bytes) where this error was detected.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// The different kinds of [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The input is not well-formed XML, or could not be read
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// An element that is not part of TriX
    #[error("unknown element <{0}>")]
    UnknownElement(String),
    /// A TriX element in the wrong place
    #[error("unexpected element <{0}>")]
    UnexpectedElement(String),
    /// Text or element inside a term
    #[error("unexpected content in <{0}>")]
    UnexpectedContent(String),
    /// A `<typedLiteral>` without a `datatype` attribute
    #[error("missing datatype attribute in <typedLiteral>")]
    MissingDatatype,
    /// A `<triple>` with a number of terms other than 3
    #[error("expected 3 terms in <triple>, found {0}")]
    TermCount(usize),
    /// A `<graph>` named twice
    #[error("graph already named")]
    GraphAlreadyNamed,
    /// The input ended before `</TriX>`
    #[error("unexpected end of document")]
    UnexpectedEof,
}

impl From<quick_xml::events::attributes::AttrError> for ErrorKind {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        ErrorKind::Xml(value.into())
    }
}

