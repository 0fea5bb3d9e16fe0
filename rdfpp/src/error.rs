//! I define [`Error`], the error type of [readers](crate::Reader) and [writers](crate::Writer).

use rdfpp_api::format::Module;
use rdfpp_api::source::StreamError;
use rdfpp_api::InvalidArgument;
use std::convert::Infallible;
use std::io;

/// The error type of [`Reader`](crate::Reader) and [`Writer`](crate::Writer).
///
/// Dispatch errors ([`UnknownContentType`](Error::UnknownContentType),
/// [`CantGuessSyntax`](Error::CantGuessSyntax),
/// [`BackendUnavailable`](Error::BackendUnavailable),
/// [`InvalidBaseUri`](Error::InvalidBaseUri))
/// are raised on construction, before any I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No format is registered for this content type
    #[error("unknown content type: {0}")]
    UnknownContentType(String),
    /// No content type was given, and it could not be guessed
    #[error("unable to guess the input content type")]
    CantGuessSyntax,
    /// The format is registered, but its backend is not available in this build
    #[error("no {role} available for {content_type} (module {module})")]
    BackendUnavailable {
        /// The requested content type
        content_type: &'static str,
        /// The module registered for this content type
        module: Module,
        /// `"reader"` or `"writer"`
        role: &'static str,
    },
    /// The base URI is not an absolute IRI
    #[error("invalid base URI {base:?}: {message}")]
    InvalidBaseUri {
        /// The rejected base URI
        base: String,
        /// Why it was rejected
        message: String,
    },
    /// Inconsistent construction input
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// The input does not conform to its syntax
    #[error("parse error{}: {message}", at(.line, .col))]
    Parse {
        /// The line (from 1) where the error was detected, if known
        line: Option<usize>,
        /// The column (from 1) where the error was detected, if known
        col: Option<usize>,
        /// What went wrong
        message: String,
    },
    /// The underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn at(line: &Option<usize>, col: &Option<usize>) -> String {
    match (line, col) {
        (Some(line), Some(col)) => format!(" at {line}:{col}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

impl Error {
    pub(crate) fn parse<M: ToString>(position: Option<(usize, usize)>, message: M) -> Self {
        Error::Parse {
            line: position.map(|p| p.0),
            col: position.map(|p| p.1),
            message: message.to_string(),
        }
    }

    /// The 1-based line and column of a [`Parse`](Error::Parse) error, when known.
    pub fn position(&self) -> Option<(usize, Option<usize>)> {
        match self {
            Error::Parse {
                line: Some(line),
                col,
                ..
            } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Piping a [`Reader`](crate::Reader) into a [`Writer`](crate::Writer)
/// fails on either side with this same type.
impl From<StreamError<Error, Error>> for Error {
    fn from(err: StreamError<Error, Error>) -> Self {
        err.inner_into()
    }
}

impl From<rdfpp_nquads::parser::Error> for Error {
    fn from(err: rdfpp_nquads::parser::Error) -> Self {
        let (line, col) = err.position();
        match err.into_kind() {
            rdfpp_nquads::parser::ErrorKind::IO(err) => Error::Io(err),
            kind => Error::Parse {
                line: Some(line),
                col: (col > 0).then_some(col),
                message: kind.to_string(),
            },
        }
    }
}

#[cfg(feature = "turtle")]
impl From<rdfpp_turtle::parser::TurtleSourceError> for Error {
    fn from(err: rdfpp_turtle::parser::TurtleSourceError) -> Self {
        Error::parse(err.position(), err)
    }
}

#[cfg(feature = "xml")]
impl From<rdfpp_xml::parser::RdfXmlSourceError> for Error {
    fn from(err: rdfpp_xml::parser::RdfXmlSourceError) -> Self {
        Error::parse(err.position(), err)
    }
}

#[cfg(feature = "xml")]
impl From<rdfpp_xml::trix::Error> for Error {
    fn from(err: rdfpp_xml::trix::Error) -> Self {
        Error::parse(None, err)
    }
}

#[cfg(feature = "json")]
impl From<rdfpp_json::parser::Error> for Error {
    fn from(err: rdfpp_json::parser::Error) -> Self {
        match err {
            rdfpp_json::parser::Error::Json(err) if err.is_io() => Error::Io(err.into()),
            err => Error::parse(err.position(), err),
        }
    }
}
