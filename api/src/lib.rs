//! This crate defines the core of rdfpp:
//! the RDF [term](term) model, [triples](triple) and [quads](quad),
//! the [format registry](format) mapping content-types to backends,
//! and the traits shared by all [parsers](parser) and [serializers](serializer).
//!
//! It is not very useful alone;
//! see the `rdfpp` crate for the reader/writer façade.

pub mod format;
pub mod parser;
pub mod quad;
pub mod serializer;
pub mod source;
pub mod term;
pub mod triple;

pub use std::error::Error;

/// The error raised when constructing a term, triple or quad from inconsistent parts.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The numeric code does not denote one of the four term kinds
    #[error("unknown term kind: {0}")]
    UnknownTermKind(u8),
    /// A typed literal was built without a datatype URI
    #[error("typed literal requires a non-empty datatype URI")]
    EmptyDatatype,
    /// A triple or quad was built without one of its required terms
    #[error("missing {0} term")]
    MissingTerm(term::TermPosition),
}
