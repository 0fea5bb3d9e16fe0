//! This crate is part of rdfpp.
//! It provides a reader and a writer for [RDF/JSON],
//! the JSON serialization of RDF graphs where objects are grouped
//! by subject, then by predicate:
//!
//! ```json
//! { "http://example.org/s": {
//!     "http://example.org/p": [ { "type": "literal", "value": "hi", "lang": "en" } ]
//! } }
//! ```
//!
//! RDF/JSON has no notion of named graphs nor comments.
//!
//! [RDF/JSON]: https://www.w3.org/TR/rdf-json/

mod model;

pub mod parser;
pub mod serializer;

pub use parser::RdfJsonParser;
pub use serializer::{RdfJsonConfig, RdfJsonSerializer};
