//! Parser and serializer for the [TriX] concrete syntax of RDF,
//! based on [`quick_xml`].
//!
//! A TriX document is a `<TriX>` element containing `<graph>` elements,
//! each one optionally named by a leading `<uri>` (or `<id>`),
//! and containing `<triple>` elements made of exactly three terms:
//! `<uri>`, `<id>` (blank node), `<plainLiteral>` (with an optional `xml:lang`)
//! or `<typedLiteral>` (with a required `datatype`).
//!
//! [TriX]: https://www.hpl.hp.com/techreports/2004/HPL-2004-56.html

mod _error;
pub use _error::*;

pub mod parser;
pub mod serializer;

pub use parser::TrixParser;
pub use serializer::{TrixConfig, TrixSerializer};

/// The TriX namespace.
pub const TRIX_NS: &str = "http://www.w3.org/2004/03/trix/trix-1/";
