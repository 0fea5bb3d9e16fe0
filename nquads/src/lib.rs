//! The native engine of rdfpp for the line-based syntaxes of RDF:
//! [N-Triples](https://www.w3.org/TR/n-triples/)
//! and [N-Quads](https://www.w3.org/TR/n-quads/).
//!
//! Unlike the other backends, this one does not rely on any third-party RDF library.
//! The [parsers](parser) read their input one line at a time,
//! and report the first grammar violation with its line and column;
//! the [serializers](serializer) write one record per line.

pub mod parser;

pub mod serializer;
