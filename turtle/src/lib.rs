//! Parsers and serializers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`](https://docs.rs/rio_turtle/).
//!
//! This backend handles the `serd` and `raptor` rows of the
//! [format registry](rdfpp_api::format) dealing with Turtle, TriG and N3
//! (N3 documents are read with the Turtle parser).

pub mod parser;

pub mod serializer;
