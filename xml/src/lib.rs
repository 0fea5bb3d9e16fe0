//! This crate is part of rdfpp.
//!
//! Parsers and serializers for the XML-based concrete syntaxes of RDF:
//! * [RDF/XML], based on [`rio_xml`];
//! * [TriX], based on [`quick_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf11-xml/
//! [TriX]: https://www.hpl.hp.com/techreports/2004/HPL-2004-56.html
#![deny(missing_docs)]

pub mod parser;
pub mod serializer;
pub mod trix;
