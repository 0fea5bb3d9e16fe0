//! Parser for the [RDF/XML] concrete syntax of RDF,
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/

use oxiri::{Iri, IriParseError};
use rdfpp_api::parser::TripleParser;
use rdfpp_rio::parser::*;
use rio_xml::RdfXmlParser as RioRdfXmlParser;
use std::io::BufRead;

/// RDF/XML parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl RdfXmlParser {
    /// Construct an [`RdfXmlParser`] without a base IRI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an [`RdfXmlParser`] resolving relative IRI-references against `base`.
    pub fn with_base(base: &str) -> Result<Self, IriParseError> {
        Ok(RdfXmlParser {
            base: Some(Iri::parse(base.to_string())?),
        })
    }
}

impl<B: BufRead> TripleParser<B> for RdfXmlParser {
    type Source = StrictRioSource<RioRdfXmlParser<B>>;
    fn parse(&self, data: B) -> Self::Source {
        StrictRioSource(RioRdfXmlParser::new(data, self.base.clone()))
    }
}

/// The error type of [`RdfXmlParser`] sources.
pub type RdfXmlSourceError = RioSourceError<rio_xml::RdfXmlError>;

rdfpp_api::def_mod_functions_for_bufread_parser!(RdfXmlParser, TripleParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
