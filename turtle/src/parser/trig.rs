//! Adapter for the TriG parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)

use oxiri::{Iri, IriParseError};
use rdfpp_api::parser::QuadParser;
use rdfpp_rio::parser::*;
use rio_turtle::TriGParser as RioTriGParser;
use std::io::BufRead;

/// TriG parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TriGParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl TriGParser {
    /// Construct a [`TriGParser`] without a base IRI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a [`TriGParser`] resolving relative IRI-references against `base`.
    pub fn with_base(base: &str) -> Result<Self, IriParseError> {
        Ok(TriGParser {
            base: Some(Iri::parse(base.to_string())?),
        })
    }
}

impl<B: BufRead> QuadParser<B> for TriGParser {
    type Source = StrictRioSource<RioTriGParser<B>>;
    fn parse(&self, data: B) -> Self::Source {
        StrictRioSource(RioTriGParser::new(data, self.base.clone()))
    }
}

rdfpp_api::def_mod_functions_for_bufread_parser!(TriGParser, QuadParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
