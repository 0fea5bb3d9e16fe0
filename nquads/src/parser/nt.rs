//! Native parser for [N-Triples].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use rdfpp_api::parser::TripleParser;
use rdfpp_api::source::{SinkError, SourceError, StreamResult, TripleSource};
use rdfpp_api::triple::Triple;
use std::io::{self, BufRead};

use super::_common::{Inner, NxSource};
use super::Error;

rdfpp_api::def_mod_functions_for_bufread_parser!(NTriplesParser, TripleParser);

/// [N-Triples] parser.
///
/// Each statement must have exactly 3 terms.
///
/// [N-Triples]: https://www.w3.org/TR/n-triples/
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {
    /// Reject blank node labels that do not match the `BLANK_NODE_LABEL` production.
    ///
    /// By default, any run of non-whitespace characters is accepted.
    pub strict_bnode_labels: bool,
}

impl NTriplesParser {
    /// Construct an [`NTriplesParser`] with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the [`strict_bnode_labels`](NTriplesParser::strict_bnode_labels) option of this parser.
    #[must_use]
    pub fn with_strict_bnode_labels(self, strict_bnode_labels: bool) -> Self {
        Self {
            strict_bnode_labels,
        }
    }
}

impl<B: BufRead> TripleParser<B> for NTriplesParser {
    type Source = NTriplesSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        NTriplesSource {
            input: data,
            inner: Inner::new(self.strict_bnode_labels),
        }
    }
}

/// [`TripleSource`] returned by [`NTriplesParser`]
#[derive(Clone, Debug)]
pub struct NTriplesSource<B> {
    input: B,
    inner: Inner,
}

impl<B> NTriplesSource<B> {
    /// The number of lines read so far.
    pub fn line(&self) -> usize {
        self.inner.line
    }
}

impl<B: BufRead> NxSource for NTriplesSource<B> {
    const MAX_TERMS: usize = 3;

    fn inner(&self) -> &Inner {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut Inner {
        &mut self.inner
    }

    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        self.input.read_line(buf)
    }
}

impl<B: BufRead> TripleSource for NTriplesSource<B> {
    type Error = Error;

    fn try_for_some_triple<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: std::error::Error,
        F: FnMut(Triple) -> Result<(), E>,
    {
        match self.next_line().map_err(SourceError)? {
            None => Ok(false),
            Some(false) => Ok(true),
            Some(true) => {
                if let Some((triple, _)) = self.inner.take_statement() {
                    f(triple).map_err(SinkError)?;
                }
                Ok(true)
            }
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
