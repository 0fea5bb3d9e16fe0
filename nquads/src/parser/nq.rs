//! Native parser for [N-Quads].
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/

use rdfpp_api::parser::QuadParser;
use rdfpp_api::quad::Quad;
use rdfpp_api::source::{QuadSource, SinkError, SourceError, StreamResult};
use std::io::{self, BufRead};

use super::_common::{Inner, NxSource};
use super::Error;

rdfpp_api::def_mod_functions_for_bufread_parser!(NQuadsParser, QuadParser);

/// [N-Quads] parser.
///
/// Each statement has 3 terms, and an optional 4th one naming its graph.
/// Statements without a 4th term produce quads of the default graph.
///
/// [N-Quads]: https://www.w3.org/TR/n-quads/
#[derive(Clone, Debug, Default)]
pub struct NQuadsParser {
    /// Reject blank node labels that do not match the `BLANK_NODE_LABEL` production.
    pub strict_bnode_labels: bool,
}

impl NQuadsParser {
    /// Construct an [`NQuadsParser`] with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the [`strict_bnode_labels`](NQuadsParser::strict_bnode_labels) option of this parser.
    #[must_use]
    pub fn with_strict_bnode_labels(self, strict_bnode_labels: bool) -> Self {
        Self {
            strict_bnode_labels,
        }
    }
}

impl<B: BufRead> QuadParser<B> for NQuadsParser {
    type Source = NQuadsSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        NQuadsSource {
            input: data,
            inner: Inner::new(self.strict_bnode_labels),
        }
    }
}

/// [`QuadSource`] returned by [`NQuadsParser`]
#[derive(Clone, Debug)]
pub struct NQuadsSource<B> {
    input: B,
    inner: Inner,
}

impl<B> NQuadsSource<B> {
    /// The number of lines read so far.
    pub fn line(&self) -> usize {
        self.inner.line
    }
}

impl<B: BufRead> NxSource for NQuadsSource<B> {
    const MAX_TERMS: usize = 4;

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

impl<B: BufRead> QuadSource for NQuadsSource<B> {
    type Error = Error;

    fn try_for_some_quad<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: std::error::Error,
        F: FnMut(Quad) -> Result<(), E>,
    {
        match self.next_line().map_err(SourceError)? {
            None => Ok(false),
            Some(false) => Ok(true),
            Some(true) => {
                if let Some((triple, context)) = self.inner.take_statement() {
                    f(Quad::from_triple(triple, context)).map_err(SinkError)?;
                }
                Ok(true)
            }
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
