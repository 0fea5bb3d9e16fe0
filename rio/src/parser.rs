//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) parsers.

use crate::model::{self, QuotedTriple};
use rdfpp_api::quad::Quad;
use rdfpp_api::source::{QuadSource, StreamError, StreamError::*, StreamResult, TripleSource};
use rdfpp_api::triple::Triple;
use rio_api::parser::ParseError;
use std::error::Error;

/// Wrap a Rio [`TriplesParser`](rio_api::parser::TriplesParser)
/// or [`QuadsParser`](rio_api::parser::QuadsParser)
/// into a [`TripleSource`] or a [`QuadSource`] respectively.
pub struct StrictRioSource<T>(pub T);

/// The error type of [`StrictRioSource`].
#[derive(Debug, thiserror::Error)]
pub enum RioSourceError<E>
where
    E: Error + 'static,
{
    /// The Rio parser failed
    #[error(transparent)]
    Parser(E),
    /// The Rio parser produced a quoted triple
    #[error(transparent)]
    QuotedTriple(#[from] QuotedTriple),
}

impl<E> RioSourceError<E>
where
    E: ParseError + 'static,
{
    /// The 1-based line and column of the error, if known.
    ///
    /// Columns are counted in bytes.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            RioSourceError::Parser(e) => e
                .textual_position()
                .map(|pos| (pos.line_number() as usize + 1, pos.byte_number() as usize + 1)),
            RioSourceError::QuotedTriple(_) => None,
        }
    }
}

impl<T> TripleSource for StrictRioSource<T>
where
    T: rio_api::parser::TriplesParser,
    T::Error: Error + 'static,
{
    type Error = RioSourceError<T::Error>;

    fn try_for_some_triple<EF, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, EF>
    where
        EF: Error,
        F: FnMut(Triple) -> Result<(), EF>,
    {
        let parser = &mut self.0;
        if parser.is_end() {
            return Ok(false);
        }
        parser
            .parse_step(&mut |t| -> Result<(), RioStreamError<T::Error, EF>> {
                let t = model::from_triple(t).map_err(RioStreamError::quoted)?;
                f(t).map_err(RioStreamError::Sink)
                // NB: RioStreamError::Source is produced implicitly by parse_step,
                // using the fact that RioStreamError<A, B> implements From<A>
            })
            .map_err(StreamError::from)
            .and(Ok(true))
    }
}

impl<T> QuadSource for StrictRioSource<T>
where
    T: rio_api::parser::QuadsParser,
    T::Error: Error + 'static,
{
    type Error = RioSourceError<T::Error>;

    fn try_for_some_quad<EF, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, EF>
    where
        EF: Error,
        F: FnMut(Quad) -> Result<(), EF>,
    {
        let parser = &mut self.0;
        if parser.is_end() {
            return Ok(false);
        }
        parser
            .parse_step(&mut |q| -> Result<(), RioStreamError<T::Error, EF>> {
                let q = model::from_quad(q).map_err(RioStreamError::quoted)?;
                f(q).map_err(RioStreamError::Sink)
            })
            .map_err(StreamError::from)
            .and(Ok(true))
    }
}

/// This intermediate type is required,
/// because Rio requires that the error type of triple_handler/quad_handler
/// implement From<TurtleError> (or whatever Rio-specific error returned by the parser).
enum RioStreamError<E1, E2>
where
    E1: Error + 'static,
{
    /// Equivalent to [`StreamError::SourceError`]
    Source(RioSourceError<E1>),
    /// Equivalent to [`StreamError::SinkError`]
    Sink(E2),
}
impl<E1, E2> RioStreamError<E1, E2>
where
    E1: Error + 'static,
{
    fn quoted(err: QuotedTriple) -> Self {
        RioStreamError::Source(err.into())
    }
}
impl<E1, E2> From<E1> for RioStreamError<E1, E2>
where
    E1: Error + 'static,
    E2: Error,
{
    fn from(other: E1) -> Self {
        RioStreamError::Source(RioSourceError::Parser(other))
    }
}
impl<E1, E2> From<RioStreamError<E1, E2>> for StreamError<RioSourceError<E1>, E2>
where
    E1: Error + 'static,
    E2: Error,
{
    fn from(other: RioStreamError<E1, E2>) -> Self {
        match other {
            RioStreamError::Source(err) => SourceError(err),
            RioStreamError::Sink(err) => SinkError(err),
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
