//! A source yields records, and may also fail in the process.
//! This module provides two specialized kinds of source:
//! [`TripleSource`] and [`QuadSource`].
//!
//! These traits provide an API similar to (a subset of) the [`Iterator`] API,
//! with methods such as [`for_each_triple`] and [`try_for_each_triple`]
//! (resp. [`for_each_quad`] and [`try_for_each_quad`]).
//!
//! Unlike an iterator, a source pushes its records into a callback,
//! which lets a parser hand over each record as soon as it is complete,
//! and lets the callback itself fail (see [`StreamError`]).
//! Records are handed over by value: the callback owns them.
//!
//! [`for_each_triple`]: TripleSource::for_each_triple
//! [`try_for_each_triple`]: TripleSource::try_for_each_triple
//! [`for_each_quad`]: QuadSource::for_each_quad
//! [`try_for_each_quad`]: QuadSource::try_for_each_quad

use crate::quad::Quad;
use crate::triple::Triple;
use std::error::Error;

pub mod convert;

mod _stream_error;
pub use _stream_error::*;

/// A triple source produces [triples](Triple), and may also fail in the process.
///
/// Any iterator yielding [results](std::result::Result) of [`Triple`]
/// implements the [`TripleSource`] trait.
pub trait TripleSource {
    /// The type of errors produced by this source.
    type Error: Error + 'static;

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return `Ok(false)` if there are no more triples in this source.
    ///
    /// Return an error if either the source or `f` errs.
    fn try_for_some_triple<E, F>(&mut self, f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Triple) -> Result<(), E>;

    /// Call f for all triples from this source.
    ///
    /// Return an error if either the source or `f` errs.
    #[inline]
    fn try_for_each_triple<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(Triple) -> Result<(), E>,
        E: Error,
    {
        while self.try_for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Call f for some triple(s) (possibly zero) from this source, if any.
    ///
    /// Return false if there are no more triples in this source.
    #[inline]
    fn for_some_triple<F>(&mut self, f: &mut F) -> Result<bool, Self::Error>
    where
        F: FnMut(Triple),
    {
        self.try_for_some_triple(|t| -> Result<(), Self::Error> {
            f(t);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Call f for all triples from this source.
    #[inline]
    fn for_each_triple<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Triple),
    {
        let mut f = f;
        while self.for_some_triple(&mut f)? {}
        Ok(())
    }

    /// Collect all the triples of this source in a vector.
    fn collect_triples(mut self) -> Result<Vec<Triple>, Self::Error>
    where
        Self: Sized,
    {
        let mut v = vec![];
        self.for_each_triple(|t| v.push(t))?;
        Ok(v)
    }

    /// Convert the triples of this source into quads of the default graph.
    #[inline]
    fn to_quads(self) -> convert::ToQuads<Self>
    where
        Self: Sized,
    {
        convert::ToQuads(self)
    }
}

impl<I, E> TripleSource for I
where
    I: Iterator<Item = Result<Triple, E>>,
    E: Error + 'static,
{
    type Error = E;

    fn try_for_some_triple<E2, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E2>
    where
        E2: Error,
        F: FnMut(Triple) -> Result<(), E2>,
    {
        match self.next() {
            Some(Err(e)) => Err(SourceError(e)),
            Some(Ok(t)) => {
                f(t).map_err(SinkError)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// A quad source produces [quads](Quad), and may also fail in the process.
///
/// Any iterator yielding [results](std::result::Result) of [`Quad`]
/// implements the [`QuadSource`] trait.
pub trait QuadSource {
    /// The type of errors produced by this source.
    type Error: Error + 'static;

    /// Call f for some quad(s) (possibly zero) from this source, if any.
    ///
    /// Return `Ok(false)` if there are no more quads in this source.
    ///
    /// Return an error if either the source or `f` errs.
    fn try_for_some_quad<E, F>(&mut self, f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Quad) -> Result<(), E>;

    /// Call f for all quads from this source.
    ///
    /// Return an error if either the source or `f` errs.
    #[inline]
    fn try_for_each_quad<F, E>(&mut self, mut f: F) -> StreamResult<(), Self::Error, E>
    where
        F: FnMut(Quad) -> Result<(), E>,
        E: Error,
    {
        while self.try_for_some_quad(&mut f)? {}
        Ok(())
    }

    /// Call f for some quad(s) (possibly zero) from this source, if any.
    ///
    /// Return false if there are no more quads in this source.
    #[inline]
    fn for_some_quad<F>(&mut self, f: &mut F) -> Result<bool, Self::Error>
    where
        F: FnMut(Quad),
    {
        self.try_for_some_quad(|q| -> Result<(), Self::Error> {
            f(q);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Call f for all quads from this source.
    #[inline]
    fn for_each_quad<F>(&mut self, f: F) -> Result<(), Self::Error>
    where
        F: FnMut(Quad),
    {
        let mut f = f;
        while self.for_some_quad(&mut f)? {}
        Ok(())
    }

    /// Collect all the quads of this source in a vector.
    fn collect_quads(mut self) -> Result<Vec<Quad>, Self::Error>
    where
        Self: Sized,
    {
        let mut v = vec![];
        self.for_each_quad(|q| v.push(q))?;
        Ok(v)
    }

    /// Convert the quads of this source into triples, dropping their context.
    #[inline]
    fn to_triples(self) -> convert::ToTriples<Self>
    where
        Self: Sized,
    {
        convert::ToTriples(self)
    }
}

impl<I, E> QuadSource for I
where
    I: Iterator<Item = Result<Quad, E>>,
    E: Error + 'static,
{
    type Error = E;

    fn try_for_some_quad<E2, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E2>
    where
        E2: Error,
        F: FnMut(Quad) -> Result<(), E2>,
    {
        match self.next() {
            Some(Err(e)) => Err(SourceError(e)),
            Some(Ok(q)) => {
                f(q).map_err(SinkError)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
