//! API for serializing RDF syntaxes.
//!
//! This module specifies how triples and quads are written, one record at a time.
//! Each serializer has a specific "target" (typically a file or a buffer)
//! associated to it.
//! If you want to serialize to two different files,
//! you must create two different serializers.
//!
//! Note however that this API does not cover the creation of serializers,
//! and therefore does not cover how their target is specified.
//!
//! The lifecycle of a serializer is
//! [`configure`](Serializer::configure) and [`define_prefix`](Serializer::define_prefix) (any number of times),
//! then [`begin`](Serializer::begin),
//! then any number of records and comments,
//! then [`finish`](Serializer::finish).
//! Formats that need to see the whole graph before writing anything
//! only produce their output on `finish`.

use crate::quad::Quad;
use crate::source::*;
use crate::triple::Triple;

/// A serializer writes triples and quads according to a given format.
///
/// Formats without a notion of graph write the triple part of quads,
/// dropping their context.
pub trait Serializer {
    /// The error type that may be raised during serialization.
    type Error: 'static + crate::Error;

    /// Set a format-specific option.
    ///
    /// Returns `false` if `key` is not recognized by this serializer,
    /// in which case nothing changed.
    fn configure(&mut self, key: &str, value: &str) -> bool {
        let _ = (key, value);
        false
    }

    /// Declare a namespace prefix, for formats that support them.
    ///
    /// Must be called before [`begin`](Serializer::begin) to have any effect.
    fn define_prefix(&mut self, prefix: &str, uri: &str) -> Result<(), Self::Error> {
        let _ = (prefix, uri);
        Ok(())
    }

    /// Write whatever comes before the first record.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Write one triple.
    fn write_triple(&mut self, triple: &Triple) -> Result<(), Self::Error>;

    /// Write one quad.
    fn write_quad(&mut self, quad: &Quad) -> Result<(), Self::Error>;

    /// Write a comment, for formats that support them.
    fn write_comment(&mut self, text: &str) -> Result<(), Self::Error> {
        let _ = text;
        Ok(())
    }

    /// Flush the underlying target.
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write whatever comes after the last record, and flush.
    fn finish(&mut self) -> Result<(), Self::Error> {
        self.flush()
    }

    /// Write all triples from the given [`TripleSource`].
    ///
    /// This neither begins nor finishes the serialization.
    fn serialize_triples<TS>(
        &mut self,
        mut source: TS,
    ) -> StreamResult<&mut Self, TS::Error, Self::Error>
    where
        TS: TripleSource,
        Self: Sized,
    {
        source.try_for_each_triple(|t| self.write_triple(&t))?;
        Ok(self)
    }

    /// Write all quads from the given [`QuadSource`].
    ///
    /// This neither begins nor finishes the serialization.
    fn serialize_quads<QS>(
        &mut self,
        mut source: QS,
    ) -> StreamResult<&mut Self, QS::Error, Self::Error>
    where
        QS: QuadSource,
        Self: Sized,
    {
        source.try_for_each_quad(|q| self.write_quad(&q))?;
        Ok(self)
    }
}

/// A stringifier is special kind of [`Serializer`]:
///
/// + it uses a text-based format encoded in UTF8;
/// + it stores the serialize data in memory;
/// + it gives access to the serialized data as `str` or `String`.
pub trait Stringifier {
    /// Borrows the internal serialized data.
    ///
    /// # Note to implementers
    /// It is the responsibility of implementors to ensure that this data is valid UTF8.
    /// The methods [`as_str`](#method.as_str) and
    /// [`to_string`](#method.to_string) rely on this.
    fn as_utf8(&self) -> &[u8];

    /// Borrows the internal serialized data as a `str`.
    fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_utf8()).unwrap_or_default()
    }

    /// Copy the internal serialized data to a `String`.
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}
