//! Serializer for the [Turtle] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::triple::Triple;
use rdfpp_rio::serializer::rio_format_triple;
use rio_turtle::TurtleFormatter;
use std::io::{self, Write};
use std::mem;

/// Turtle serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct TurtleConfig {
    pub(super) prefixes: Vec<(String, String)>,
}

impl TurtleConfig {
    /// Build a new default [`TurtleConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The prefix declarations written before the first triple.
    /// (defaults to none)
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Transform a [`TurtleConfig`] by adding a prefix declaration.
    pub fn with_prefix<P: Into<String>, I: Into<String>>(mut self, prefix: P, iri: I) -> Self {
        self.prefixes.push((prefix.into(), iri.into()));
        self
    }
}

/// Turtle serializer.
///
/// Triples are written in streaming mode:
/// subject and predicate "factorization" only occurs between consecutive triples.
/// Prefix declarations are written as is,
/// but IRIs in triples are always written in full.
pub struct TurtleSerializer<W: io::Write> {
    config: TurtleConfig,
    state: State<W>,
    pending: Vec<(String, String)>,
}

enum State<W: io::Write> {
    /// No statement is open, the target is available for direct writes
    Idle(W),
    /// A statement may be open in the formatter
    Formatting(TurtleFormatter<W>),
    /// A previous I/O error left the serializer without its target
    Broken,
}

impl<W> TurtleSerializer<W>
where
    W: io::Write,
{
    /// Build a new Turtle serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> TurtleSerializer<W> {
        Self::new_with_config(write, TurtleConfig::default())
    }

    /// Build a new Turtle serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: TurtleConfig) -> TurtleSerializer<W> {
        let pending = config.prefixes.clone();
        TurtleSerializer {
            config,
            state: State::Idle(write),
            pending,
        }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Close the current statement, and return the target of this serializer.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.writer()?;
        match mem::replace(&mut self.state, State::Broken) {
            State::Idle(w) => Ok(w),
            _ => Err(broken()),
        }
    }

    /// Close the current statement if any, write pending prefix declarations,
    /// and give access to the target.
    fn writer(&mut self) -> io::Result<&mut W> {
        if let State::Formatting(_) = self.state {
            if let State::Formatting(tf) = mem::replace(&mut self.state, State::Broken) {
                self.state = State::Idle(tf.finish()?);
            }
        }
        let State::Idle(w) = &mut self.state else {
            return Err(broken());
        };
        for (prefix, iri) in self.pending.drain(..) {
            writeln!(w, "@prefix {prefix}: <{iri}> .")?;
        }
        Ok(w)
    }

    fn formatter(&mut self) -> io::Result<&mut TurtleFormatter<W>> {
        if !matches!(self.state, State::Formatting(_)) {
            self.writer()?;
            if let State::Idle(w) = mem::replace(&mut self.state, State::Broken) {
                self.state = State::Formatting(TurtleFormatter::new(w));
            }
        }
        match &mut self.state {
            State::Formatting(tf) => Ok(tf),
            _ => Err(broken()),
        }
    }
}

fn broken() -> io::Error {
    io::Error::other("serializer unusable after a previous I/O error")
}

impl<W> Serializer for TurtleSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn define_prefix(&mut self, prefix: &str, uri: &str) -> io::Result<()> {
        self.pending.push((prefix.to_string(), uri.to_string()));
        Ok(())
    }

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        rio_format_triple(self.formatter()?, triple)?;
        Ok(())
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        if quad.context().is_some() {
            log::warn!("Turtle can not express named graphs, skipping {quad:?}");
            return Ok(());
        }
        rio_format_triple(self.formatter()?, &quad.triple())?;
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        let w = self.writer()?;
        writeln!(w, "# {text}")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl TurtleSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        TurtleSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: TurtleConfig) -> Self {
        TurtleSerializer::new_with_config(Vec::new(), config)
    }
}

/// NB: the output is only complete after [`Serializer::finish`] (or [`Serializer::flush`]);
/// before that, it is empty while a statement is open.
impl Stringifier for TurtleSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        match &self.state {
            State::Idle(w) => &w[..],
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
