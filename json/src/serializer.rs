//! Serializer for [RDF/JSON].
//!
//! RDF/JSON groups objects by subject and predicate,
//! so the whole graph is kept in memory and written by [`finish`](Serializer::finish).
//!
//! [RDF/JSON]: https://www.w3.org/TR/rdf-json/

use crate::model::{subject_key, Document, Object};
use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io;

/// RDF/JSON serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfJsonConfig {
    indentation: usize,
}

impl RdfJsonConfig {
    /// Number of spaces per indentation level.
    /// (defaults to 0, meaning a single line)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfJsonConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfJsonConfig`] by setting the [`indentation`](RdfJsonConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/JSON serializer.
pub struct RdfJsonSerializer<W: io::Write> {
    config: RdfJsonConfig,
    write: W,
    data: Document,
    count: usize,
}

impl<W> RdfJsonSerializer<W>
where
    W: io::Write,
{
    /// Build a new RDF/JSON serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> RdfJsonSerializer<W> {
        Self::new_with_config(write, RdfJsonConfig::default())
    }

    /// Build a new RDF/JSON serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: RdfJsonConfig) -> RdfJsonSerializer<W> {
        RdfJsonSerializer {
            config,
            write,
            data: Document::new(),
            count: 0,
        }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &RdfJsonConfig {
        &self.config
    }

    /// The number of triples accepted so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer, returning its target.
    ///
    /// Triples not yet [finished](Serializer::finish) are lost.
    pub fn into_inner(self) -> W {
        self.write
    }

    fn add(&mut self, s: &Term, p: &Term, o: &Term) {
        let (Some(s_key), Term::UriReference { uri: p_key }) = (subject_key(s), p) else {
            log::warn!("RDF/JSON can not express {s:?} {p:?} {o:?}, skipping");
            return;
        };
        self.data
            .entry(s_key)
            .or_default()
            .entry(p_key.clone())
            .or_default()
            .push(Object::from(o));
        self.count += 1;
    }

    fn write_document<F: Formatter>(&mut self, formatter: F) -> io::Result<()> {
        let mut ser = serde_json::Serializer::with_formatter(&mut self.write, formatter);
        self.data.serialize(&mut ser)?;
        Ok(())
    }
}

impl<W> Serializer for RdfJsonSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn configure(&mut self, key: &str, value: &str) -> bool {
        match (key, value.parse()) {
            ("indent", Ok(i)) => {
                self.config.indentation = i;
                true
            }
            _ => false,
        }
    }

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        self.add(triple.s(), triple.p(), triple.o());
        Ok(())
    }

    /// The context of `quad` is dropped.
    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        self.add(quad.s(), quad.p(), quad.o());
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        log::debug!("RDF/JSON writer ignores comment {text:?}");
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.config.indentation > 0 {
            let indent = vec![b' '; self.config.indentation];
            self.write_document(PrettyFormatter::with_indent(&indent))?;
        } else {
            self.write_document(CompactFormatter)?;
        }
        self.data.clear();
        self.write.write_all(b"\n")?;
        self.write.flush()
    }
}

impl RdfJsonSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        RdfJsonSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: RdfJsonConfig) -> Self {
        RdfJsonSerializer::new_with_config(Vec::new(), config)
    }
}

/// NB: the output is empty until the document is [finished](Serializer::finish).
impl Stringifier for RdfJsonSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
