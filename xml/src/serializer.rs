//! Serializer for the [RDF/XML] concrete syntax of RDF.
//! based on [`rio_xml`].
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::triple::Triple;
use rdfpp_rio::serializer::rio_format_triple;
use rio_xml::RdfXmlFormatter;
use std::io;
use std::mem;

/// RDF/XML serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlConfig {
    indentation: usize,
}

impl RdfXmlConfig {
    /// Size of the indentation to use in the serialization.
    /// (defaults to 0, meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfXmlConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfXmlConfig`] by setting the [`indentation`](RdfXmlConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/XML serializer.
///
/// The XML document is opened by the first triple (or by [`finish`](Serializer::finish)
/// if there is none), and closed by [`finish`](Serializer::finish).
/// Nothing can be written after that.
pub struct RdfXmlSerializer<W: io::Write> {
    config: RdfXmlConfig,
    state: State<W>,
}

enum State<W: io::Write> {
    Pending(W),
    Open(RdfXmlFormatter<W>),
    Closed(W),
    Broken,
}

impl<W> RdfXmlSerializer<W>
where
    W: io::Write,
{
    /// Build a new RDF/XML serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> RdfXmlSerializer<W> {
        Self::new_with_config(write, RdfXmlConfig::default())
    }

    /// Build a new RDF/XML serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: RdfXmlConfig) -> RdfXmlSerializer<W> {
        RdfXmlSerializer {
            config,
            state: State::Pending(write),
        }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &RdfXmlConfig {
        &self.config
    }

    fn formatter(&mut self) -> io::Result<&mut RdfXmlFormatter<W>> {
        if let State::Pending(_) = self.state {
            if let State::Pending(w) = mem::replace(&mut self.state, State::Broken) {
                let tf = if self.config.indentation > 0 {
                    RdfXmlFormatter::with_indentation(w, self.config.indentation)
                } else {
                    RdfXmlFormatter::new(w)
                }?;
                self.state = State::Open(tf);
            }
        }
        match &mut self.state {
            State::Open(tf) => Ok(tf),
            State::Closed(_) => Err(io::Error::other("RDF/XML document already finished")),
            _ => Err(io::Error::other(
                "serializer unusable after a previous I/O error",
            )),
        }
    }
}

impl<W> Serializer for RdfXmlSerializer<W>
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
        rio_format_triple(self.formatter()?, triple)?;
        Ok(())
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        if quad.context().is_some() {
            log::warn!("RDF/XML can not express named graphs, skipping {quad:?}");
            return Ok(());
        }
        rio_format_triple(self.formatter()?, &quad.triple())?;
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        log::debug!("RDF/XML writer ignores comment {text:?}");
        Ok(())
    }

    /// NB: the target can only be flushed once the document is [finished](Serializer::finish).
    fn flush(&mut self) -> io::Result<()> {
        match &mut self.state {
            State::Pending(w) | State::Closed(w) => w.flush(),
            _ => Ok(()),
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        if let State::Closed(w) = &mut self.state {
            return w.flush();
        }
        self.formatter()?;
        if let State::Open(tf) = mem::replace(&mut self.state, State::Broken) {
            let mut w = tf.finish()?;
            w.flush()?;
            self.state = State::Closed(w);
        }
        Ok(())
    }
}

impl RdfXmlSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        RdfXmlSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: RdfXmlConfig) -> Self {
        RdfXmlSerializer::new_with_config(Vec::new(), config)
    }
}

/// NB: the output is empty until the document is [finished](Serializer::finish).
impl Stringifier for RdfXmlSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        match &self.state {
            State::Closed(w) => &w[..],
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use rdfpp_api::source::TripleSource;
    use rdfpp_api::term::Term;
    use std::convert::Infallible;

    const TESTS: &[&str] = &[r#"<?xml version="1.0" encoding="utf-8"?>
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns="http://example.org/ns/">
          <rdf:Description rdf:about="http://localhost/ex#me">
            <knows rdf:resource="http://localhost/ex#you"/>
            <name xml:lang="en">Me</name>
            <age rdf:datatype="http://www.w3.org/2001/XMLSchema#integer">42</age>
          </rdf:Description>
        </rdf:RDF>
        "#];

    fn roundtrip_with(config: RdfXmlConfig) -> Result<(), Box<dyn std::error::Error>> {
        for rdfxml in TESTS {
            println!("==========\n{}\n----------", rdfxml);
            let mut g1 = crate::parser::parse_str(rdfxml).collect_triples()?;

            let mut ser = RdfXmlSerializer::new_stringifier_with_config(config.clone());
            ser.serialize_triples(g1.iter().cloned().map(Ok::<_, Infallible>))?;
            ser.finish()?;
            let out = ser.to_string();
            println!("{}", &out);

            let mut g2 = crate::parser::parse_str(&out).collect_triples()?;
            g1.sort();
            g2.sort();
            assert_eq!(g1, g2);
        }
        Ok(())
    }

    #[test]
    fn roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        roundtrip_with(RdfXmlConfig::new())
    }

    #[test]
    fn roundtrip_with_ident() -> Result<(), Box<dyn std::error::Error>> {
        roundtrip_with(RdfXmlConfig::new().with_indentation(4))
    }

    #[test]
    fn configure_indent() {
        let mut ser = RdfXmlSerializer::new_stringifier();
        assert!(ser.configure("indent", "2"));
        assert_eq!(ser.config().indentation(), 2);
        assert!(!ser.configure("indent", "two"));
        assert!(!ser.configure("pretty", "yes"));
    }

    #[test]
    fn empty_document() -> Result<(), Box<dyn std::error::Error>> {
        let mut ser = RdfXmlSerializer::new_stringifier();
        ser.begin()?;
        ser.finish()?;
        assert!(ser.as_str().contains("rdf:RDF"));
        let g = crate::parser::parse_str(ser.as_str()).collect_triples()?;
        assert!(g.is_empty());
        Ok(())
    }

    #[test]
    fn closed_document() -> Result<(), Box<dyn std::error::Error>> {
        let t = Triple::new(Term::uri("x:s"), Term::uri("x:p"), Term::uri("x:o"));
        let mut ser = RdfXmlSerializer::new_stringifier();
        ser.write_triple(&t)?;
        ser.finish()?;
        assert!(ser.write_triple(&t).is_err());
        Ok(())
    }
}
