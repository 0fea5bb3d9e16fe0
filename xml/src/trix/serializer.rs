//! TriX serializer.
//!
//! Consecutive quads sharing the same context are grouped in the same `<graph>`;
//! a new `<graph>` is opened whenever the context changes.

use super::TRIX_NS;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use std::io;

/// TriX serializer configuration.
#[derive(Clone, Debug)]
pub struct TrixConfig {
    indentation: usize,
}

impl TrixConfig {
    /// Build a new default [`TrixConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Number of spaces per indentation level.
    /// (defaults to 2, 0 meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Transform a [`TrixConfig`] by setting the [`indentation`](TrixConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

impl Default for TrixConfig {
    fn default() -> Self {
        TrixConfig { indentation: 2 }
    }
}

/// TriX serializer.
pub struct TrixSerializer<W: io::Write> {
    config: TrixConfig,
    writer: Writer<W>,
    started: bool,
    /// `Some(context)` while a `<graph>` is open
    graph: Option<Option<Term>>,
    count: usize,
}

impl<W> TrixSerializer<W>
where
    W: io::Write,
{
    /// Build a new TriX serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> TrixSerializer<W> {
        Self::new_with_config(write, TrixConfig::default())
    }

    /// Build a new TriX serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: TrixConfig) -> TrixSerializer<W> {
        TrixSerializer {
            writer: Self::xml_writer(write, config.indentation),
            config,
            started: false,
            graph: None,
            count: 0,
        }
    }

    fn xml_writer(write: W, indentation: usize) -> Writer<W> {
        if indentation > 0 {
            Writer::new_with_indent(write, b' ', indentation)
        } else {
            Writer::new(write)
        }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &TrixConfig {
        &self.config
    }

    /// The number of triples written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer, returning its target.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn event<'a, E: Into<Event<'a>>>(&mut self, event: E) -> io::Result<()> {
        self.writer.write_event(event).map_err(io::Error::other)
    }

    fn ensure_started(&mut self) -> io::Result<()> {
        if !self.started {
            self.started = true;
            self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
            let mut root = BytesStart::new("TriX");
            root.push_attribute(("xmlns", TRIX_NS));
            self.event(Event::Start(root))?;
        }
        Ok(())
    }

    fn close_graph(&mut self) -> io::Result<()> {
        if self.graph.take().is_some() {
            self.event(Event::End(BytesEnd::new("graph")))?;
        }
        Ok(())
    }

    fn write_statement(&mut self, spo: [&Term; 3], context: Option<&Term>) -> io::Result<()> {
        if context.is_some_and(Term::is_literal) {
            log::warn!("TriX can not name a graph with a literal, skipping {spo:?} in {context:?}");
            return Ok(());
        }
        self.ensure_started()?;
        if self.graph.as_ref().map(Option::as_ref) != Some(context) {
            self.close_graph()?;
            self.event(Event::Start(BytesStart::new("graph")))?;
            if let Some(g) = context {
                self.write_term(g)?;
            }
            self.graph = Some(context.cloned());
        }
        self.event(Event::Start(BytesStart::new("triple")))?;
        for t in spo {
            self.write_term(t)?;
        }
        self.event(Event::End(BytesEnd::new("triple")))?;
        self.count += 1;
        Ok(())
    }

    fn write_term(&mut self, t: &Term) -> io::Result<()> {
        let (name, attribute) = match t {
            Term::UriReference { .. } => ("uri", None),
            Term::BlankNode { .. } => ("id", None),
            Term::PlainLiteral { language_tag, .. } => (
                "plainLiteral",
                language_tag.as_deref().map(|tag| ("xml:lang", tag)),
            ),
            Term::TypedLiteral { datatype_uri, .. } => {
                ("typedLiteral", Some(("datatype", datatype_uri.as_str())))
            }
        };
        let mut start = BytesStart::new(name);
        if let Some(attribute) = attribute {
            start.push_attribute(attribute);
        }
        let text = t.value();
        if text.is_empty() {
            self.event(Event::Empty(start))
        } else {
            self.event(Event::Start(start))?;
            self.event(Event::Text(BytesText::new(text)))?;
            self.event(Event::End(BytesEnd::new(name)))
        }
    }
}

impl<W> Serializer for TrixSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn configure(&mut self, key: &str, value: &str) -> bool {
        match (key, value.parse()) {
            ("indent", Ok(i)) if !self.started => {
                self.config.indentation = i;
                // SAFETY: the writer is moved out and immediately replaced;
                // nothing in between can panic.
                unsafe {
                    let write = std::ptr::read(&self.writer).into_inner();
                    std::ptr::write(&mut self.writer, Self::xml_writer(write, i));
                }
                true
            }
            _ => false,
        }
    }

    fn begin(&mut self) -> io::Result<()> {
        self.ensure_started()
    }

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        self.write_statement(triple.terms(), None)
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        self.write_statement([quad.s(), quad.p(), quad.o()], quad.context())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        self.ensure_started()?;
        let text = text.replace("--", "- -");
        self.event(Event::Comment(BytesText::from_escaped(format!(" {text} "))))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::Write::flush(self.writer.get_mut())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.ensure_started()?;
        self.close_graph()?;
        self.event(Event::End(BytesEnd::new("TriX")))?;
        io::Write::write_all(self.writer.get_mut(), b"\n")?;
        self.flush()
    }
}

impl TrixSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        TrixSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: TrixConfig) -> Self {
        TrixSerializer::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for TrixSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.writer.get_ref()[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
