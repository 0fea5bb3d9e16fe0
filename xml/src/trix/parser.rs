//! TriX parser.
//!
//! Elements are recognized by their local name;
//! both `<TriX>` and `<trix>` are accepted as the root element.

use super::{Error, ErrorKind};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rdfpp_api::parser::QuadParser;
use rdfpp_api::quad::Quad;
use rdfpp_api::source::{QuadSource, SinkError, SourceError, StreamResult};
use rdfpp_api::term::{BnodeGenerator, Term};
use std::io::BufRead;

/// TriX parser.
#[derive(Clone, Debug, Default)]
pub struct TrixParser {}

impl TrixParser {
    /// Construct a [`TrixParser`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BufRead> QuadParser<B> for TrixParser {
    type Source = TrixSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        TrixSource {
            reader: Reader::from_reader(data),
            buf: Vec::new(),
            state: State::Start,
            graph: None,
            terms: Vec::with_capacity(3),
            bnodes: BnodeGenerator::new(),
        }
    }
}

rdfpp_api::def_mod_functions_for_bufread_parser!(TrixParser, QuadParser);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Document,
    Graph,
    Triple,
    Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Element {
    TriX,
    Graph,
    Triple,
    Id,
    Uri,
    PlainLiteral,
    TypedLiteral,
}

impl Element {
    fn intern(local_name: &[u8]) -> Option<Self> {
        match local_name {
            b"TriX" | b"trix" => Some(Element::TriX),
            b"graph" => Some(Element::Graph),
            b"triple" => Some(Element::Triple),
            b"id" => Some(Element::Id),
            b"uri" => Some(Element::Uri),
            b"plainLiteral" => Some(Element::PlainLiteral),
            b"typedLiteral" => Some(Element::TypedLiteral),
            _ => None,
        }
    }
}

/// [`QuadSource`] returned by [`TrixParser`].
///
/// Each `<triple>` yields a quad as soon as its closing tag is read;
/// its context is the name of the enclosing `<graph>`, if any.
/// Every empty `<id/>` denotes a distinct blank node, labelled by the source.
pub struct TrixSource<B> {
    reader: Reader<B>,
    buf: Vec<u8>,
    state: State,
    graph: Option<Term>,
    terms: Vec<Term>,
    bnodes: BnodeGenerator,
}

impl<B: BufRead> TrixSource<B> {
    fn error(&self, kind: ErrorKind) -> Error {
        Error::new(kind, self.reader.buffer_position() as u64)
    }

    fn next_event(&mut self) -> Result<Event<'static>, Error> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf).map(Event::into_owned);
        event.map_err(|e| self.error(e.into()))
    }

    fn next_quad(&mut self) -> Result<Option<Quad>, Error> {
        loop {
            match self.next_event()? {
                Event::Start(e) => self.begin_element(&e, false)?,
                Event::Empty(e) => {
                    self.begin_element(&e, true)?;
                    if let Some(q) = self.finish_element(e.local_name().as_ref())? {
                        return Ok(Some(q));
                    }
                }
                Event::End(e) => {
                    if let Some(q) = self.finish_element(e.local_name().as_ref())? {
                        return Ok(Some(q));
                    }
                }
                Event::Eof if self.state == State::Eof => return Ok(None),
                Event::Eof => return Err(self.error(ErrorKind::UnexpectedEof)),
                _ => continue,
            }
        }
    }

    fn ensure_state(&self, expected: State, name: &[u8]) -> Result<(), Error> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.error(ErrorKind::UnexpectedElement(lossy(name))))
        }
    }

    fn begin_element(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<(), Error> {
        let name = e.local_name();
        let name = name.as_ref();
        let Some(element) = Element::intern(name) else {
            return Err(self.error(ErrorKind::UnknownElement(lossy(name))));
        };
        log::trace!("<{}> in state {:?}", lossy(name), self.state);
        match element {
            Element::TriX => {
                self.ensure_state(State::Start, name)?;
                self.state = State::Document;
            }
            Element::Graph => {
                self.ensure_state(State::Document, name)?;
                self.state = State::Graph;
            }
            Element::Triple => {
                self.ensure_state(State::Graph, name)?;
                self.terms.clear();
                self.state = State::Triple;
            }
            Element::Uri | Element::Id if self.state == State::Graph => {
                if self.graph.is_some() {
                    return Err(self.error(ErrorKind::GraphAlreadyNamed));
                }
                self.graph = Some(self.term(element, e, empty)?);
            }
            _ => {
                self.ensure_state(State::Triple, name)?;
                if self.terms.len() >= 3 {
                    return Err(self.error(ErrorKind::TermCount(self.terms.len() + 1)));
                }
                let term = self.term(element, e, empty)?;
                self.terms.push(term);
            }
        }
        Ok(())
    }

    /// Handle the end of a structural element; term elements are consumed by [`Self::term`].
    fn finish_element(&mut self, name: &[u8]) -> Result<Option<Quad>, Error> {
        match Element::intern(name) {
            Some(Element::TriX) => {
                self.state = State::Eof;
            }
            Some(Element::Graph) => {
                self.graph = None;
                self.state = State::Document;
            }
            Some(Element::Triple) => {
                self.state = State::Graph;
                if self.terms.len() != 3 {
                    return Err(self.error(ErrorKind::TermCount(self.terms.len())));
                }
                let mut terms = self.terms.drain(..);
                if let (Some(s), Some(p), Some(o)) = (terms.next(), terms.next(), terms.next()) {
                    return Ok(Some(Quad::new(s, p, o, self.graph.clone())));
                }
            }
            _ => (),
        }
        Ok(None)
    }

    fn term(&mut self, element: Element, e: &BytesStart<'_>, empty: bool) -> Result<Term, Error> {
        let lang = self.attribute(e, "xml:lang")?;
        let datatype = self.attribute(e, "datatype")?;
        let text = if empty {
            String::new()
        } else {
            self.text(e.local_name().as_ref())?
        };
        let term = match element {
            Element::Uri => Term::uri(text),
            Element::Id if text.is_empty() => self.bnodes.fresh(),
            Element::Id => Term::blank_node(text),
            Element::PlainLiteral => Term::plain_literal(text, lang.as_deref()),
            _ => match datatype {
                Some(dt) => Term::typed_literal(text, dt)
                    .map_err(|_| self.error(ErrorKind::MissingDatatype))?,
                None => return Err(self.error(ErrorKind::MissingDatatype)),
            },
        };
        Ok(term)
    }

    fn attribute(&self, e: &BytesStart<'_>, key: &str) -> Result<Option<String>, Error> {
        let attr = e
            .try_get_attribute(key)
            .map_err(|err| self.error(err.into()))?;
        match attr {
            None => Ok(None),
            Some(attr) => attr
                .decode_and_unescape_value(self.reader.decoder())
                .map(|v| Some(v.into_owned()))
                .map_err(|err| self.error(err.into())),
        }
    }

    /// Read the text content of the current element, up to its end tag.
    fn text(&mut self, name: &[u8]) -> Result<String, Error> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let t = t.unescape().map_err(|err| self.error(err.into()))?;
                    text.push_str(&t);
                }
                Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
                Event::End(_) => return Ok(text),
                Event::Start(_) | Event::Empty(_) => {
                    return Err(self.error(ErrorKind::UnexpectedContent(lossy(name))))
                }
                Event::Eof => return Err(self.error(ErrorKind::UnexpectedEof)),
                _ => continue,
            }
        }
    }
}

fn lossy(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

impl<B: BufRead> QuadSource for TrixSource<B> {
    type Error = Error;

    fn try_for_some_quad<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: std::error::Error,
        F: FnMut(Quad) -> Result<(), E>,
    {
        match self.next_quad().map_err(SourceError)? {
            None => Ok(false),
            Some(q) => {
                f(q).map_err(SinkError)?;
                Ok(true)
            }
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    const EXAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TriX xmlns="http://www.w3.org/2004/03/trix/trix-1/">
  <graph>
    <triple>
      <id>foo</id>
      <uri>http://www.w3.org/2000/01/rdf-schema#seeAlso</uri>
      <id>bar</id>
    </triple>
  </graph>
  <graph>
    <uri>http://example.org/g</uri>
    <triple>
      <id>hello</id>
      <uri>http://purl.org/dc/terms/title</uri>
      <plainLiteral xml:lang="en-US">Hello, world!</plainLiteral>
    </triple>
    <triple>
      <uri>http://example.org/x</uri>
      <uri>http://example.org/v</uri>
      <typedLiteral datatype="http://www.w3.org/2001/XMLSchema#integer">42</typedLiteral>
    </triple>
    <triple>
      <uri>http://example.org/x</uri>
      <uri>http://example.org/v</uri>
      <plainLiteral>a &lt;b&gt; &amp; c</plainLiteral>
    </triple>
    <triple>
      <uri>http://example.org/x</uri>
      <uri>http://example.org/v</uri>
      <plainLiteral/>
    </triple>
  </graph>
</TriX>
"#;

    #[test]
    fn example() -> Result<(), Box<dyn std::error::Error>> {
        let _ = env_logger::builder().is_test(true).try_init();
        let quads = parse_str(EXAMPLE).collect_quads()?;
        let g = Term::uri("http://example.org/g");
        assert_eq!(
            quads,
            vec![
                Quad::new(
                    Term::blank_node("foo"),
                    Term::uri("http://www.w3.org/2000/01/rdf-schema#seeAlso"),
                    Term::blank_node("bar"),
                    None,
                ),
                Quad::new(
                    Term::blank_node("hello"),
                    Term::uri("http://purl.org/dc/terms/title"),
                    Term::plain_literal("Hello, world!", Some("en-US")),
                    Some(g.clone()),
                ),
                Quad::new(
                    Term::uri("http://example.org/x"),
                    Term::uri("http://example.org/v"),
                    Term::typed_literal("42", "http://www.w3.org/2001/XMLSchema#integer")?,
                    Some(g.clone()),
                ),
                Quad::new(
                    Term::uri("http://example.org/x"),
                    Term::uri("http://example.org/v"),
                    Term::plain_literal("a <b> & c", None),
                    Some(g.clone()),
                ),
                Quad::new(
                    Term::uri("http://example.org/x"),
                    Term::uri("http://example.org/v"),
                    Term::plain_literal("", None),
                    Some(g),
                ),
            ]
        );
        Ok(())
    }

    #[test]
    fn lowercase_root() -> Result<(), Box<dyn std::error::Error>> {
        let quads = parse_str("<trix><graph><triple><uri>x:s</uri><uri>x:p</uri><uri>x:o</uri></triple></graph></trix>")
            .collect_quads()?;
        assert_eq!(quads.len(), 1);
        Ok(())
    }

    #[test]
    fn empty_document() -> Result<(), Box<dyn std::error::Error>> {
        assert!(parse_str("<TriX/>").collect_quads()?.is_empty());
        Ok(())
    }

    #[test_case("<TriX><graph><triple><uri>x:s</uri><uri>x:p</uri></triple></graph></TriX>", "expected 3 terms in <triple>, found 2"; "two terms")]
    #[test_case("<TriX><graph><triple><uri>x:s</uri><uri>x:p</uri><uri>x:o</uri><uri>x:g</uri></triple></graph></TriX>", "expected 3 terms in <triple>, found 4"; "four terms")]
    #[test_case("<TriX><triple/></TriX>", "unexpected element <triple>"; "triple outside graph")]
    #[test_case("<TriX><graph><foo/></graph></TriX>", "unknown element <foo>"; "unknown element")]
    #[test_case("<TriX><graph><uri>x:g1</uri><uri>x:g2</uri></graph></TriX>", "graph already named"; "two graph names")]
    #[test_case("<TriX><graph><triple><uri>x:s</uri><uri>x:p</uri><typedLiteral>1</typedLiteral></triple></graph></TriX>", "missing datatype attribute in <typedLiteral>"; "no datatype")]
    #[test_case("<TriX><graph><triple><uri>x:s<id>b</id></uri></triple></graph></TriX>", "unexpected content in <uri>"; "nested term")]
    fn errors(input: &str, message: &str) {
        let err = parse_str(input).collect_quads().unwrap_err();
        assert_eq!(err.kind().to_string(), message);
    }

    #[test]
    fn records_before_error() {
        let input = "<TriX><graph><triple><uri>x:s</uri><uri>x:p</uri><uri>x:o</uri></triple><bad/></graph></TriX>";
        let mut src = parse_str(input);
        let mut seen = 0;
        let res = src.for_each_quad(|_| seen += 1);
        assert!(res.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn empty_ids_are_fresh_blank_nodes() -> Result<(), Box<dyn std::error::Error>> {
        let trix = r#"<TriX xmlns="http://www.w3.org/2004/03/trix/trix-1/">
  <graph>
    <id/>
    <triple><id/><uri>tag:p</uri><id></id></triple>
    <triple><id/><uri>tag:p</uri><id>o</id></triple>
  </graph>
</TriX>"#;
        let quads = parse_str(trix).collect_quads()?;
        assert_eq!(quads.len(), 2);
        let labels = [
            quads[0].context().map(Term::value),
            Some(quads[0].s().value()),
            Some(quads[0].o().value()),
            Some(quads[1].s().value()),
        ];
        for (i, l) in labels.iter().enumerate() {
            let l = l.ok_or("missing graph name")?;
            assert!(!l.is_empty());
            assert!(labels[..i].iter().all(|other| *other != Some(l)), "{labels:?}");
        }
        assert_eq!(quads[1].o(), &Term::blank_node("o"));
        Ok(())
    }
}
