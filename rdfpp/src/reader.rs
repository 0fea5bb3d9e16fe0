//! The content-type driven [`Reader`].

use crate::Error;
use oxiri::Iri;
use rdfpp_api::format::{self, Format, Module};
use rdfpp_api::parser::{AbortHandle, QuadParser, TripleParser};
use rdfpp_api::quad::Quad;
use rdfpp_api::source::{QuadSource, StreamError, StreamResult, TripleSource};
use rdfpp_api::triple::Triple;
use rdfpp_nquads::parser::{NQuadsParser, NTriplesParser};
use std::convert::Infallible;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The parser selected for a [`Format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Native,
    #[cfg(feature = "turtle")]
    Turtle,
    #[cfg(feature = "turtle")]
    TriG,
    #[cfg(feature = "xml")]
    RdfXml,
    #[cfg(feature = "xml")]
    Trix,
    #[cfg(feature = "json")]
    RdfJson,
}

impl Backend {
    fn for_format(format: &'static Format) -> Result<Self, Error> {
        match (format.module, format.reader) {
            (Module::NQuads, _) => Ok(Backend::Native),
            #[cfg(feature = "turtle")]
            (Module::Serd, _) | (Module::Raptor, Some("turtle")) => Ok(Backend::Turtle),
            #[cfg(feature = "turtle")]
            (Module::Raptor, Some("trig")) => Ok(Backend::TriG),
            #[cfg(feature = "xml")]
            (Module::Raptor, Some("rdfxml")) => Ok(Backend::RdfXml),
            #[cfg(feature = "xml")]
            (Module::Trix, _) => Ok(Backend::Trix),
            #[cfg(feature = "json")]
            (Module::RdfJson, _) => Ok(Backend::RdfJson),
            (module, _) => Err(Error::BackendUnavailable {
                content_type: format.content_type,
                module,
                role: "reader",
            }),
        }
    }
}

/// Reads triples or quads from a stream, in the syntax selected by a content type.
///
/// Each reader reads its input once:
/// after a first call to one of the `read_*` methods,
/// subsequent calls produce no record.
pub struct Reader<B> {
    input: Option<B>,
    format: &'static Format,
    backend: Backend,
    charset: Option<String>,
    base: Option<Iri<String>>,
    abort: AbortHandle,
}

impl<B: BufRead> Reader<B> {
    /// Build a reader for `input`.
    ///
    /// * `content_type` selects the syntax; it is required,
    ///   as no backend of this crate guesses the syntax of a stream.
    /// * `charset` defaults to the charset registered for the format;
    ///   only UTF-8 (and its ASCII subset) is actually supported.
    /// * `base_uri` is used to resolve relative IRIs by the backends supporting it;
    ///   an empty string means no base.
    ///
    /// # Errors
    /// [`CantGuessSyntax`](Error::CantGuessSyntax),
    /// [`UnknownContentType`](Error::UnknownContentType),
    /// [`BackendUnavailable`](Error::BackendUnavailable),
    /// [`InvalidBaseUri`](Error::InvalidBaseUri).
    pub fn new(
        input: B,
        content_type: Option<&str>,
        charset: Option<&str>,
        base_uri: Option<&str>,
    ) -> Result<Self, Error> {
        let content_type = content_type.ok_or(Error::CantGuessSyntax)?;
        let format = format::find_for_content_type(content_type)
            .ok_or_else(|| Error::UnknownContentType(content_type.to_string()))?;
        Self::with_format(input, format, charset, base_uri)
    }

    fn with_format(
        input: B,
        format: &'static Format,
        charset: Option<&str>,
        base_uri: Option<&str>,
    ) -> Result<Self, Error> {
        let backend = Backend::for_format(format)?;
        let base = match base_uri.filter(|b| !b.is_empty()) {
            None => None,
            Some(base) => Some(Iri::parse(base.to_string()).map_err(|err| {
                Error::InvalidBaseUri {
                    base: base.to_string(),
                    message: err.to_string(),
                }
            })?),
        };
        let charset = charset.or(format.charset).map(str::to_string);
        log::debug!(
            "reading {} with {:?} backend (module {})",
            format.content_type,
            backend,
            format.module
        );
        Ok(Reader {
            input: Some(input),
            format,
            backend,
            charset,
            base,
            abort: AbortHandle::new(),
        })
    }

    /// The format selected for this reader.
    pub fn format(&self) -> &'static Format {
        self.format
    }

    /// The charset of the input, if known.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// The base IRI of the input, if any.
    pub fn base_uri(&self) -> Option<&str> {
        self.base.as_ref().map(Iri::as_str)
    }

    /// Ask this reader to stop at its next checkpoint (before the next record).
    pub fn abort(&self) {
        self.abort.abort()
    }

    /// A handle that can [abort](AbortHandle::abort) this reader,
    /// typically from inside the callback of [`read_triples`](Reader::read_triples).
    pub fn abort_handle(&self) -> AbortHandle {
        self.abort.clone()
    }

    /// Pass every triple of the input to `f`.
    ///
    /// The context of quads, for syntaxes that have them, is dropped.
    pub fn read_triples<F: FnMut(Triple)>(&mut self, mut f: F) -> Result<(), Error> {
        self.try_read_triples(|t| -> Result<(), Infallible> {
            f(t);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Pass every quad of the input to `f`.
    ///
    /// Syntaxes without named graphs produce quads with no context.
    pub fn read_quads<F: FnMut(Quad)>(&mut self, mut f: F) -> Result<(), Error> {
        self.try_read_quads(|q| -> Result<(), Infallible> {
            f(q);
            Ok(())
        })
        .map_err(StreamError::inner_into)
    }

    /// Pass every triple of the input to `f`, stopping at the first error of `f`.
    pub fn try_read_triples<E, F>(&mut self, f: F) -> StreamResult<(), Error, E>
    where
        E: std::error::Error,
        F: FnMut(Triple) -> Result<(), E>,
    {
        let Some(input) = self.input.take() else {
            log::debug!("input of {} already read", self.format.content_type);
            return Ok(());
        };
        let abort = &self.abort;
        match self.backend {
            Backend::Native => pump_triples(NTriplesParser::new().parse(input), abort, f),
            #[cfg(feature = "turtle")]
            Backend::Turtle => pump_triples(self.turtle().parse(input), abort, f),
            #[cfg(feature = "turtle")]
            Backend::TriG => pump_triples(self.trig().parse(input).to_triples(), abort, f),
            #[cfg(feature = "xml")]
            Backend::RdfXml => pump_triples(self.rdfxml().parse(input), abort, f),
            #[cfg(feature = "xml")]
            Backend::Trix => pump_triples(
                rdfpp_xml::trix::TrixParser::new().parse(input).to_triples(),
                abort,
                f,
            ),
            #[cfg(feature = "json")]
            Backend::RdfJson => {
                pump_triples(rdfpp_json::RdfJsonParser::new().parse(input), abort, f)
            }
        }
    }

    /// Pass every quad of the input to `f`, stopping at the first error of `f`.
    pub fn try_read_quads<E, F>(&mut self, f: F) -> StreamResult<(), Error, E>
    where
        E: std::error::Error,
        F: FnMut(Quad) -> Result<(), E>,
    {
        let Some(input) = self.input.take() else {
            log::debug!("input of {} already read", self.format.content_type);
            return Ok(());
        };
        let abort = &self.abort;
        match self.backend {
            Backend::Native => pump_quads(NQuadsParser::new().parse(input), abort, f),
            #[cfg(feature = "turtle")]
            Backend::Turtle => pump_quads(self.turtle().parse(input).to_quads(), abort, f),
            #[cfg(feature = "turtle")]
            Backend::TriG => pump_quads(self.trig().parse(input), abort, f),
            #[cfg(feature = "xml")]
            Backend::RdfXml => pump_quads(self.rdfxml().parse(input).to_quads(), abort, f),
            #[cfg(feature = "xml")]
            Backend::Trix => pump_quads(rdfpp_xml::trix::TrixParser::new().parse(input), abort, f),
            #[cfg(feature = "json")]
            Backend::RdfJson => pump_quads(
                rdfpp_json::RdfJsonParser::new().parse(input).to_quads(),
                abort,
                f,
            ),
        }
    }

    #[cfg(feature = "turtle")]
    fn turtle(&self) -> rdfpp_turtle::parser::TurtleParser {
        rdfpp_turtle::parser::TurtleParser {
            base: self.base.clone(),
        }
    }

    #[cfg(feature = "turtle")]
    fn trig(&self) -> rdfpp_turtle::parser::TriGParser {
        rdfpp_turtle::parser::TriGParser {
            base: self.base.clone(),
        }
    }

    #[cfg(feature = "xml")]
    fn rdfxml(&self) -> rdfpp_xml::parser::RdfXmlParser {
        rdfpp_xml::parser::RdfXmlParser {
            base: self.base.clone(),
        }
    }
}

impl Reader<BufReader<File>> {
    /// Build a reader for the file at `path`.
    ///
    /// If `content_type` is `None`, the format is guessed from the extension of `path`.
    pub fn open<P: AsRef<Path>>(
        path: P,
        content_type: Option<&str>,
        charset: Option<&str>,
        base_uri: Option<&str>,
    ) -> Result<Self, Error> {
        let path = path.as_ref();
        let format = match content_type {
            Some(ct) => format::find_for_content_type(ct)
                .ok_or_else(|| Error::UnknownContentType(ct.to_string()))?,
            None => format::find_for_file_path(&path.to_string_lossy())
                .ok_or(Error::CantGuessSyntax)?,
        };
        // fail before opening the file
        Backend::for_format(format)?;
        let input = BufReader::new(File::open(path)?);
        Self::with_format(input, format, charset, base_uri)
    }
}

fn pump_triples<S, E, F>(mut source: S, abort: &AbortHandle, mut f: F) -> StreamResult<(), Error, E>
where
    S: TripleSource,
    Error: From<S::Error>,
    E: std::error::Error,
    F: FnMut(Triple) -> Result<(), E>,
{
    while !abort.is_aborted() {
        if !source
            .try_for_some_triple(&mut f)
            .map_err(|err| err.map_source(Error::from))?
        {
            return Ok(());
        }
    }
    log::debug!("reading aborted");
    Ok(())
}

fn pump_quads<S, E, F>(mut source: S, abort: &AbortHandle, mut f: F) -> StreamResult<(), Error, E>
where
    S: QuadSource,
    Error: From<S::Error>,
    E: std::error::Error,
    F: FnMut(Quad) -> Result<(), E>,
{
    while !abort.is_aborted() {
        if !source
            .try_for_some_quad(&mut f)
            .map_err(|err| err.map_source(Error::from))?
        {
            return Ok(());
        }
    }
    log::debug!("reading aborted");
    Ok(())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfpp_api::term::Term;
    use test_case::test_case;

    const NQ: &str = "_:foo <http://example.org/p> \"hi\"@en <http://example.org/g> .\n\
                      _:a <http://example.org/p> _:b .\n";

    fn reader<'a>(txt: &'a str, ct: &str) -> Reader<&'a [u8]> {
        Reader::new(txt.as_bytes(), Some(ct), None, None).unwrap()
    }

    #[test]
    fn quads() -> Result<(), Error> {
        let mut quads = vec![];
        reader(NQ, "application/n-quads").read_quads(|q| quads.push(q))?;
        assert_eq!(quads.len(), 2);
        assert_eq!(
            quads[0],
            Quad::new(
                Term::blank_node("foo"),
                Term::uri("http://example.org/p"),
                Term::plain_literal("hi", Some("en")),
                Some(Term::uri("http://example.org/g")),
            )
        );
        assert_eq!(quads[1].context(), None);
        Ok(())
    }

    #[test]
    fn triples_reject_fourth_term() {
        let err = reader(NQ, "application/n-quads")
            .read_triples(|_| ())
            .unwrap_err();
        assert_eq!(err.position().map(|p| p.0), Some(1));
    }

    #[test]
    fn malformed_line() {
        let err = reader("<http://x/> <http://y/> .\n", "application/n-triples")
            .read_triples(|_| ())
            .unwrap_err();
        assert!(matches!(err, Error::Parse { line: Some(1), .. }), "{err}");
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let data: &[u8] = b"<x:s> <x:p> <x:o> .\n\xff\n";
        let mut n = 0;
        let err = Reader::new(data, Some("application/n-triples"), None, None)
            .unwrap()
            .read_triples(|_| n += 1)
            .unwrap_err();
        assert_eq!(n, 1);
        assert!(matches!(err, Error::Parse { line: Some(2), col: None, .. }), "{err}");
    }

    #[test]
    fn comments_only() -> Result<(), Error> {
        let mut n = 0;
        reader("# comment\n\n   \n", "text/plain").read_triples(|_| n += 1)?;
        assert_eq!(n, 0);
        Ok(())
    }

    #[test]
    fn second_read_is_empty() -> Result<(), Error> {
        let mut r = reader(NQ, "application/n-quads");
        let mut n = 0;
        r.read_quads(|_| n += 1)?;
        r.read_quads(|_| n += 1)?;
        r.read_triples(|_| n += 1)?;
        assert_eq!(n, 2);
        Ok(())
    }

    #[test]
    fn abort_from_callback() -> Result<(), Error> {
        let mut r = reader(NQ, "application/n-quads");
        let handle = r.abort_handle();
        let mut n = 0;
        r.read_quads(|_| {
            n += 1;
            handle.abort();
        })?;
        assert_eq!(n, 1);
        Ok(())
    }

    #[test]
    fn abort_before_read() -> Result<(), Error> {
        let mut r = reader(NQ, "application/n-quads");
        r.abort();
        let mut n = 0;
        r.read_quads(|_| n += 1)?;
        assert_eq!(n, 0);
        Ok(())
    }

    #[test]
    fn sink_error() {
        let mut r = reader(NQ, "application/n-quads");
        let res = r.try_read_quads(|_| Err(std::fmt::Error));
        assert!(res.unwrap_err().is_sink_error());
    }

    #[test]
    fn dispatch_errors() {
        assert!(matches!(
            Reader::new(&b""[..], None, None, None),
            Err(Error::CantGuessSyntax)
        ));
        assert!(matches!(
            Reader::new(&b""[..], Some("text/x-unknown"), None, None),
            Err(Error::UnknownContentType(ct)) if ct == "text/x-unknown"
        ));
        assert!(matches!(
            Reader::new(&b""[..], Some("application/ld+json"), None, None),
            Err(Error::BackendUnavailable {
                module: Module::JsonLd,
                ..
            })
        ));
        assert!(matches!(
            Reader::new(&b""[..], Some("text/x-graphviz"), None, None),
            Err(Error::BackendUnavailable { .. })
        ));
    }

    #[test]
    fn open_dispatches_before_io() {
        let missing = "/nonexistent/rdfpp/data.jsonld";
        assert!(matches!(
            Reader::open(missing, None, None, None),
            Err(Error::BackendUnavailable {
                module: Module::JsonLd,
                ..
            })
        ));
        assert!(matches!(
            Reader::open(missing, Some("text/x-unknown"), None, None),
            Err(Error::UnknownContentType(_))
        ));
        assert!(matches!(
            Reader::open("/nonexistent/rdfpp/data.nq", None, None, None),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn charset_and_base() -> Result<(), Error> {
        let r = reader("", "application/n-triples");
        assert_eq!(r.charset(), Some("UTF-8"));
        assert_eq!(r.base_uri(), None);
        let r = Reader::new(
            &b""[..],
            Some("text/plain"),
            Some("US-ASCII"),
            Some("http://example.org/"),
        )?;
        assert_eq!(r.charset(), Some("US-ASCII"));
        assert_eq!(r.base_uri(), Some("http://example.org/"));
        let r = Reader::new(&b""[..], Some("text/plain"), None, Some(""))?;
        assert_eq!(r.base_uri(), None);
        assert!(matches!(
            Reader::new(&b""[..], Some("text/plain"), None, Some("not an iri")),
            Err(Error::InvalidBaseUri { .. })
        ));
        Ok(())
    }

    #[cfg(feature = "turtle")]
    #[test_case("text/turtle")]
    #[test_case("text/turtle;raptor")]
    #[test_case("text/n3")]
    fn turtle(ct: &str) -> Result<(), Error> {
        let ttl = "@prefix : <http://example.org/> . :s :p :o1, :o2 .";
        let mut quads = vec![];
        reader(ttl, ct).read_quads(|q| quads.push(q))?;
        assert_eq!(quads.len(), 2);
        assert!(quads.iter().all(|q| q.context().is_none()));
        Ok(())
    }

    #[cfg(feature = "turtle")]
    #[test]
    fn turtle_with_base() -> Result<(), Error> {
        let mut r = Reader::new(
            &b"<s> <p> <o> ."[..],
            Some("text/turtle"),
            None,
            Some("http://example.org/"),
        )?;
        let mut triples = vec![];
        r.read_triples(|t| triples.push(t))?;
        assert_eq!(triples[0].s(), &Term::uri("http://example.org/s"));
        Ok(())
    }

    #[cfg(feature = "turtle")]
    #[test]
    fn turtle_error_position() {
        let err = reader("<tag:s> <tag:p> <tag:o> .\n<tag:s> <tag:p> .\n", "text/turtle")
            .read_triples(|_| ())
            .unwrap_err();
        assert_eq!(err.position().map(|p| p.0), Some(2));
    }

    #[cfg(feature = "turtle")]
    #[test]
    fn trig_as_triples() -> Result<(), Error> {
        let trig = "<tag:g> { <tag:s> <tag:p> <tag:o> . }";
        let mut triples = vec![];
        reader(trig, "application/trig").read_triples(|t| triples.push(t))?;
        assert_eq!(
            triples,
            vec![Triple::new(
                Term::uri("tag:s"),
                Term::uri("tag:p"),
                Term::uri("tag:o")
            )]
        );
        Ok(())
    }

    #[cfg(feature = "xml")]
    #[test]
    fn trix() -> Result<(), Error> {
        let trix = r#"<TriX xmlns="http://www.w3.org/2004/03/trix/trix-1/">
          <graph><uri>tag:g</uri>
            <triple><uri>tag:s</uri><uri>tag:p</uri><plainLiteral>o</plainLiteral></triple>
          </graph>
        </TriX>"#;
        let mut quads = vec![];
        reader(trix, "application/trix").read_quads(|q| quads.push(q))?;
        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].context(), Some(&Term::uri("tag:g")));
        Ok(())
    }

    #[cfg(feature = "json")]
    #[test_case("application/rdf+json")]
    #[test_case("application/json")]
    #[test_case("text/json")]
    fn rdf_json(ct: &str) -> Result<(), Error> {
        let json = r#"{"tag:s": {"tag:p": [{"type": "literal", "value": "o"}]}}"#;
        let mut triples = vec![];
        reader(json, ct).read_triples(|t| triples.push(t))?;
        assert_eq!(triples.len(), 1);
        Ok(())
    }
}
