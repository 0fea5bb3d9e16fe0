//! The content-type driven [`Writer`].

use crate::pajek::PajekSerializer;
use crate::Error;
use rdfpp_api::format::{self, Format, Module};
use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::Serializer;
use rdfpp_api::triple::Triple;
use rdfpp_nquads::serializer::{NqSerializer, NtSerializer};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Writes triples or quads to a stream, in the syntax selected by a content type.
///
/// A `Writer` is a [`Serializer`]; its lifecycle is the one described there.
pub struct Writer<'a> {
    format: &'static Format,
    charset: Option<String>,
    base_uri: Option<String>,
    inner: Box<dyn Serializer<Error = io::Error> + 'a>,
}

impl<'a> Writer<'a> {
    /// Build a writer for `output`.
    ///
    /// `charset` and `base_uri` are kept for reference only:
    /// every backend writes UTF-8 and absolute IRIs.
    ///
    /// # Errors
    /// [`UnknownContentType`](Error::UnknownContentType),
    /// [`BackendUnavailable`](Error::BackendUnavailable).
    pub fn new<W: io::Write + 'a>(
        output: W,
        content_type: &str,
        charset: Option<&str>,
        base_uri: Option<&str>,
    ) -> Result<Self, Error> {
        let format = format::find_for_content_type(content_type)
            .ok_or_else(|| Error::UnknownContentType(content_type.to_string()))?;
        Self::with_format(output, format, charset, base_uri)
    }

    fn with_format<W: io::Write + 'a>(
        output: W,
        format: &'static Format,
        charset: Option<&str>,
        base_uri: Option<&str>,
    ) -> Result<Self, Error> {
        let inner = serializer_for(output, format)?;
        Ok(Writer {
            format,
            charset: charset.or(format.charset).map(str::to_string),
            base_uri: base_uri.filter(|b| !b.is_empty()).map(str::to_string),
            inner,
        })
    }

    /// The format selected for this writer.
    pub fn format(&self) -> &'static Format {
        self.format
    }

    /// The charset given on construction, or the default charset of the format.
    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// The base URI given on construction.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }
}

impl Writer<'static> {
    /// Build a writer creating (or truncating) the file at `path`.
    ///
    /// If `content_type` is `None`, the format is guessed from the extension of `path`.
    pub fn create<P: AsRef<Path>>(
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
        // fail before creating the file
        writer_module(format)?;
        let output = BufWriter::new(File::create(path)?);
        Self::with_format(output, format, charset, base_uri)
    }
}

/// The module actually used for `format`.
///
/// `text/turtle` is registered for serd, which has no writer: raptor writes it.
fn writer_module(format: &'static Format) -> Result<Module, Error> {
    let module = if format.content_type == "text/turtle" {
        log::debug!("text/turtle is written by module raptor");
        Module::Raptor
    } else {
        format.module
    };
    let available = match (module, format.writer) {
        (Module::NQuads | Module::Pajek, _) => true,
        (Module::Serd, _) | (Module::Raptor, Some("turtle")) => cfg!(feature = "turtle"),
        (Module::Raptor, Some("rdfxml-abbrev")) | (Module::Trix, _) => cfg!(feature = "xml"),
        (Module::RdfJson, _) => cfg!(feature = "json"),
        _ => false,
    };
    if available {
        Ok(module)
    } else {
        Err(Error::BackendUnavailable {
            content_type: format.content_type,
            module,
            role: "writer",
        })
    }
}

fn serializer_for<'a, W: io::Write + 'a>(
    output: W,
    format: &'static Format,
) -> Result<Box<dyn Serializer<Error = io::Error> + 'a>, Error> {
    let module = writer_module(format)?;
    log::debug!(
        "writing {} with module {} ({:?})",
        format.content_type,
        module,
        format.writer
    );
    Ok(match (module, format.writer) {
        (Module::NQuads, Some("ntriples")) => Box::new(NtSerializer::new(output)),
        (Module::NQuads, _) => Box::new(NqSerializer::new(output)),
        (Module::Pajek, _) => Box::new(PajekSerializer::new(output)),
        #[cfg(feature = "turtle")]
        (Module::Serd, _) | (Module::Raptor, Some("turtle")) => {
            Box::new(rdfpp_turtle::serializer::TurtleSerializer::new(output))
        }
        #[cfg(feature = "xml")]
        (Module::Raptor, Some("rdfxml-abbrev")) => {
            Box::new(rdfpp_xml::serializer::RdfXmlSerializer::new(output))
        }
        #[cfg(feature = "xml")]
        (Module::Trix, _) => Box::new(rdfpp_xml::trix::TrixSerializer::new(output)),
        #[cfg(feature = "json")]
        (Module::RdfJson, _) => Box::new(rdfpp_json::RdfJsonSerializer::new(output)),
        (module, _) => {
            return Err(Error::BackendUnavailable {
                content_type: format.content_type,
                module,
                role: "writer",
            })
        }
    })
}

impl Serializer for Writer<'_> {
    type Error = Error;

    /// Unknown keys are logged and ignored.
    fn configure(&mut self, key: &str, value: &str) -> bool {
        let known = self.inner.configure(key, value);
        if !known {
            log::warn!(
                "{} writer ignores option {key}={value:?}",
                self.format.content_type
            );
        }
        known
    }

    fn define_prefix(&mut self, prefix: &str, uri: &str) -> Result<(), Error> {
        Ok(self.inner.define_prefix(prefix, uri)?)
    }

    fn begin(&mut self) -> Result<(), Error> {
        Ok(self.inner.begin()?)
    }

    fn write_triple(&mut self, triple: &Triple) -> Result<(), Error> {
        Ok(self.inner.write_triple(triple)?)
    }

    fn write_quad(&mut self, quad: &Quad) -> Result<(), Error> {
        Ok(self.inner.write_quad(quad)?)
    }

    fn write_comment(&mut self, text: &str) -> Result<(), Error> {
        Ok(self.inner.write_comment(text)?)
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.inner.flush()?)
    }

    fn finish(&mut self) -> Result<(), Error> {
        Ok(self.inner.finish()?)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::Reader;
    use rdfpp_api::term::Term;
    use test_case::test_case;

    fn quads() -> Vec<Quad> {
        vec![
            Quad::new(
                Term::blank_node("foo"),
                Term::uri("http://example.org/p"),
                Term::plain_literal("hi", Some("en")),
                Some(Term::uri("http://example.org/g")),
            ),
            Quad::new(
                Term::uri("http://example.org/s"),
                Term::uri("http://example.org/p"),
                Term::uri("http://example.org/o"),
                None,
            ),
        ]
    }

    fn write(ct: &str, quads: &[Quad]) -> Result<String, Error> {
        let mut out = Vec::new();
        let mut w = Writer::new(&mut out, ct, None, None)?;
        w.begin()?;
        w.write_comment("test")?;
        for q in quads {
            w.write_quad(q)?;
        }
        w.finish()?;
        drop(w);
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn nquads() -> Result<(), Error> {
        let out = write("application/n-quads", &quads())?;
        assert_eq!(
            out,
            "# test\n\
             _:foo <http://example.org/p> \"hi\"@en <http://example.org/g> .\n\
             <http://example.org/s> <http://example.org/p> <http://example.org/o> .\n"
        );
        Ok(())
    }

    #[test]
    fn ntriples_drop_context() -> Result<(), Error> {
        let out = write("application/n-triples", &quads())?;
        assert!(out.contains("_:foo <http://example.org/p> \"hi\"@en .\n"));
        Ok(())
    }

    #[test_case("application/n-quads", 2)]
    #[test_case("text/x-nquads", 2)]
    #[cfg_attr(feature = "xml", test_case("application/trix", 2))]
    #[cfg_attr(feature = "turtle", test_case("text/turtle", 1))]
    #[cfg_attr(feature = "turtle", test_case("application/turtle", 1))]
    #[cfg_attr(feature = "xml", test_case("application/rdf+xml", 1))]
    #[cfg_attr(feature = "json", test_case("application/rdf+json", 2))]
    fn roundtrip(ct: &str, expected: usize) -> Result<(), Error> {
        let out = write(ct, &quads())?;
        let mut got = vec![];
        Reader::new(out.as_bytes(), Some(ct), None, None)?.read_quads(|q| got.push(q))?;
        assert_eq!(got.len(), expected, "{out}");
        Ok(())
    }

    #[test]
    fn dispatch_errors() {
        let mut out = Vec::new();
        assert!(matches!(
            Writer::new(&mut out, "text/x-unknown", None, None),
            Err(Error::UnknownContentType(_))
        ));
        assert!(matches!(
            Writer::new(&mut out, "application/ld+json", None, None),
            Err(Error::BackendUnavailable {
                role: "writer",
                ..
            })
        ));
        assert!(matches!(
            Writer::new(&mut out, "application/trig", None, None),
            Err(Error::BackendUnavailable { .. })
        ));
    }

    #[test]
    fn create_dispatches_before_io() {
        assert!(matches!(
            Writer::create("/nonexistent/rdfpp/out.jsonld", None, None, None),
            Err(Error::BackendUnavailable { role: "writer", .. })
        ));
        assert!(matches!(
            Writer::create("/nonexistent/rdfpp/out.nq", None, None, None),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn configure() -> Result<(), Error> {
        let mut out = Vec::new();
        let mut w = Writer::new(&mut out, "application/n-triples", None, None)?;
        assert!(w.configure("ascii", "true"));
        assert!(!w.configure("no-such-key", "x"));
        w.write_triple(&Triple::new(
            Term::uri("tag:s"),
            Term::uri("tag:p"),
            Term::plain_literal("é", None),
        ))?;
        w.finish()?;
        drop(w);
        assert_eq!(out, b"<tag:s> <tag:p> \"\\u00E9\" .\n");
        Ok(())
    }

    #[test]
    fn charset() -> Result<(), Error> {
        let w = Writer::new(io::sink(), "application/n-quads", None, Some(""))?;
        assert_eq!(w.charset(), Some("UTF-8"));
        assert_eq!(w.base_uri(), None);
        assert_eq!(w.format().file_extension, Some("nq"));
        Ok(())
    }
}
