//! The registry of RDF formats.
//!
//! Each [`Format`] maps a MIME content-type to the [`Module`] (backend) handling it,
//! together with the name of the reader and writer implementations in that backend,
//! a default charset and a default file extension.
//!
//! Several formats may share the same backend, reader and writer,
//! and differ only by their content-type:
//! official types coexist with their unofficial or deprecated synonyms.
//! The registry is therefore a multi-key lookup table,
//! which is compiled in and never mutated.
//!
//! ```
//! # use rdfpp_api::format;
//! let nq = format::find_for_file_path("dump/2024/data.nq").unwrap();
//! assert_eq!(nq.content_type, "application/n-quads");
//! assert_eq!(nq.module, format::Module::NQuads);
//! ```
use std::fmt;
use std::str::FromStr;

/// The backends a [`Format`] can be handled by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Module {
    /// The native N-Triples/N-Quads engine
    NQuads,
    /// The Turtle engine playing the role of serd
    Serd,
    /// The multi-syntax engine playing the role of raptor
    Raptor,
    /// The TriX engine
    Trix,
    /// The RDF/JSON engine
    RdfJson,
    /// A JSON-LD engine
    JsonLd,
    /// An XSLT engine
    Xslt,
    /// The Pajek engine
    Pajek,
}

impl Module {
    /// The name of this module, as used in the registry.
    pub fn name(&self) -> &'static str {
        match self {
            Module::NQuads => "nquads",
            Module::Serd => "serd",
            Module::Raptor => "raptor",
            Module::Trix => "trix",
            Module::RdfJson => "rdfjson",
            Module::JsonLd => "jsonld",
            Module::Xslt => "xslt",
            Module::Pajek => "pajek",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nquads" => Ok(Module::NQuads),
            "serd" => Ok(Module::Serd),
            "raptor" => Ok(Module::Raptor),
            "trix" => Ok(Module::Trix),
            "rdfjson" => Ok(Module::RdfJson),
            "jsonld" => Ok(Module::JsonLd),
            "xslt" => Ok(Module::Xslt),
            "pajek" => Ok(Module::Pajek),
            _ => Err(UnknownModule(s.to_string())),
        }
    }
}

/// The error raised when parsing an unknown [`Module`] name.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown module: {0}")]
pub struct UnknownModule(pub String);

/// An entry of the format registry.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Format {
    /// The MIME content-type, matched exactly (parameters included)
    pub content_type: &'static str,
    /// The default charset
    pub charset: Option<&'static str>,
    /// The default file extension, without the leading dot
    pub file_extension: Option<&'static str>,
    /// The backend handling this format
    pub module: Module,
    /// The name of the reader implementation in the backend
    pub reader: Option<&'static str>,
    /// The name of the writer implementation in the backend
    pub writer: Option<&'static str>,
}

const fn row(
    content_type: &'static str,
    charset: Option<&'static str>,
    file_extension: Option<&'static str>,
    module: Module,
    reader: Option<&'static str>,
    writer: Option<&'static str>,
) -> Format {
    Format {
        content_type,
        charset,
        file_extension,
        module,
        reader,
        writer,
    }
}

use Module::*;

/// The registry. Order matters: lookups return the first matching entry.
#[rustfmt::skip]
pub static FORMATS: &[Format] = &[
    row("application/n-triples", Some("UTF-8"), Some("nt"),     NQuads,  Some("ntriples"),     Some("ntriples")),
    row("text/plain",            Some("ASCII"), None,           NQuads,  Some("ntriples"),     Some("ntriples")),
    row("text/ntriples",         None,          None,           NQuads,  Some("ntriples"),     Some("ntriples")),
    row("text/x-ntriples",       None,          None,           NQuads,  Some("ntriples"),     Some("ntriples")),
    row("application/n-quads",   Some("UTF-8"), Some("nq"),     NQuads,  Some("nquads"),       Some("nquads")),
    row("text/nquads",           None,          None,           NQuads,  Some("nquads"),       Some("nquads")),
    row("text/x-nquads",         None,          None,           NQuads,  Some("nquads"),       Some("nquads")),
    row("text/turtle",           None,          Some("ttl"),    Serd,    Some("turtle"),       Some("turtle")),
    row("text/turtle;serd",      None,          None,           Serd,    Some("turtle"),       Some("turtle")),
    row("text/turtle;raptor",    None,          None,           Raptor,  Some("turtle"),       Some("turtle")),
    row("application/turtle",    None,          None,           Raptor,  Some("turtle"),       Some("turtle")),
    row("application/x-turtle",  None,          None,           Raptor,  Some("turtle"),       Some("turtle")),
    row("text/n3",               None,          Some("n3"),     Raptor,  Some("turtle"),       Some("turtle")),
    row("text/rdf+n3",           None,          None,           Raptor,  Some("turtle"),       Some("turtle")),
    row("application/rdf+n3",    None,          None,           Raptor,  Some("turtle"),       Some("turtle")),
    row("application/trig",      None,          Some("trig"),   Raptor,  Some("trig"),         None),
    row("application/trix",      None,          Some("trix"),   Trix,    None,                 None),
    row("application/rdf+json",  Some("UTF-8"), Some("rj"),     RdfJson, None,                 None),
    row("application/json",      Some("UTF-8"), Some("json"),   RdfJson, None,                 None),
    row("text/json",             Some("UTF-8"), None,           RdfJson, None,                 None),
    row("application/rdf+xml",   None,          Some("rdf"),    Raptor,  Some("rdfxml"),       Some("rdfxml-abbrev")),
    row("application/ld+json",   None,          Some("jsonld"), JsonLd,  None,                 None),
    row("application/xml",       None,          Some("xml"),    Xslt,    None,                 None),
    row("application/x-pajek",   None,          Some("net"),    Pajek,   None,                 None),
    row("text/x-graphviz",       None,          Some("dot"),    Raptor,  None,                 Some("dot")),
    row("application/xhtml+xml", None,          None,           Raptor,  Some("rdfa"),         Some("html")),
    row("text/html",             None,          None,           Raptor,  Some("rdfa"),         Some("html")),
    row("application/rss+xml",   None,          None,           Raptor,  Some("rss-tag-soup"), Some("rss-1.0")),
    row("application/atom+xml",  None,          None,           Raptor,  Some("rss-tag-soup"), Some("atom")),
];

/// Iterate over all registered formats, in registry order.
pub fn all() -> impl Iterator<Item = &'static Format> {
    FORMATS.iter()
}

/// Whether some format is registered for exactly this content-type.
pub fn supported(content_type: &str) -> bool {
    find_for_content_type(content_type).is_some()
}

/// The first format registered for exactly this content-type.
///
/// Matching is case-sensitive, and parameters are *not* parsed:
/// `"text/turtle;serd"` is a key of its own.
pub fn find_for_content_type(content_type: &str) -> Option<&'static Format> {
    FORMATS.iter().find(|f| f.content_type == content_type)
}

/// The first format whose default file extension is `extension` (without the leading dot).
pub fn find_for_file_extension(extension: &str) -> Option<&'static Format> {
    FORMATS
        .iter()
        .find(|f| f.file_extension == Some(extension))
}

/// The format corresponding to the extension of `path`,
/// i.e. whatever follows its last `.`.
///
/// Returns `None` if `path` contains no `.`.
pub fn find_for_file_path(path: &str) -> Option<&'static Format> {
    let (_, extension) = path.rsplit_once('.')?;
    let found = find_for_file_extension(extension);
    match found {
        Some(f) => log::debug!("guessed {} from {path:?}", f.content_type),
        None => log::debug!("no format registered for extension {extension:?}"),
    }
    found
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test]
    fn table_size() {
        assert_eq!(FORMATS.len(), 29);
    }

    #[test]
    fn totality() {
        for f in all() {
            assert!(supported(f.content_type), "{}", f.content_type);
        }
    }

    #[test]
    fn content_types_are_unique() {
        for (i, f) in FORMATS.iter().enumerate() {
            assert_eq!(
                find_for_content_type(f.content_type),
                Some(&FORMATS[i]),
                "{}",
                f.content_type
            );
        }
    }

    #[test_case("application/n-triples", NQuads, Some("ntriples"), Some("ntriples"))]
    #[test_case("text/plain", NQuads, Some("ntriples"), Some("ntriples"))]
    #[test_case("application/n-quads", NQuads, Some("nquads"), Some("nquads"))]
    #[test_case("text/x-nquads", NQuads, Some("nquads"), Some("nquads"))]
    #[test_case("text/turtle", Serd, Some("turtle"), Some("turtle"))]
    #[test_case("text/turtle;serd", Serd, Some("turtle"), Some("turtle"))]
    #[test_case("text/turtle;raptor", Raptor, Some("turtle"), Some("turtle"))]
    #[test_case("application/trig", Raptor, Some("trig"), None)]
    #[test_case("application/trix", Trix, None, None)]
    #[test_case("application/rdf+xml", Raptor, Some("rdfxml"), Some("rdfxml-abbrev"))]
    #[test_case("application/x-pajek", Pajek, None, None)]
    #[test_case("text/x-graphviz", Raptor, None, Some("dot"))]
    fn by_content_type(
        ct: &str,
        module: Module,
        reader: Option<&'static str>,
        writer: Option<&'static str>,
    ) {
        let f = find_for_content_type(ct).unwrap();
        assert_eq!(f.module, module);
        assert_eq!(f.reader, reader);
        assert_eq!(f.writer, writer);
    }

    #[test_case("TEXT/TURTLE"; "case sensitive")]
    #[test_case("text/turtle; charset=utf-8"; "no parameter parsing")]
    #[test_case("text/turtle;"; "trailing semicolon")]
    #[test_case(""; "empty")]
    fn unsupported(ct: &str) {
        assert!(!supported(ct));
        assert_eq!(find_for_content_type(ct), None);
    }

    #[test_case("nt" => Some("application/n-triples"))]
    #[test_case("nq" => Some("application/n-quads"))]
    #[test_case("ttl" => Some("text/turtle"))]
    #[test_case("n3" => Some("text/n3"))]
    #[test_case("rj" => Some("application/rdf+json"))]
    #[test_case("json" => Some("application/json"))]
    #[test_case("rdf" => Some("application/rdf+xml"))]
    #[test_case("net" => Some("application/x-pajek"))]
    #[test_case("NQ" => None; "case sensitive")]
    #[test_case(".nq" => None; "leading dot")]
    #[test_case("" => None; "empty")]
    fn by_extension(ext: &str) -> Option<&'static str> {
        find_for_file_extension(ext).map(|f| f.content_type)
    }

    #[test_case("a/b/c.nq" => Some("application/n-quads"))]
    #[test_case("data.tar.ttl" => Some("text/turtle"))]
    #[test_case("dir.nt/README" => None; "dot in directory only")]
    #[test_case("README" => None; "no dot")]
    #[test_case("file." => None; "empty extension")]
    fn by_file_path(path: &str) -> Option<&'static str> {
        find_for_file_path(path).map(|f| f.content_type)
    }

    #[test]
    fn file_path_fallback() {
        assert_eq!(find_for_file_path("a/b/c.nq"), find_for_file_extension("nq"));
        assert_eq!(
            find_for_file_extension("nq"),
            find_for_content_type("application/n-quads")
        );
    }

    #[test]
    fn charsets() {
        assert_eq!(find_for_content_type("text/plain").unwrap().charset, Some("ASCII"));
        assert_eq!(find_for_content_type("text/json").unwrap().charset, Some("UTF-8"));
        assert_eq!(find_for_content_type("text/n3").unwrap().charset, None);
    }

    #[test]
    fn module_names() {
        for f in all() {
            assert_eq!(f.module.name().parse::<Module>(), Ok(f.module));
        }
        assert!("redland".parse::<Module>().is_err());
    }
}
