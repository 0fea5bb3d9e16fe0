//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use std::io;

/// N-Triples serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct NtConfig {
    pub(super) ascii: bool,
}

impl NtConfig {
    /// Set the ascii configuration.
    ///
    /// When set, every non-ASCII character is written as a `\u` or `\U` escape sequence.
    pub fn set_ascii(&mut self, ascii: bool) -> &mut Self {
        self.ascii = ascii;
        self
    }

    /// Whether non-ASCII characters are escaped.
    pub fn ascii(&self) -> bool {
        self.ascii
    }

    /// Apply a `(key, value)` option, as passed to [`Serializer::configure`].
    ///
    /// Only `"ascii"` is recognized; its value is `"true"` (or `"1"`) or anything else for false.
    pub(crate) fn configure(&mut self, key: &str, value: &str) -> bool {
        match key {
            "ascii" => {
                self.ascii = matches!(value, "true" | "1");
                true
            }
            _ => false,
        }
    }
}

/// N-Triples serializer.
pub struct NtSerializer<W> {
    config: NtConfig,
    write: W,
    count: usize,
}

impl<W> NtSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Triples serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, NtConfig::default())
    }

    /// Build a new N-Triples serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: NtConfig) -> Self {
        Self {
            config,
            write,
            count: 0,
        }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &NtConfig {
        &self.config
    }

    /// The number of triples written so far.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer, returning its target.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W> Serializer for NtSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn configure(&mut self, key: &str, value: &str) -> bool {
        self.config.configure(key, value)
    }

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        write_spo(
            &mut self.write,
            [triple.s(), triple.p(), triple.o()],
            self.config.ascii,
        )?;
        self.write.write_all(b" .\n")?;
        self.count += 1;
        Ok(())
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        write_spo(&mut self.write, [quad.s(), quad.p(), quad.o()], self.config.ascii)?;
        self.write.write_all(b" .\n")?;
        self.count += 1;
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        write_comment(&mut self.write, text)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write.flush()
    }
}

impl NtSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    #[must_use]
    pub const fn new_stringifier_with_config(config: NtConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for NtSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

/// Write the given triple into the given write in the N-Triples format,
/// without the final `" .\n"`.
pub fn write_triple<W: io::Write>(w: &mut W, t: &Triple) -> io::Result<()> {
    write_spo(w, [t.s(), t.p(), t.o()], false)
}

/// Write the given term into the given write in the N-Triples format.
pub fn write_term<W: io::Write>(w: &mut W, t: &Term) -> io::Result<()> {
    write_term_with(w, t, false)
}

/// Write a comment line.
///
/// Line breaks in `text` are written as is.
pub fn write_comment<W: io::Write>(w: &mut W, text: &str) -> io::Result<()> {
    w.write_all(b"# ")?;
    w.write_all(text.as_bytes())?;
    w.write_all(b"\n")
}

/// Write subject, predicate and object separated by a space.
pub(crate) fn write_spo<W: io::Write>(w: &mut W, spo: [&Term; 3], ascii: bool) -> io::Result<()> {
    let [s, p, o] = spo;
    write_term_with(w, s, ascii)?;
    w.write_all(b" ")?;
    write_term_with(w, p, ascii)?;
    w.write_all(b" ")?;
    write_term_with(w, o, ascii)
}

pub(crate) fn write_term_with<W: io::Write>(w: &mut W, t: &Term, ascii: bool) -> io::Result<()> {
    match t {
        Term::UriReference { uri } => {
            w.write_all(b"<")?;
            escaped_iri(w, uri, ascii)?;
            w.write_all(b">")?;
        }
        Term::BlankNode { label } => {
            w.write_all(b"_:")?;
            w.write_all(label.as_bytes())?;
        }
        Term::PlainLiteral {
            lexical_form,
            language_tag,
        } => {
            w.write_all(b"\"")?;
            quoted_string(w, lexical_form, ascii)?;
            w.write_all(b"\"")?;
            if let Some(tag) = language_tag {
                w.write_all(b"@")?;
                w.write_all(tag.as_bytes())?;
            }
        }
        Term::TypedLiteral {
            lexical_form,
            datatype_uri,
        } => {
            w.write_all(b"\"")?;
            quoted_string(w, lexical_form, ascii)?;
            w.write_all(b"\"^^<")?;
            escaped_iri(w, datatype_uri, ascii)?;
            w.write_all(b">")?;
        }
    }
    Ok(())
}

/// Write `txt`, escaping the characters for which `escape` returns some replacement.
fn write_escaped<W, F>(w: &mut W, txt: &str, escape: F) -> io::Result<()>
where
    W: io::Write,
    F: Fn(char) -> Option<Escaped>,
{
    let mut start = 0;
    for (i, chr) in txt.char_indices() {
        if let Some(esc) = escape(chr) {
            w.write_all(txt[start..i].as_bytes())?;
            match esc {
                Escaped::Str(s) => w.write_all(s.as_bytes())?,
                Escaped::Uchar(c) => uchar(w, c)?,
            }
            start = i + chr.len_utf8();
        }
    }
    w.write_all(txt[start..].as_bytes())
}

enum Escaped {
    Str(&'static str),
    Uchar(char),
}

fn uchar<W: io::Write>(w: &mut W, chr: char) -> io::Result<()> {
    let code = u32::from(chr);
    if code <= 0xFFFF {
        write!(w, "\\u{code:04X}")
    } else {
        write!(w, "\\U{code:08X}")
    }
}

/// Escape control characters, space, backslash and `<>"{}|^\``
/// as `\u` sequences.
fn escaped_iri<W: io::Write>(w: &mut W, txt: &str, ascii: bool) -> io::Result<()> {
    write_escaped(w, txt, |chr| match chr {
        '\0'..=' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
            Some(Escaped::Uchar(chr))
        }
        _ if ascii && !chr.is_ascii() => Some(Escaped::Uchar(chr)),
        _ => None,
    })
}

fn quoted_string<W: io::Write>(w: &mut W, txt: &str, ascii: bool) -> io::Result<()> {
    write_escaped(w, txt, |chr| match chr {
        '\t' => Some(Escaped::Str("\\t")),
        '\x08' => Some(Escaped::Str("\\b")),
        '\n' => Some(Escaped::Str("\\n")),
        '\r' => Some(Escaped::Str("\\r")),
        '\x0C' => Some(Escaped::Str("\\f")),
        '"' => Some(Escaped::Str("\\\"")),
        '\\' => Some(Escaped::Str("\\\\")),
        _ if ascii && !chr.is_ascii() => Some(Escaped::Uchar(chr)),
        _ => None,
    })
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
