//! Serializer for the [N-Quads] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use super::nt::{write_comment, write_spo, write_term_with};
use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::triple::Triple;
use std::io;

/// N-Quads serializer configuration.
pub type NqConfig = super::nt::NtConfig;

/// Write the given quad into the given write in the N-Quads format,
/// without the final `" .\n"`.
pub fn write_quad<W: io::Write>(w: &mut W, q: &Quad) -> io::Result<()> {
    write_quad_with(w, q, false)
}

fn write_quad_with<W: io::Write>(w: &mut W, q: &Quad, ascii: bool) -> io::Result<()> {
    write_spo(w, [q.s(), q.p(), q.o()], ascii)?;
    if let Some(g) = q.context() {
        w.write_all(b" ")?;
        write_term_with(w, g, ascii)?;
    }
    Ok(())
}

/// N-Quads serializer.
pub struct NqSerializer<W> {
    config: NqConfig,
    write: W,
    count: usize,
}

impl<W> NqSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Quads serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, NqConfig::default())
    }

    /// Build a new N-Quads serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: NqConfig) -> Self {
        Self {
            config,
            write,
            count: 0,
        }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &NqConfig {
        &self.config
    }

    /// The number of records (triples or quads) written so far.
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer, returning its target.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl<W> Serializer for NqSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn configure(&mut self, key: &str, value: &str) -> bool {
        self.config.configure(key, value)
    }

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        let w = &mut self.write;
        write_spo(w, [triple.s(), triple.p(), triple.o()], self.config.ascii)?;
        w.write_all(b" .\n")?;
        self.count += 1;
        Ok(())
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        let w = &mut self.write;
        write_quad_with(w, quad, self.config.ascii)?;
        w.write_all(b" .\n")?;
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

impl NqSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    #[must_use]
    pub const fn new_stringifier_with_config(config: NqConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for NqSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
