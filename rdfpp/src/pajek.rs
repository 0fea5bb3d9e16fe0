//! Serializer for the [Pajek] network format.
//!
//! Every URI reference or blank node used as a subject or object becomes a vertex,
//! every triple whose object is not a literal becomes an arc.
//! Predicates, literals and graph names are not represented.
//!
//! The whole network is written by [`finish`](Serializer::finish):
//!
//! ```text
//! *Vertices 2
//! 1 "http://example.org/s"
//! 2 "_:o"
//! *Arcs
//! 1 2
//! ```
//!
//! [Pajek]: http://mrvar.fdv.uni-lj.si/pajek/

use rdfpp_api::quad::Quad;
use rdfpp_api::serializer::{Serializer, Stringifier};
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use std::collections::{BTreeSet, HashMap};
use std::io;

/// Pajek serializer.
pub struct PajekSerializer<W: io::Write> {
    write: W,
    ids: HashMap<String, usize>,
    labels: Vec<String>,
    arcs: BTreeSet<(usize, usize)>,
    count: usize,
}

impl<W> PajekSerializer<W>
where
    W: io::Write,
{
    /// Build a new Pajek serializer writing to `write`.
    pub fn new(write: W) -> PajekSerializer<W> {
        PajekSerializer {
            write,
            ids: HashMap::new(),
            labels: Vec::new(),
            arcs: BTreeSet::new(),
            count: 0,
        }
    }

    /// The number of triples accepted so far, including those with a literal object.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Consume this serializer, returning its target.
    pub fn into_inner(self) -> W {
        self.write
    }

    /// The 1-based id of the vertex labelled by `term`.
    fn vertex(&mut self, term: &Term) -> Option<usize> {
        let label = match term {
            Term::UriReference { uri } => uri.clone(),
            Term::BlankNode { label } => format!("_:{label}"),
            _ => return None,
        };
        if let Some(id) = self.ids.get(&label) {
            return Some(*id);
        }
        self.labels.push(label.clone());
        let id = self.labels.len();
        self.ids.insert(label, id);
        Some(id)
    }

    fn add(&mut self, s: &Term, o: &Term) {
        self.count += 1;
        if o.is_literal() {
            log::trace!("Pajek writer skips literal {o:?}");
            return;
        }
        let Some(src) = self.vertex(s) else {
            log::warn!("Pajek can not express an arc from {s:?}, skipping");
            return;
        };
        if let Some(dst) = self.vertex(o) {
            self.arcs.insert((src, dst));
        }
    }
}

impl<W> Serializer for PajekSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn write_triple(&mut self, triple: &Triple) -> io::Result<()> {
        self.add(triple.s(), triple.o());
        Ok(())
    }

    fn write_quad(&mut self, quad: &Quad) -> io::Result<()> {
        self.add(quad.s(), quad.o());
        Ok(())
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        log::debug!("Pajek writer ignores comment {text:?}");
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.write, "*Vertices {}", self.labels.len())?;
        for (i, label) in self.labels.iter().enumerate() {
            writeln!(self.write, "{} \"{}\"", i + 1, label.replace('"', "\\\""))?;
        }
        writeln!(self.write, "*Arcs")?;
        for (src, dst) in &self.arcs {
            writeln!(self.write, "{src} {dst}")?;
        }
        self.ids.clear();
        self.labels.clear();
        self.arcs.clear();
        self.write.flush()
    }
}

impl PajekSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        PajekSerializer::new(Vec::new())
    }
}

impl Stringifier for PajekSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t(s: Term, o: Term) -> Triple {
        Triple::new(s, Term::uri("http://example.org/p"), o)
    }

    #[test]
    fn network() -> io::Result<()> {
        let a = Term::uri("http://example.org/a");
        let b = Term::blank_node("b");
        let c = Term::uri("http://example.org/c");
        let mut ser = PajekSerializer::new_stringifier();
        ser.write_triple(&t(a.clone(), b.clone()))?;
        ser.write_triple(&t(b.clone(), c.clone()))?;
        ser.write_triple(&t(a.clone(), b.clone()))?;
        ser.write_triple(&t(c.clone(), Term::plain_literal("c", None)))?;
        ser.write_quad(&Quad::new(
            c,
            Term::uri("http://example.org/q"),
            a,
            Some(Term::uri("http://example.org/g")),
        ))?;
        ser.finish()?;
        assert_eq!(ser.count(), 5);
        assert_eq!(
            ser.as_str(),
            "*Vertices 3\n\
             1 \"http://example.org/a\"\n\
             2 \"_:b\"\n\
             3 \"http://example.org/c\"\n\
             *Arcs\n\
             1 2\n\
             2 3\n\
             3 1\n"
        );
        Ok(())
    }

    #[test]
    fn empty() -> io::Result<()> {
        let mut ser = PajekSerializer::new_stringifier();
        ser.finish()?;
        assert_eq!(ser.as_str(), "*Vertices 0\n*Arcs\n");
        Ok(())
    }

    #[test]
    fn literal_subject() -> io::Result<()> {
        let mut ser = PajekSerializer::new_stringifier();
        ser.write_triple(&t(Term::plain_literal("s", None), Term::uri("tag:o")))?;
        ser.finish()?;
        assert_eq!(ser.as_str(), "*Vertices 0\n*Arcs\n");
        Ok(())
    }
}
