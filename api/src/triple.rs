//! I define the [`Triple`] type.
use crate::quad::Quad;
use crate::term::{Term, TermPosition};
use crate::InvalidArgument;

/// An RDF triple: a subject, a predicate and an object.
///
/// A triple owns its three terms.
/// No constraint is put on the kind of each term
/// (generalized triples, e.g. with a literal subject, are representable);
/// it is up to each serializer to reject or skip what its syntax can not express.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple {
    /// The subject
    pub subject: Term,
    /// The predicate
    pub predicate: Term,
    /// The object
    pub object: Term,
}

impl Triple {
    /// Build a triple, taking ownership of the given terms.
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Triple {
            subject,
            predicate,
            object,
        }
    }

    /// Build a triple by cloning the given terms.
    pub fn from_refs(subject: &Term, predicate: &Term, object: &Term) -> Self {
        Triple::new(subject.clone(), predicate.clone(), object.clone())
    }

    /// Build a triple from terms that may be missing.
    ///
    /// # Errors
    /// [`InvalidArgument::MissingTerm`] naming the first missing position.
    pub fn try_from_terms(
        subject: Option<Term>,
        predicate: Option<Term>,
        object: Option<Term>,
    ) -> Result<Self, InvalidArgument> {
        use TermPosition::*;
        Ok(Triple::new(
            subject.ok_or(InvalidArgument::MissingTerm(Subject))?,
            predicate.ok_or(InvalidArgument::MissingTerm(Predicate))?,
            object.ok_or(InvalidArgument::MissingTerm(Object))?,
        ))
    }

    /// The subject of this triple.
    #[inline]
    pub fn s(&self) -> &Term {
        &self.subject
    }

    /// The predicate of this triple.
    #[inline]
    pub fn p(&self) -> &Term {
        &self.predicate
    }

    /// The object of this triple.
    #[inline]
    pub fn o(&self) -> &Term {
        &self.object
    }

    /// The three terms of this triple, in order.
    pub fn terms(&self) -> [&Term; 3] {
        [&self.subject, &self.predicate, &self.object]
    }

    /// Consume this triple into its three terms.
    pub fn into_terms(self) -> [Term; 3] {
        [self.subject, self.predicate, self.object]
    }

    /// Consume this triple into a quad with the given context.
    pub fn into_quad(self, context: Option<Term>) -> Quad {
        Quad::from_triple(self, context)
    }
}

impl From<[Term; 3]> for Triple {
    fn from([subject, predicate, object]: [Term; 3]) -> Self {
        Triple::new(subject, predicate, object)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn spo() -> [Term; 3] {
        [
            Term::blank_node("s"),
            Term::uri("http://example.org/p"),
            Term::plain_literal("o", Some("en")),
        ]
    }

    #[test]
    fn new_and_accessors() {
        let [s, p, o] = spo();
        let t = Triple::new(s.clone(), p.clone(), o.clone());
        assert_eq!(t.s(), &s);
        assert_eq!(t.p(), &p);
        assert_eq!(t.o(), &o);
        assert_eq!(t.terms(), [&s, &p, &o]);
    }

    #[test]
    fn from_refs_clones() {
        let [s, p, o] = spo();
        let t = Triple::from_refs(&s, &p, &o);
        assert_eq!(t, Triple::from(spo()));
        // the originals are still usable
        assert!(s.is_blank_node());
    }

    #[test]
    fn try_from_terms() {
        let [s, p, o] = spo();
        assert_eq!(
            Triple::try_from_terms(Some(s.clone()), None, Some(o.clone())),
            Err(InvalidArgument::MissingTerm(TermPosition::Predicate))
        );
        assert_eq!(
            Triple::try_from_terms(Some(s), Some(p), Some(o)),
            Ok(Triple::from(spo()))
        );
    }

    #[test]
    fn into_quad() {
        let q = Triple::from(spo()).into_quad(None);
        assert_eq!(q.context(), None);
        assert_eq!(q.into_triple(), Triple::from(spo()));
    }
}
