//! I define the [`Quad`] type.
use crate::term::{Term, TermPosition};
use crate::triple::Triple;
use crate::InvalidArgument;

/// An RDF quad: a triple, plus an optional context naming its graph.
///
/// A quad without a context belongs to the default graph.
/// Note that this is *not* the same as a quad whose context is some IRI
/// that a given syntax uses to denote the default graph.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quad {
    /// The subject
    pub subject: Term,
    /// The predicate
    pub predicate: Term,
    /// The object
    pub object: Term,
    /// The graph name, or `None` for the default graph
    pub context: Option<Term>,
}

impl Quad {
    /// Build a quad, taking ownership of the given terms.
    pub fn new(subject: Term, predicate: Term, object: Term, context: Option<Term>) -> Self {
        Quad {
            subject,
            predicate,
            object,
            context,
        }
    }

    /// Build a quad by cloning the given terms.
    pub fn from_refs(
        subject: &Term,
        predicate: &Term,
        object: &Term,
        context: Option<&Term>,
    ) -> Self {
        Quad::new(
            subject.clone(),
            predicate.clone(),
            object.clone(),
            context.cloned(),
        )
    }

    /// Build a quad from terms that may be missing (only the context is optional).
    ///
    /// # Errors
    /// [`InvalidArgument::MissingTerm`] naming the first missing position.
    pub fn try_from_terms(
        subject: Option<Term>,
        predicate: Option<Term>,
        object: Option<Term>,
        context: Option<Term>,
    ) -> Result<Self, InvalidArgument> {
        Triple::try_from_terms(subject, predicate, object).map(|t| Quad::from_triple(t, context))
    }

    /// Build a quad from a triple and a context.
    pub fn from_triple(triple: Triple, context: Option<Term>) -> Self {
        let Triple {
            subject,
            predicate,
            object,
        } = triple;
        Quad::new(subject, predicate, object, context)
    }

    /// The subject of this quad.
    #[inline]
    pub fn s(&self) -> &Term {
        &self.subject
    }

    /// The predicate of this quad.
    #[inline]
    pub fn p(&self) -> &Term {
        &self.predicate
    }

    /// The object of this quad.
    #[inline]
    pub fn o(&self) -> &Term {
        &self.object
    }

    /// The context of this quad, `None` meaning the default graph.
    #[inline]
    pub fn context(&self) -> Option<&Term> {
        self.context.as_ref()
    }

    /// The term at the given position, if any.
    pub fn get(&self, position: TermPosition) -> Option<&Term> {
        match position {
            TermPosition::Subject => Some(&self.subject),
            TermPosition::Predicate => Some(&self.predicate),
            TermPosition::Object => Some(&self.object),
            TermPosition::Context => self.context.as_ref(),
        }
    }

    /// A copy of the triple part of this quad.
    pub fn triple(&self) -> Triple {
        Triple::from_refs(&self.subject, &self.predicate, &self.object)
    }

    /// Consume this quad, dropping its context.
    pub fn into_triple(self) -> Triple {
        Triple::new(self.subject, self.predicate, self.object)
    }

    /// Consume this quad into its triple and context.
    pub fn into_parts(self) -> (Triple, Option<Term>) {
        let context = self.context;
        (Triple::new(self.subject, self.predicate, self.object), context)
    }
}

impl From<Triple> for Quad {
    fn from(triple: Triple) -> Self {
        Quad::from_triple(triple, None)
    }
}
