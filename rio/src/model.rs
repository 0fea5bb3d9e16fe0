//! Conversions between [`rio_api::model`] and the rdfpp term model.
//!
//! Rio types borrow their text, while rdfpp terms own it:
//! converting from Rio allocates, converting to Rio borrows from the rdfpp term.
//!
//! The two models do not cover exactly the same ground:
//! * Rio supports RDF-star quoted triples, which have no rdfpp counterpart;
//!   converting one fails with [`QuotedTriple`];
//! * rdfpp supports generalized triples (e.g. with a literal subject),
//!   which standard Rio formatters can not express;
//!   converting one to Rio yields `None`.
use rdfpp_api::quad::Quad;
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use rio_api::model::{
    BlankNode, GraphName, Literal, NamedNode, Quad as RioQuad, Subject, Term as RioTerm,
    Triple as RioTriple,
};

/// The error raised when a Rio parser produces an RDF-star quoted triple.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
#[error("quoted triples are not supported")]
pub struct QuotedTriple;

/// Convert a Rio named node into a URI reference.
pub fn from_named_node(n: NamedNode) -> Term {
    Term::uri(n.iri)
}

/// Convert a Rio blank node into a blank node.
pub fn from_blank_node(b: BlankNode) -> Term {
    Term::blank_node(b.id)
}

/// Convert a Rio literal into a plain or typed literal.
pub fn from_literal(l: Literal) -> Term {
    match l {
        Literal::Simple { value } => Term::plain_literal(value, None),
        Literal::LanguageTaggedString { value, language } => {
            Term::plain_literal(value, Some(language))
        }
        Literal::Typed { value, datatype } => Term::TypedLiteral {
            lexical_form: value.to_string(),
            datatype_uri: datatype.iri.to_string(),
        },
    }
}

/// Convert a Rio subject.
pub fn from_subject(s: Subject) -> Result<Term, QuotedTriple> {
    match s {
        Subject::NamedNode(n) => Ok(from_named_node(n)),
        Subject::BlankNode(b) => Ok(from_blank_node(b)),
        Subject::Triple(_) => Err(QuotedTriple),
    }
}

/// Convert a Rio term.
pub fn from_term(t: RioTerm) -> Result<Term, QuotedTriple> {
    match t {
        RioTerm::NamedNode(n) => Ok(from_named_node(n)),
        RioTerm::BlankNode(b) => Ok(from_blank_node(b)),
        RioTerm::Literal(l) => Ok(from_literal(l)),
        RioTerm::Triple(_) => Err(QuotedTriple),
    }
}

/// Convert a Rio graph name.
pub fn from_graph_name(g: GraphName) -> Term {
    match g {
        GraphName::NamedNode(n) => from_named_node(n),
        GraphName::BlankNode(b) => from_blank_node(b),
    }
}

/// Convert a Rio triple.
pub fn from_triple(t: RioTriple) -> Result<Triple, QuotedTriple> {
    Ok(Triple::new(
        from_subject(t.subject)?,
        from_named_node(t.predicate),
        from_term(t.object)?,
    ))
}

/// Convert a Rio quad.
pub fn from_quad(q: RioQuad) -> Result<Quad, QuotedTriple> {
    Ok(Quad::new(
        from_subject(q.subject)?,
        from_named_node(q.predicate),
        from_term(q.object)?,
        q.graph_name.map(from_graph_name),
    ))
}

/// View `t` as a Rio named node, if it is a URI reference.
pub fn to_named_node(t: &Term) -> Option<NamedNode<'_>> {
    match t {
        Term::UriReference { uri } => Some(NamedNode { iri: uri }),
        _ => None,
    }
}

/// View `t` as a Rio subject, if it is a URI reference or a blank node.
pub fn to_subject(t: &Term) -> Option<Subject<'_>> {
    match t {
        Term::UriReference { uri } => Some(NamedNode { iri: uri }.into()),
        Term::BlankNode { label } => Some(BlankNode { id: label }.into()),
        _ => None,
    }
}

/// View `t` as a Rio graph name, if it is a URI reference or a blank node.
pub fn to_graph_name(t: &Term) -> Option<GraphName<'_>> {
    match t {
        Term::UriReference { uri } => Some(NamedNode { iri: uri }.into()),
        Term::BlankNode { label } => Some(BlankNode { id: label }.into()),
        _ => None,
    }
}

/// View `t` as a Rio term. Every rdfpp term has a Rio counterpart.
pub fn to_term(t: &Term) -> RioTerm<'_> {
    match t {
        Term::UriReference { uri } => NamedNode { iri: uri }.into(),
        Term::BlankNode { label } => BlankNode { id: label }.into(),
        Term::PlainLiteral {
            lexical_form,
            language_tag: None,
        } => Literal::Simple {
            value: lexical_form,
        }
        .into(),
        Term::PlainLiteral {
            lexical_form,
            language_tag: Some(tag),
        } => Literal::LanguageTaggedString {
            value: lexical_form,
            language: tag,
        }
        .into(),
        Term::TypedLiteral {
            lexical_form,
            datatype_uri,
        } => Literal::Typed {
            value: lexical_form,
            datatype: NamedNode { iri: datatype_uri },
        }
        .into(),
    }
}

/// View `t` as a standard Rio triple.
///
/// Return `None` if `t` is a generalized triple.
pub fn to_triple(t: &Triple) -> Option<RioTriple<'_>> {
    Some(RioTriple {
        subject: to_subject(t.s())?,
        predicate: to_named_node(t.p())?,
        object: to_term(t.o()),
    })
}

/// View `q` as a standard Rio quad.
///
/// Return `None` if `q` is a generalized quad.
pub fn to_quad(q: &Quad) -> Option<RioQuad<'_>> {
    let graph_name = match q.context() {
        None => None,
        Some(g) => Some(to_graph_name(g)?),
    };
    Some(RioQuad {
        subject: to_subject(q.s())?,
        predicate: to_named_node(q.p())?,
        object: to_term(q.o()),
        graph_name,
    })
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
