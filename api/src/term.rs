//! I define how RDF terms
//! (such as [URI references](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in rdfpp.
//!
//! I provide the closed sum type [`Term`],
//! and a number of auxiliary types, such as [`TermKind`] and [`TermPosition`].
use crate::InvalidArgument;

mod _kind;
pub use _kind::*;

pub mod bnode_gen;
pub mod bnode_id;

pub use bnode_gen::BnodeGenerator;

/// An RDF term.
///
/// Equality, ordering and hashing are structural:
/// two terms are equal iff they have the same kind and the same field values.
///
/// The strings held by a term are stored verbatim;
/// in particular, URI references are not validated nor resolved.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Term {
    /// A URI reference (absolute or relative IRI)
    UriReference {
        /// The text of the URI reference
        uri: String,
    },
    /// A blank node, identified by a label that is only meaningful in its document
    BlankNode {
        /// The label, without the leading `_:`
        label: String,
    },
    /// A literal without a datatype, possibly with a language tag
    PlainLiteral {
        /// The lexical form
        lexical_form: String,
        /// The language tag, never empty when present
        language_tag: Option<String>,
    },
    /// A literal with a datatype
    TypedLiteral {
        /// The lexical form
        lexical_form: String,
        /// The datatype URI, never empty
        datatype_uri: String,
    },
}

impl Term {
    /// Build a term of the given `kind`.
    ///
    /// * `text` is the URI, label or lexical form, depending on `kind`;
    ///   an empty blank node label is replaced by a [fresh](Term::fresh_blank_node) one;
    /// * `language_tag` is only used for plain literals, an empty tag meaning no tag;
    /// * `datatype_uri` is only used for typed literals, and is then required.
    pub fn create(
        kind: TermKind,
        text: &str,
        language_tag: Option<&str>,
        datatype_uri: Option<&str>,
    ) -> Result<Term, InvalidArgument> {
        match kind {
            TermKind::UriReference => Ok(Term::uri(text)),
            TermKind::BlankNode if text.is_empty() => Ok(Term::fresh_blank_node()),
            TermKind::BlankNode => Ok(Term::blank_node(text)),
            TermKind::PlainLiteral => Ok(Term::plain_literal(text, language_tag)),
            TermKind::TypedLiteral => Term::typed_literal(text, datatype_uri.unwrap_or_default()),
        }
    }

    /// Build a URI reference.
    pub fn uri<T: Into<String>>(uri: T) -> Term {
        Term::UriReference { uri: uri.into() }
    }

    /// Build a blank node with the given label.
    pub fn blank_node<T: Into<String>>(label: T) -> Term {
        Term::BlankNode {
            label: label.into(),
        }
    }

    /// Build a blank node with a label that is unique in this process.
    ///
    /// See [`bnode_gen::fresh_label`] for the shape of the label.
    pub fn fresh_blank_node() -> Term {
        Term::BlankNode {
            label: bnode_gen::fresh_label(),
        }
    }

    /// Build a plain literal.
    ///
    /// An empty `language_tag` is treated as no language tag.
    pub fn plain_literal<T: Into<String>>(lexical_form: T, language_tag: Option<&str>) -> Term {
        Term::PlainLiteral {
            lexical_form: lexical_form.into(),
            language_tag: language_tag.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    /// Build a typed literal.
    ///
    /// # Errors
    /// [`InvalidArgument::EmptyDatatype`] if `datatype_uri` is empty.
    pub fn typed_literal<T, U>(lexical_form: T, datatype_uri: U) -> Result<Term, InvalidArgument>
    where
        T: Into<String>,
        U: Into<String>,
    {
        let datatype_uri = datatype_uri.into();
        if datatype_uri.is_empty() {
            return Err(InvalidArgument::EmptyDatatype);
        }
        Ok(Term::TypedLiteral {
            lexical_form: lexical_form.into(),
            datatype_uri,
        })
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::UriReference { .. } => TermKind::UriReference,
            Term::BlankNode { .. } => TermKind::BlankNode,
            Term::PlainLiteral { .. } => TermKind::PlainLiteral,
            Term::TypedLiteral { .. } => TermKind::TypedLiteral,
        }
    }

    /// The main string of this term:
    /// the URI of a URI reference, the label of a blank node,
    /// or the lexical form of a literal.
    pub fn value(&self) -> &str {
        match self {
            Term::UriReference { uri } => uri,
            Term::BlankNode { label } => label,
            Term::PlainLiteral { lexical_form, .. } | Term::TypedLiteral { lexical_form, .. } => {
                lexical_form
            }
        }
    }

    /// The language tag of this term, if it is a language-tagged plain literal.
    pub fn language_tag(&self) -> Option<&str> {
        match self {
            Term::PlainLiteral { language_tag, .. } => language_tag.as_deref(),
            _ => None,
        }
    }

    /// The datatype of this term, if it is a typed literal.
    pub fn datatype_uri(&self) -> Option<&str> {
        match self {
            Term::TypedLiteral { datatype_uri, .. } => Some(datatype_uri),
            _ => None,
        }
    }

    /// Whether this term is a URI reference.
    #[inline]
    pub fn is_uri_reference(&self) -> bool {
        matches!(self, Term::UriReference { .. })
    }

    /// Whether this term is a blank node.
    #[inline]
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode { .. })
    }

    /// Whether this term is a plain literal.
    #[inline]
    pub fn is_plain_literal(&self) -> bool {
        matches!(self, Term::PlainLiteral { .. })
    }

    /// Whether this term is a typed literal.
    #[inline]
    pub fn is_typed_literal(&self) -> bool {
        matches!(self, Term::TypedLiteral { .. })
    }

    /// Whether this term is a literal, plain or typed.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.is_plain_literal() || self.is_typed_literal()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    #[test]
    fn uri_reference() {
        let t = Term::uri("http://example.org/");
        assert_eq!(t.kind(), TermKind::UriReference);
        assert_eq!(t.value(), "http://example.org/");
        assert!(t.is_uri_reference());
        assert!(!t.is_literal());
    }

    #[test]
    fn blank_node() {
        let t = Term::blank_node("foobar");
        assert_eq!(t.kind(), TermKind::BlankNode);
        assert_eq!(t.value(), "foobar");
        assert!(t.is_blank_node());
    }

    #[test]
    fn plain_literal_with_language_tag() {
        let t = Term::plain_literal("Hello, world!", Some("en-US"));
        assert!(t.is_plain_literal());
        assert!(t.is_literal());
        assert_eq!(t.value(), "Hello, world!");
        assert_eq!(t.language_tag(), Some("en-US"));
        assert_eq!(t.datatype_uri(), None);
    }

    #[test]
    fn empty_language_tag_means_none() {
        assert_eq!(
            Term::plain_literal("chat", Some("")),
            Term::plain_literal("chat", None)
        );
    }

    #[test]
    fn typed_literal() -> Result<(), InvalidArgument> {
        let t = Term::typed_literal("3.1415", XSD_DOUBLE)?;
        assert!(t.is_typed_literal());
        assert!(t.is_literal());
        assert_eq!(t.value(), "3.1415");
        assert_eq!(t.datatype_uri(), Some(XSD_DOUBLE));
        Ok(())
    }

    #[test]
    fn typed_literal_requires_datatype() {
        assert_eq!(
            Term::typed_literal("3.1415", ""),
            Err(InvalidArgument::EmptyDatatype)
        );
        assert_eq!(
            Term::create(TermKind::TypedLiteral, "3.1415", None, None),
            Err(InvalidArgument::EmptyDatatype)
        );
    }

    #[test_case(TermKind::UriReference, "tag:x", None, None => Term::uri("tag:x"))]
    #[test_case(TermKind::BlankNode, "b1", None, None => Term::blank_node("b1"))]
    #[test_case(TermKind::PlainLiteral, "chat", Some("fr"), None => Term::plain_literal("chat", Some("fr")))]
    #[test_case(TermKind::PlainLiteral, "chat", None, Some("tag:ignored") => Term::plain_literal("chat", None))]
    #[test_case(TermKind::TypedLiteral, "1", Some("en"), Some("tag:dt") => Term::TypedLiteral { lexical_form: "1".into(), datatype_uri: "tag:dt".into() })]
    fn create(kind: TermKind, text: &str, lang: Option<&str>, dt: Option<&str>) -> Term {
        Term::create(kind, text, lang, dt).unwrap()
    }

    #[test]
    fn create_blank_node_without_label() {
        let t = Term::create(TermKind::BlankNode, "", None, None).unwrap();
        assert!(t.is_blank_node());
        assert!(!t.value().is_empty());
    }

    #[test]
    fn clone_is_deep_and_equal() {
        let t1 = Term::plain_literal("Hello", Some("en"));
        let mut t2 = t1.clone();
        assert_eq!(t1, t2);
        if let Term::PlainLiteral { lexical_form, .. } = &mut t2 {
            lexical_form.push('!');
        }
        assert_ne!(t1, t2);
        assert_eq!(t1.value(), "Hello");
    }

    #[test]
    fn equality_is_structural() {
        assert_ne!(Term::uri("x"), Term::blank_node("x"));
        assert_ne!(
            Term::plain_literal("x", None),
            Term::typed_literal("x", "tag:string").unwrap()
        );
        assert_ne!(
            Term::plain_literal("x", Some("en")),
            Term::plain_literal("x", Some("fr"))
        );
    }

    #[test]
    fn fresh_blank_nodes_are_unique() {
        let labels: HashSet<String> = (0..10_000)
            .map(|_| Term::fresh_blank_node().value().to_string())
            .collect();
        assert_eq!(labels.len(), 10_000);
    }
}
