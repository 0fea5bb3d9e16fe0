use rdfpp_api::term::Term;
use rdfpp_api::InvalidArgument;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// subject -> predicate -> objects
pub(crate) type Document = BTreeMap<String, BTreeMap<String, Vec<Object>>>;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum Object {
    Uri {
        value: String,
    },
    Bnode {
        value: String,
    },
    Literal {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        datatype: Option<String>,
    },
}

impl Object {
    pub(crate) fn into_term(self) -> Result<Term, ObjectError> {
        match self {
            Object::Uri { value } => Ok(Term::uri(value)),
            Object::Bnode { value } => Ok(bnode_from_key(&value)),
            Object::Literal {
                value,
                lang: Some(_),
                datatype: Some(_),
            } => Err(ObjectError::LangAndDatatype(value)),
            Object::Literal {
                value,
                lang,
                datatype: None,
            } => Ok(Term::plain_literal(value, lang.as_deref())),
            Object::Literal {
                value,
                datatype: Some(datatype),
                ..
            } => Ok(Term::typed_literal(value, datatype)?),
        }
    }
}

impl From<&Term> for Object {
    fn from(term: &Term) -> Self {
        match term {
            Term::UriReference { uri } => Object::Uri { value: uri.clone() },
            Term::BlankNode { label } => Object::Bnode {
                value: format!("_:{label}"),
            },
            Term::PlainLiteral {
                lexical_form,
                language_tag,
            } => Object::Literal {
                value: lexical_form.clone(),
                lang: language_tag.clone(),
                datatype: None,
            },
            Term::TypedLiteral {
                lexical_form,
                datatype_uri,
            } => Object::Literal {
                value: lexical_form.clone(),
                lang: None,
                datatype: Some(datatype_uri.clone()),
            },
        }
    }
}

/// An object that does not denote a valid term.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// A literal with both `lang` and `datatype`
    #[error("literal {0:?} has both a language tag and a datatype")]
    LangAndDatatype(String),
    /// A literal with an empty `datatype`
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// Subject keys and `bnode` values start with `_:`, anything else is a URI.
pub(crate) fn term_from_key(key: &str) -> Term {
    if key.starts_with("_:") {
        bnode_from_key(key)
    } else {
        Term::uri(key)
    }
}

fn bnode_from_key(key: &str) -> Term {
    Term::blank_node(key.strip_prefix("_:").unwrap_or(key))
}

/// The key of `term` as a subject, if it can be one.
pub(crate) fn subject_key(term: &Term) -> Option<String> {
    match term {
        Term::UriReference { uri } => Some(uri.clone()),
        Term::BlankNode { label } => Some(format!("_:{label}")),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"{"type": "uri", "value": "tag:u"}"#, Term::uri("tag:u"); "uri")]
    #[test_case(r#"{"type": "bnode", "value": "_:b1"}"#, Term::blank_node("b1"); "bnode")]
    #[test_case(r#"{"type": "bnode", "value": "b1"}"#, Term::blank_node("b1"); "bnode without prefix")]
    #[test_case(r#"{"type": "literal", "value": "simple"}"#, Term::plain_literal("simple", None); "simple literal")]
    #[test_case(r#"{"type": "literal", "value": "chat", "lang": "fr"}"#, Term::plain_literal("chat", Some("fr")); "language literal")]
    #[test_case(r#"{"type": "literal", "value": "1", "datatype": "tag:d"}"#, Term::typed_literal("1", "tag:d").unwrap(); "typed literal")]
    fn object(src: &str, exp: Term) {
        let got: Object = serde_json::from_str(src).unwrap();
        assert_eq!(got.clone().into_term().unwrap(), exp);
        assert_eq!(Object::from(&exp).into_term().unwrap(), exp);
    }

    #[test]
    fn lang_and_datatype() {
        let src = r#"{"type": "literal", "value": "x", "lang": "en", "datatype": "tag:d"}"#;
        let got: Object = serde_json::from_str(src).unwrap();
        assert!(matches!(
            got.into_term(),
            Err(ObjectError::LangAndDatatype(v)) if v == "x"
        ));
    }

    #[test]
    fn empty_datatype() {
        let src = r#"{"type": "literal", "value": "x", "datatype": ""}"#;
        let got: Object = serde_json::from_str(src).unwrap();
        assert!(matches!(
            got.into_term(),
            Err(ObjectError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_type() {
        let src = r#"{"type": "triple", "value": "x"}"#;
        assert!(serde_json::from_str::<Object>(src).is_err());
    }

    #[test]
    fn serialize() {
        let o = Object::from(&Term::plain_literal("hi", Some("en")));
        assert_eq!(
            serde_json::to_string(&o).unwrap(),
            r#"{"type":"literal","value":"hi","lang":"en"}"#
        );
        let o = Object::from(&Term::blank_node("b"));
        assert_eq!(
            serde_json::to_string(&o).unwrap(),
            r#"{"type":"bnode","value":"_:b"}"#
        );
    }

    #[test]
    fn keys() {
        assert_eq!(term_from_key("_:x"), Term::blank_node("x"));
        assert_eq!(term_from_key("http://a/"), Term::uri("http://a/"));
        assert_eq!(subject_key(&Term::blank_node("x")).as_deref(), Some("_:x"));
        assert_eq!(subject_key(&Term::plain_literal("x", None)), None);
    }
}
