//! Parser for [RDF/JSON].
//!
//! The whole document is read and checked on the first pull;
//! triples are then produced subject by subject, in the order of the document keys.
//!
//! [RDF/JSON]: https://www.w3.org/TR/rdf-json/

use crate::model::{term_from_key, Document};
use rdfpp_api::parser::TripleParser;
use rdfpp_api::source::{StreamResult, TripleSource};
use rdfpp_api::term::Term;
use rdfpp_api::triple::Triple;
use std::io::BufRead;
use std::mem;

pub use crate::model::ObjectError;

/// RDF/JSON parser.
#[derive(Clone, Debug, Default)]
pub struct RdfJsonParser {}

impl RdfJsonParser {
    /// Construct an [`RdfJsonParser`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: BufRead> TripleParser<B> for RdfJsonParser {
    type Source = RdfJsonSource<B>;

    fn parse(&self, data: B) -> Self::Source {
        RdfJsonSource {
            state: State::Unread(data),
        }
    }
}

rdfpp_api::def_mod_functions_for_bufread_parser!(RdfJsonParser, TripleParser);

/// Error raised by [`RdfJsonSource`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a JSON object of objects of arrays of term objects
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A term object that does not denote a valid term
    #[error("invalid object of <{subject}> <{predicate}>: {source}")]
    Object {
        /// The subject key
        subject: String,
        /// The predicate key
        predicate: String,
        /// What is wrong with the object
        source: ObjectError,
    },
}

impl Error {
    /// The (1-based) line and column of a JSON syntax error.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::Json(err) if err.line() > 0 => Some((err.line(), err.column())),
            _ => None,
        }
    }
}

/// [`TripleSource`] returned by [`RdfJsonParser`].
pub struct RdfJsonSource<B> {
    state: State<B>,
}

enum State<B> {
    Unread(B),
    Loaded(std::vec::IntoIter<Result<Triple, Error>>),
}

impl<B: BufRead> RdfJsonSource<B> {
    fn load(&mut self) {
        let empty = State::Loaded(Vec::new().into_iter());
        if let State::Unread(input) = mem::replace(&mut self.state, empty) {
            let records = match serde_json::from_reader::<_, Document>(input) {
                Ok(doc) => triples(doc),
                Err(err) => vec![Err(err.into())],
            };
            log::trace!("RDF/JSON document loaded ({} records)", records.len());
            self.state = State::Loaded(records.into_iter());
        }
    }
}

/// The triples of `doc`, up to and including the first invalid object.
fn triples(doc: Document) -> Vec<Result<Triple, Error>> {
    let mut ret = vec![];
    for (subject, predicates) in doc {
        let s = term_from_key(&subject);
        for (predicate, objects) in predicates {
            let p = Term::uri(predicate.as_str());
            for object in objects {
                match object.into_term() {
                    Ok(o) => ret.push(Ok(Triple::new(s.clone(), p.clone(), o))),
                    Err(source) => {
                        ret.push(Err(Error::Object {
                            subject,
                            predicate,
                            source,
                        }));
                        return ret;
                    }
                }
            }
        }
    }
    ret
}

impl<B: BufRead> TripleSource for RdfJsonSource<B> {
    type Error = Error;

    fn try_for_some_triple<E, F>(&mut self, f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: std::error::Error,
        F: FnMut(Triple) -> Result<(), E>,
    {
        if let State::Unread(_) = self.state {
            self.load();
        }
        match &mut self.state {
            State::Loaded(records) => records.try_for_some_triple(f),
            State::Unread(_) => Ok(false),
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
