//! rdfpp reads and writes RDF in many concrete syntaxes,
//! selected at runtime by their MIME content type.
//!
//! ```
//! use rdfpp::{Reader, Serializer, Writer};
//!
//! let nq = "_:foo <http://example.org/p> \"hi\"@en <http://example.org/g> .\n";
//! let mut reader = Reader::new(nq.as_bytes(), Some("application/n-quads"), None, None)?;
//! let mut out = Vec::new();
//! let mut writer = Writer::new(&mut out, "application/n-triples", None, None)?;
//! writer.begin()?;
//! reader.try_read_quads(|q| writer.write_quad(&q))?;
//! writer.finish()?;
//! drop(writer);
//! assert_eq!(out, b"_:foo <http://example.org/p> \"hi\"@en .\n");
//! # Ok::<(), rdfpp::Error>(())
//! ```
//!
//! The syntax is looked up in the [format registry](format).
//! N-Triples and N-Quads are handled by a native engine;
//! the other syntaxes are provided by optional backends
//! (features `turtle`, `xml` and `json`, all enabled by default).
//! Formats whose backend is missing are still registered,
//! but constructing a reader or writer for them fails with
//! [`Error::BackendUnavailable`].

mod error;
pub use error::*;

pub mod pajek;
pub mod reader;
pub mod writer;

pub use reader::Reader;
pub use writer::Writer;

pub use rdfpp_api::format;
pub use rdfpp_api::parser::AbortHandle;
pub use rdfpp_api::quad::Quad;
pub use rdfpp_api::serializer::{Serializer, Stringifier};
pub use rdfpp_api::term::{Term, TermKind};
pub use rdfpp_api::triple::Triple;
pub use rdfpp_api::InvalidArgument;
