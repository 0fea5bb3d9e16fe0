//! Parsers for N-Triples and N-Quads.
//!
//! Both parsers share the same line-oriented engine;
//! they only differ by the number of terms they accept in a statement:
//! exactly 3 for [N-Triples](nt), 3 or 4 for [N-Quads](nq).
//!
//! Terms are *generalized*: any kind of term is accepted in any position.

mod _common;
mod _error;
pub use _error::*;

pub mod nq;
pub mod nt;

pub use nq::NQuadsParser;
pub use nt::NTriplesParser;
