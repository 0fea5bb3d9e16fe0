//! Serializers for N-Triples and N-Quads.
//!
//! Both write one record per line, terminated by `" .\n"`.
//! The [N-Triples](nt) serializer drops the context of the quads it is given.

pub mod nq;
pub mod nt;

pub use nq::NqSerializer;
pub use nt::{NtConfig, NtSerializer};
