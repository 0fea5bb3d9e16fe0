//! This crate is not usable alone,
//! but contains common code required by
//! [`rdfpp_turtle`](https://docs.rs/rdfpp_turtle/)
//! and
//! [`rdfpp_xml`](https://docs.rs/rdfpp_xml/):
//! conversions between the rdfpp [term model](rdfpp_api::term)
//! and [`rio_api::model`], and adapters for Rio parsers and formatters.

pub mod model;
pub mod parser;
pub mod serializer;
