//! Parsers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`](https://docs.rs/rio_turtle/).

pub mod trig;
pub mod turtle;

pub use trig::TriGParser;
pub use turtle::TurtleParser;

/// The error type of the parsers of this module.
pub type TurtleSourceError = rdfpp_rio::parser::RioSourceError<rio_turtle::TurtleError>;
