//! Serializers for the Turtle-family of RDF concrete syntaxes,
//! based on [`rio_turtle`].

pub mod turtle;

pub use turtle::{TurtleConfig, TurtleSerializer};
