//! Adapter for the Turtle parser from [RIO](https://github.com/Tpt/rio/blob/master/turtle/src/turtle.rs)
use oxiri::{Iri, IriParseError};
use rdfpp_api::parser::TripleParser;
use rdfpp_rio::parser::*;
use rio_turtle::TurtleParser as RioTurtleParser;
use std::io::BufRead;

/// Turtle parser based on RIO.
///
/// Also used for N3 documents, as long as they stay within the Turtle subset of N3.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<Iri<String>>,
}

impl TurtleParser {
    /// Construct a [`TurtleParser`] without a base IRI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a [`TurtleParser`] resolving relative IRI-references against `base`.
    pub fn with_base(base: &str) -> Result<Self, IriParseError> {
        Ok(TurtleParser {
            base: Some(Iri::parse(base.to_string())?),
        })
    }
}

impl<B: BufRead> TripleParser<B> for TurtleParser {
    type Source = StrictRioSource<RioTurtleParser<B>>;
    fn parse(&self, data: B) -> Self::Source {
        StrictRioSource(RioTurtleParser::new(data, self.base.clone()))
    }
}

rdfpp_api::def_mod_functions_for_bufread_parser!(TurtleParser, TripleParser);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfpp_api::source::TripleSource;
    use rdfpp_api::term::Term;
    use rdfpp_api::triple::Triple;
    use test_case::test_case;

    const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    #[test]
    fn test_simple_turtle_string() -> Result<(), Box<dyn std::error::Error>> {
        let turtle = r#"
            @prefix : <http://example.org/ns/> .

            <#me> :knows [ a :Person ; :name "Alice" ].
        "#;

        let p = TurtleParser::with_base("http://localhost/ex")?;
        let g = p.parse_str(turtle).collect_triples()?;
        assert_eq!(g.len(), 3);

        let knows = g
            .iter()
            .find(|t| t.p() == &Term::uri("http://example.org/ns/knows"))
            .unwrap();
        assert_eq!(knows.s(), &Term::uri("http://localhost/ex#me"));
        let bnode = knows.o().clone();
        assert!(bnode.is_blank_node());
        assert!(g.contains(&Triple::new(
            bnode.clone(),
            Term::uri(RDF_TYPE),
            Term::uri("http://example.org/ns/Person"),
        )));
        assert!(g.contains(&Triple::new(
            bnode,
            Term::uri("http://example.org/ns/name"),
            Term::plain_literal("Alice", None),
        )));
        Ok(())
    }

    #[test_case(r#"<x:s> <x:p> "chat"@fr ."#, Term::plain_literal("chat", Some("fr")); "language string")]
    #[test_case(r#"<x:s> <x:p> 42 ."#, Term::typed_literal("42", "http://www.w3.org/2001/XMLSchema#integer").unwrap(); "integer")]
    #[test_case(r#"<x:s> <x:p> "a\nb" ."#, Term::plain_literal("a\nb", None); "escaped")]
    fn literals(turtle: &str, expected: Term) -> Result<(), Box<dyn std::error::Error>> {
        let g = parse_str(turtle).collect_triples()?;
        assert_eq!(g.len(), 1);
        assert_eq!(g[0].o(), &expected);
        Ok(())
    }

    #[test]
    fn invalid_base() {
        assert!(TurtleParser::with_base("not an absolute IRI").is_err());
    }

    #[test]
    fn syntax_error() {
        let err = parse_str("<x:s> <x:p> .").collect_triples().unwrap_err();
        assert!(matches!(err, RioSourceError::Parser(_)));
    }
}
