//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) formatters.
//!
//! Rio formatters only accept standard RDF.
//! The functions below skip generalized triples and quads
//! (e.g. with a literal subject), logging a warning for each of them.

use crate::model;
use rdfpp_api::quad::Quad;
use rdfpp_api::triple::Triple;
use rio_api::formatter::{QuadsFormatter, TriplesFormatter};

/// Format `t` using `tf`, unless it is a generalized triple.
///
/// Return whether `t` was actually formatted.
pub fn rio_format_triple<TF>(tf: &mut TF, t: &Triple) -> Result<bool, TF::Error>
where
    TF: TriplesFormatter,
{
    match model::to_triple(t) {
        Some(rt) => {
            tf.format(&rt)?;
            Ok(true)
        }
        None => {
            log::warn!("skipping generalized triple {t:?}");
            Ok(false)
        }
    }
}

/// Format `q` using `qf`, unless it is a generalized quad.
///
/// Return whether `q` was actually formatted.
pub fn rio_format_quad<QF>(qf: &mut QF, q: &Quad) -> Result<bool, QF::Error>
where
    QF: QuadsFormatter,
{
    match model::to_quad(q) {
        Some(rq) => {
            qf.format(&rq)?;
            Ok(true)
        }
        None => {
            log::warn!("skipping generalized quad {q:?}");
            Ok(false)
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use rdfpp_api::term::Term;
    use rio_turtle::{NQuadsFormatter, NTriplesFormatter};

    #[test]
    fn triples() -> std::io::Result<()> {
        let mut buf = Vec::new();
        let mut tf = NTriplesFormatter::new(&mut buf);
        let t1 = Triple::new(Term::uri("x:s"), Term::uri("x:p"), Term::blank_node("o"));
        let t2 = Triple::new(
            Term::plain_literal("s", None),
            Term::uri("x:p"),
            Term::uri("x:o"),
        );
        assert!(rio_format_triple(&mut tf, &t1)?);
        assert!(!rio_format_triple(&mut tf, &t2)?);
        drop(tf);
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "<x:s> <x:p> _:o .\n");
        Ok(())
    }

    #[test]
    fn quads() -> std::io::Result<()> {
        let mut buf = Vec::new();
        let mut qf = NQuadsFormatter::new(&mut buf);
        let q1 = Quad::new(
            Term::uri("x:s"),
            Term::uri("x:p"),
            Term::plain_literal("o", Some("en")),
            Some(Term::uri("x:g")),
        );
        let q2 = Quad::new(
            Term::uri("x:s"),
            Term::uri("x:p"),
            Term::uri("x:o"),
            Some(Term::plain_literal("g", None)),
        );
        assert!(rio_format_quad(&mut qf, &q1)?);
        assert!(!rio_format_quad(&mut qf, &q2)?);
        drop(qf);
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "<x:s> <x:p> \"o\"@en <x:g> .\n");
        Ok(())
    }
}
