//! I define [`ToQuads`] and [`ToTriples`],
//! the result type of [`TripleSource::to_quads`] and [`QuadSource::to_triples`] respectively.

use super::{QuadSource, StreamResult, TripleSource};
use crate::quad::Quad;
use crate::triple::Triple;
use crate::Error;

/// The result type of [`TripleSource::to_quads`].
pub struct ToQuads<TS>(pub(super) TS);

impl<TS: TripleSource> QuadSource for ToQuads<TS> {
    type Error = TS::Error;

    fn try_for_some_quad<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Quad) -> Result<(), E>,
    {
        self.0.try_for_some_triple(|t| f(Quad::from(t)))
    }
}

/// The result type of [`QuadSource::to_triples`].
pub struct ToTriples<QS>(pub(super) QS);

impl<QS: QuadSource> TripleSource for ToTriples<QS> {
    type Error = QS::Error;

    fn try_for_some_triple<E, F>(&mut self, mut f: F) -> StreamResult<bool, Self::Error, E>
    where
        E: Error,
        F: FnMut(Triple) -> Result<(), E>,
    {
        self.0.try_for_some_quad(|q| f(q.into_triple()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::Term;
    use std::convert::Infallible;

    fn quad(g: Option<&str>) -> Quad {
        Quad::new(
            Term::blank_node("s"),
            Term::uri("tag:p"),
            Term::blank_node("o"),
            g.map(Term::uri),
        )
    }

    #[test]
    fn ts_to_quads() {
        let quads = vec![quad(None).into_triple()]
            .into_iter()
            .map(Ok::<_, Infallible>)
            .to_quads()
            .collect_quads()
            .unwrap();
        assert_eq!(quads, vec![quad(None)]);
    }

    #[test]
    fn qs_to_triples() {
        let triples = vec![quad(Some("tag:g")), quad(None)]
            .into_iter()
            .map(Ok::<_, Infallible>)
            .to_triples()
            .collect_triples()
            .unwrap();
        assert_eq!(triples, vec![quad(None).into_triple(); 2]);
    }
}
