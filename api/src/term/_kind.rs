use crate::InvalidArgument;
use std::fmt;

/// The four kinds of [`Term`](super::Term).
///
/// The numeric codes are stable, and start at 1
/// (0 denotes "no term" in some serialized representations).
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum TermKind {
    /// A URI reference
    UriReference = 1,
    /// A blank node
    BlankNode = 2,
    /// A literal without a datatype
    PlainLiteral = 3,
    /// A literal with a datatype
    TypedLiteral = 4,
}

impl TryFrom<u8> for TermKind {
    type Error = InvalidArgument;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TermKind::UriReference),
            2 => Ok(TermKind::BlankNode),
            3 => Ok(TermKind::PlainLiteral),
            4 => Ok(TermKind::TypedLiteral),
            _ => Err(InvalidArgument::UnknownTermKind(code)),
        }
    }
}

/// The position of a term in a triple or quad.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TermPosition {
    /// First term of a triple
    Subject = 0,
    /// Second term of a triple
    Predicate = 1,
    /// Third term of a triple
    Object = 2,
    /// Fourth (optional) term of a quad, naming its graph
    Context = 3,
}

impl fmt::Display for TermPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermPosition::Subject => "subject",
            TermPosition::Predicate => "predicate",
            TermPosition::Object => "object",
            TermPosition::Context => "context",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(1 => Ok(TermKind::UriReference))]
    #[test_case(2 => Ok(TermKind::BlankNode))]
    #[test_case(3 => Ok(TermKind::PlainLiteral))]
    #[test_case(4 => Ok(TermKind::TypedLiteral))]
    #[test_case(0 => Err(InvalidArgument::UnknownTermKind(0)); "none")]
    #[test_case(5 => Err(InvalidArgument::UnknownTermKind(5)); "out of range")]
    fn from_code(code: u8) -> Result<TermKind, InvalidArgument> {
        TermKind::try_from(code)
    }

    #[test]
    fn code_roundtrip() {
        for kind in [
            TermKind::UriReference,
            TermKind::BlankNode,
            TermKind::PlainLiteral,
            TermKind::TypedLiteral,
        ] {
            assert_eq!(TermKind::try_from(kind as u8), Ok(kind));
        }
    }
}
