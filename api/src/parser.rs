//! API for parsing RDF syntaxes.
//!
//! A parser is a value holding its options;
//! it turns some input into a [`TripleSource`] or a [`QuadSource`].
//! The same parser can be used any number of times.

use crate::source::{QuadSource, TripleSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A parser takes some data of type `T`,
/// and returns a [`TripleSource`].
pub trait TripleParser<T> {
    /// The source produced by this parser
    type Source: TripleSource;

    /// Parses data into a triple source.
    fn parse(&self, data: T) -> Self::Source;

    /// Convenient shortcut method for parsing strings.
    ///
    /// It is automatically supported for parsers of `&[u8]`.
    fn parse_str<'t>(&self, txt: &'t str) -> Self::Source
    where
        &'t str: IntoParsable<Target = T>,
    {
        self.parse(txt.into_parsable())
    }
}

/// A parser takes some data of type `T`,
/// and returns a [`QuadSource`].
pub trait QuadParser<T> {
    /// The source produced by this parser
    type Source: QuadSource;

    /// Parses data into a quad source.
    fn parse(&self, data: T) -> Self::Source;

    /// Convenient shortcut method for parsing strings.
    ///
    /// It is automatically supported for parsers of `&[u8]`.
    fn parse_str<'t>(&self, txt: &'t str) -> Self::Source
    where
        &'t str: IntoParsable<Target = T>,
    {
        self.parse(txt.into_parsable())
    }
}

/// Utility trait to support [`TripleParser::parse_str`] and [`QuadParser::parse_str`].
pub trait IntoParsable {
    /// The parsable type this type can be converted to.
    type Target;
    /// Convert into the parsable target type
    fn into_parsable(self) -> Self::Target;
}
impl<'a> IntoParsable for &'a str {
    type Target = &'a [u8];
    fn into_parsable(self) -> Self::Target {
        self.as_bytes()
    }
}

/// A cooperative stop signal, shared between a source and whoever wants to stop it.
///
/// Sources check the flag between records (typically before reading a new line),
/// so an in-progress blocking read is never interrupted.
/// Once aborted, a source behaves as if its input was exhausted.
#[derive(Clone, Debug, Default)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    /// A fresh, non-aborted handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every source sharing this handle to stop at its next checkpoint.
    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether [`abort`](AbortHandle::abort) has been called on this handle or a clone of it.
    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Define convenience module-level functions for a parser implementation supporting BufRead.
#[macro_export]
macro_rules! def_mod_functions_for_bufread_parser {
    ($parser_type: ident, $parser_trait: ident) => {
        /// Convenience function for parsing a BufRead with the default parser.
        pub fn parse_bufread<B: std::io::BufRead>(
            bufread: B,
        ) -> <$parser_type as $crate::parser::$parser_trait<B>>::Source {
            $parser_type::default().parse(bufread)
        }

        /// Convenience function for parsing a str with the default parser.
        pub fn parse_str(
            txt: &str,
        ) -> <$parser_type as $crate::parser::$parser_trait<&[u8]>>::Source {
            $parser_type::default().parse_str(txt)
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn abort_is_shared_by_clones() {
        let h1 = AbortHandle::new();
        let h2 = h1.clone();
        assert!(!h2.is_aborted());
        h1.abort();
        assert!(h2.is_aborted());
        assert!(!AbortHandle::default().is_aborted());
    }
}
