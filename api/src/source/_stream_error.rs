use crate::Error;

/// The error raised when records flow from a fallible source
/// (typically a parser) into a fallible sink (typically a callback or a serializer).
///
/// The variants are re-exported, so that `.map_err(SourceError)`
/// and `.map_err(SinkError)` read naturally.
#[derive(Debug, thiserror::Error)]
pub enum StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    /// The source could not produce the next record
    #[error("Source failed: {0}")]
    SourceError(#[source] SourceErr),
    /// The sink rejected a record
    #[error("Sink failed: {0}")]
    SinkError(#[source] SinkErr),
}
pub use StreamError::*;

/// [`Result`] whose error is a [`StreamError`].
pub type StreamResult<T, E1, E2> = Result<T, StreamError<E1, E2>>;

impl<SourceErr, SinkErr> StreamError<SourceErr, SinkErr>
where
    SourceErr: Error,
    SinkErr: Error,
{
    pub fn is_source_error(&self) -> bool {
        matches!(self, SourceError(_))
    }

    pub fn is_sink_error(&self) -> bool {
        matches!(self, SinkError(_))
    }

    /// Collapse both sides into a single error type.
    pub fn inner_into<Err>(self) -> Err
    where
        SourceErr: Into<Err>,
        SinkErr: Into<Err>,
    {
        match self {
            SourceError(err) => err.into(),
            SinkError(err) => err.into(),
        }
    }

    /// Convert the source side with `f`, leaving a sink error untouched.
    pub fn map_source<E, F>(self, f: F) -> StreamError<E, SinkErr>
    where
        E: Error,
        F: FnOnce(SourceErr) -> E,
    {
        match self {
            SourceError(e) => SourceError(f(e)),
            SinkError(e) => SinkError(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Wrapped(io::Error);
    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "wrapped {}", self.0)
        }
    }
    impl Error for Wrapped {}

    #[test]
    fn map_source() {
        let err: StreamError<io::Error, io::Error> = SourceError(io::Error::other("boom"));
        let err = err.map_source(Wrapped);
        assert!(err.is_source_error());
        assert_eq!(err.to_string(), "Source failed: wrapped boom");

        let err: StreamError<io::Error, io::Error> = SinkError(io::Error::other("full"));
        let err = err.map_source(Wrapped);
        assert!(err.is_sink_error());
        let inner: io::Error = err.map_source(|w| w.0).inner_into();
        assert_eq!(inner.to_string(), "full");
    }
}
