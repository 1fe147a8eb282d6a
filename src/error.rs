/// A result type whose error defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that this crate can emit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The random source could not synchronously supply the requested bytes.
    ///
    /// A generator that returns this error leaves its state untouched, so the next successful
    /// call behaves as if the failed one never happened.
    #[error("could not generate random values")]
    EntropyUnavailable,

    /// The counter overflowed while the timestamp already held the largest 48-bit value, so no
    /// greater identifier can be produced.
    #[error("timestamp exceeded the 48-bit range")]
    TimestampExhausted,
}

impl From<rand::Error> for Error {
    fn from(_: rand::Error) -> Self {
        Self::EntropyUnavailable
    }
}
