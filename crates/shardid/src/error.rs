use alloc::string::String;

/// A result type defaulting to the crate [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `shardid` can produce.
///
/// Every failure is synchronous and local to the call that produced it.
/// Nothing is retried.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A text form had the wrong length or carried characters outside the
    /// alphabet declared for that form.
    #[error("invalid id format [{input}]")]
    InvalidFormat {
        /// The offending input, verbatim.
        input: String,
    },

    /// A binary constructor received the wrong number of bytes.
    #[error("invalid id length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The output buffer cannot hold the worst-case result.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    /// Computing the output length would overflow `usize`.
    #[error("input of {len} bytes is too large to encode")]
    LengthOverflow { len: usize },

    /// Strict decoding met a byte that is not in the sortable alphabet.
    #[error("invalid sortable base64 byte 0x{byte:02x} at index {index}")]
    InvalidSymbol { byte: u8, index: usize },

    /// Strict decoding ended with a single symbol, which cannot hold a byte.
    #[error("dangling trailing symbol")]
    DanglingSymbol,

    /// Strict decoding found set bits in the padding of the last symbol.
    #[error("non-canonical trailing symbol")]
    NonCanonicalTail,
}

impl Error {
    pub(crate) fn invalid_format(input: impl Into<String>) -> Self {
        let input = input.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(%input, "rejected id text");
        Self::InvalidFormat { input }
    }

    pub(crate) const fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }
}
