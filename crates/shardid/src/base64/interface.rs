use super::{Base64Formatter, decode_to_slice, encode_to_slice, is_base64};
use crate::{Error, Result};
use core::fmt;
use core::hash::Hash;

/// A fixed-width identifier with a byte form whose order is meaningful.
///
/// `to_sortable_bytes` must produce bytes whose lexicographic order is the
/// order callers want the text form to have, and `from_sortable_bytes` must be
/// its exact inverse.
pub trait SortableBytes: Sized {
    /// Length of the sortable byte form.
    const BYTE_LEN: usize;
    /// Length of the sortable Base64 text form.
    const ENCODED_LEN: usize;

    type Bytes: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;
    type Encoded: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;

    fn to_sortable_bytes(&self) -> Self::Bytes;
    fn from_sortable_bytes(bytes: Self::Bytes) -> Self;
}

/// Extension trait rendering [`SortableBytes`] ids as sortable Base64.
///
/// The text is fixed-width, ASCII, URL-safe, and for ids of the same type it
/// sorts the same way as the sortable bytes do.
pub trait SortableBase64Ext: SortableBytes {
    /// Returns a zeroed stack buffer of exactly [`SortableBytes::ENCODED_LEN`]
    /// bytes for [`SortableBase64Ext::encode_to_buf`].
    #[must_use]
    fn buf() -> Self::Encoded {
        Self::Encoded::default()
    }

    /// Returns a formatter holding the encoded text on the stack.
    ///
    /// ```
    /// use shardid::{ShardableId, SortableBase64Ext};
    ///
    /// let id = ShardableId::from_parts(0, 0, 1);
    /// assert_eq!(id.encode(), "---------------0");
    /// ```
    fn encode(&self) -> Base64Formatter<Self> {
        Base64Formatter::new(self)
    }

    /// Encodes into a caller-owned buffer without allocating and returns the
    /// text as a `&str` view of it.
    fn encode_to_buf<'buf>(&self, buf: &'buf mut Self::Encoded) -> &'buf str {
        let bytes = self.to_sortable_bytes();
        let out = buf.as_mut();
        let written = encode_to_slice(bytes.as_ref(), out).unwrap_or(0);
        debug_assert_eq!(written, Self::ENCODED_LEN);
        // SAFETY: the buffer holds only symbols from the ASCII alphabet.
        unsafe { core::str::from_utf8_unchecked(&out[..written]) }
    }

    /// Parses the sortable Base64 form.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if the input is not exactly
    /// [`SortableBytes::ENCODED_LEN`] characters, carries characters outside
    /// the alphabet, or does not decode to a full id.
    fn decode(s: impl AsRef<str>) -> Result<Self> {
        let s = s.as_ref();
        if s.len() != Self::ENCODED_LEN || !is_base64(s) {
            return Err(Error::invalid_format(s));
        }
        let mut bytes = Self::Bytes::default();
        match decode_to_slice(s, bytes.as_mut()) {
            Ok(n) if n == Self::BYTE_LEN => Ok(Self::from_sortable_bytes(bytes)),
            _ => Err(Error::invalid_format(s)),
        }
    }
}

impl<ID> SortableBase64Ext for ID where ID: SortableBytes {}
