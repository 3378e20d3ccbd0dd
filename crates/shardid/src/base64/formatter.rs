use super::SortableBase64Ext;
use core::fmt;
use core::marker::PhantomData;

/// An encoded id held in a stack buffer.
///
/// Lightweight, allocation-free view that implements [`fmt::Display`] and
/// [`AsRef<str>`], and compares directly against string types.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base64Formatter<T>
where
    T: SortableBase64Ext,
{
    _id: PhantomData<fn() -> T>,
    buf: T::Encoded,
}

impl<T: SortableBase64Ext> Base64Formatter<T> {
    pub fn new(id: &T) -> Self {
        let mut buf = T::buf();
        id.encode_to_buf(&mut buf);
        Self {
            _id: PhantomData,
            buf,
        }
    }

    /// Returns a `&str` view of the encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only symbols from the ASCII alphabet.
        unsafe { core::str::from_utf8_unchecked(self.buf.as_ref()) }
    }

    /// Consumes the formatter and returns the raw ASCII buffer.
    pub const fn into_inner(self) -> T::Encoded {
        self.buf
    }
}

impl<T: SortableBase64Ext> fmt::Display for Base64Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: SortableBase64Ext> fmt::Debug for Base64Formatter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Base64Formatter").field(&self.as_str()).finish()
    }
}

impl<T: SortableBase64Ext> AsRef<str> for Base64Formatter<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T: SortableBase64Ext> PartialEq<str> for Base64Formatter<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: SortableBase64Ext> PartialEq<&str> for Base64Formatter<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: SortableBase64Ext> PartialEq<alloc::string::String> for Base64Formatter<T> {
    fn eq(&self, other: &alloc::string::String) -> bool {
        self.as_str() == other.as_str()
    }
}
