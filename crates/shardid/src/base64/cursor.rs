/// A read cursor over a byte slice, handing out one byte at a time.
///
/// The cursor owns a private position and is meant for a single owner. It is
/// not synchronized; share it across threads only behind your own lock.
///
/// Text input is read as its UTF-8 bytes. Non-ASCII characters therefore show
/// up as bytes `>= 0x80`, none of which are alphabet symbols, so lenient
/// decoding skips them.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor over `bytes` starting at `offset`.
    #[must_use]
    pub fn new(bytes: &'a (impl AsRef<[u8]> + ?Sized), offset: usize) -> Self {
        Self {
            bytes: bytes.as_ref(),
            pos: offset,
        }
    }

    /// Points the cursor at new input.
    pub fn reset(&mut self, bytes: &'a (impl AsRef<[u8]> + ?Sized), offset: usize) {
        self.bytes = bytes.as_ref();
        self.pos = offset;
    }

    /// Returns the next byte and advances, or `None` at the end of input.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// Current offset into the underlying slice.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.pos)
    }
}

impl Iterator for ByteCursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.next_byte()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}
