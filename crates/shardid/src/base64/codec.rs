use super::alphabet::{
    ALPHABET, BITS_PER_SYMBOL, BYTES_PER_GROUP, DECODE_TABLE, MASK_6BITS, NO_VALUE, PAD,
    SYMBOLS_PER_GROUP,
};
use crate::{Error, Result};
use alloc::{string::String, vec, vec::Vec};

/// Symbols emitted for a trailing partial group of 0, 1 or 2 bytes.
const TAIL_SYMBOLS: [usize; 3] = [0, 2, 3];

/// Bytes recovered from a trailing partial group of 0, 1, 2 or 3 symbols.
const TAIL_BYTES: [usize; 4] = [0, 0, 1, 2];

/// Returns the exact encoded length of `len` input bytes, or `None` if it does
/// not fit in a `usize`.
///
/// The length is `4 * floor(len / 3) + (0, 2, 3)[len % 3]`.
#[must_use]
pub const fn encoded_len(len: usize) -> Option<usize> {
    let tail = TAIL_SYMBOLS[len % BYTES_PER_GROUP];
    match (len / BYTES_PER_GROUP).checked_mul(SYMBOLS_PER_GROUP) {
        Some(full) => full.checked_add(tail),
        None => None,
    }
}

/// Returns the largest number of bytes `len` encoded symbols can decode to.
///
/// Lenient decoding skips unknown symbols, so the actual output may be
/// shorter.
#[must_use]
pub const fn decoded_len_bound(len: usize) -> usize {
    (len / SYMBOLS_PER_GROUP) * BYTES_PER_GROUP + TAIL_BYTES[len % SYMBOLS_PER_GROUP]
}

/// Writes the encoding of `input` into `out`, which must be at least
/// `encoded_len(input.len())` bytes long.
fn encode_into(input: &[u8], out: &mut [u8]) -> usize {
    let symbol = |acc: u32, shift: u32| ALPHABET[((acc >> shift) & MASK_6BITS) as usize];

    let mut pos = 0;
    let mut groups = input.chunks_exact(BYTES_PER_GROUP);
    for group in groups.by_ref() {
        let acc = u32::from(group[0]) << 16 | u32::from(group[1]) << 8 | u32::from(group[2]);
        out[pos] = symbol(acc, 18);
        out[pos + 1] = symbol(acc, 12);
        out[pos + 2] = symbol(acc, 6);
        out[pos + 3] = symbol(acc, 0);
        pos += SYMBOLS_PER_GROUP;
    }

    match *groups.remainder() {
        [b0] => {
            // 8 bits = 6 + 2, low 4 bits of the second symbol zero-filled
            let acc = u32::from(b0);
            out[pos] = symbol(acc, 2);
            out[pos + 1] = symbol(acc << 4, 0);
            pos += 2;
        }
        [b0, b1] => {
            // 16 bits = 6 + 6 + 4, low 2 bits of the third symbol zero-filled
            let acc = u32::from(b0) << 8 | u32::from(b1);
            out[pos] = symbol(acc, 10);
            out[pos + 1] = symbol(acc, 4);
            out[pos + 2] = symbol(acc << 2, 0);
            pos += 3;
        }
        _ => {}
    }
    pos
}

/// Encodes `input` into `out` and returns the number of symbols written.
///
/// # Errors
///
/// - [`Error::LengthOverflow`] if the encoded length does not fit a `usize`.
/// - [`Error::BufferTooSmall`] if `out` cannot hold the encoding. Nothing is
///   written in that case.
pub fn encode_to_slice(input: &[u8], out: &mut [u8]) -> Result<usize> {
    let needed = encoded_len(input.len()).ok_or(Error::LengthOverflow { len: input.len() })?;
    if needed > out.len() {
        return Err(Error::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }
    Ok(encode_into(input, out))
}

/// Encodes `input` into a new [`String`].
///
/// ```
/// assert_eq!(shardid::base64::encode(b"abc"), "NL8Y");
/// assert_eq!(shardid::base64::encode(&[0xFF]), "zk");
/// ```
#[must_use]
pub fn encode(input: &[u8]) -> String {
    // A slice is at most `isize::MAX` bytes, so its encoded length always fits.
    let len = (input.len() / BYTES_PER_GROUP) * SYMBOLS_PER_GROUP
        + TAIL_SYMBOLS[input.len() % BYTES_PER_GROUP];
    let mut buf = vec![0; len];
    let written = encode_into(input, &mut buf);
    debug_assert_eq!(written, len);
    // SAFETY: every byte written comes from `ALPHABET`, which is ASCII.
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Bit accumulator shared by the lenient and strict decoders.
#[derive(Default)]
struct Accumulator {
    bits: u32,
    symbols: usize,
    pos: usize,
}

impl Accumulator {
    fn push(&mut self, value: u8, out: &mut [u8]) {
        self.bits = (self.bits << BITS_PER_SYMBOL) | u32::from(value);
        self.symbols += 1;
        if self.symbols == SYMBOLS_PER_GROUP {
            out[self.pos] = (self.bits >> 16) as u8;
            out[self.pos + 1] = (self.bits >> 8) as u8;
            out[self.pos + 2] = self.bits as u8;
            self.pos += BYTES_PER_GROUP;
            self.bits = 0;
            self.symbols = 0;
        }
    }

    /// Flushes the trailing partial group. Returns the bits that were dropped
    /// and whether a lone symbol was discarded.
    fn finish(mut self, out: &mut [u8]) -> (usize, u32, bool) {
        let mut dropped = 0;
        match self.symbols {
            2 => {
                // 12 bits = 8 + 4
                dropped = self.bits & 0xF;
                out[self.pos] = (self.bits >> 4) as u8;
                self.pos += 1;
            }
            3 => {
                // 18 bits = 8 + 8 + 2
                dropped = self.bits & 0x3;
                let bits = self.bits >> 2;
                out[self.pos] = (bits >> 8) as u8;
                out[self.pos + 1] = bits as u8;
                self.pos += 2;
            }
            _ => {}
        }
        (self.pos, dropped, self.symbols == 1)
    }
}

/// The lenient decoding loop. `out` must hold `decoded_len_bound` of the
/// number of bytes the iterator yields.
fn decode_lenient<I>(input: I, out: &mut [u8]) -> usize
where
    I: IntoIterator<Item = u8>,
{
    let mut acc = Accumulator::default();
    for byte in input {
        if byte == PAD {
            break;
        }
        let value = DECODE_TABLE[byte as usize];
        if value != NO_VALUE {
            acc.push(value, out);
        }
    }
    acc.finish(out).0
}

fn check_decode_capacity(len: usize, out: &[u8]) -> Result<()> {
    let needed = decoded_len_bound(len);
    if needed > out.len() {
        return Err(Error::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }
    Ok(())
}

/// Decodes `input` into `out` and returns the number of bytes written.
///
/// Decoding is garbage-in-garbage-out: bytes outside the alphabet are
/// skipped, the first [`PAD`](super::PAD) ends the input, and a lone trailing
/// symbol is dropped. Use [`decode_strict_to_slice`] to reject such input, or
/// gate it with [`is_base64`](super::is_base64).
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `out` is shorter than
/// `decoded_len_bound(input.len())`.
pub fn decode_to_slice(input: impl AsRef<[u8]>, out: &mut [u8]) -> Result<usize> {
    let input = input.as_ref();
    check_decode_capacity(input.len(), out)?;
    Ok(decode_lenient(input.iter().copied(), out))
}

/// Decodes `input` leniently into a new `Vec`. See [`decode_to_slice`].
///
/// ```
/// use shardid::base64::decode;
///
/// assert_eq!(decode("NL8Y"), b"abc");
/// // Unknown symbols are skipped and `=` stops decoding.
/// assert_eq!(decode("N L[8Y=zzzz"), b"abc");
/// ```
#[must_use]
pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    let input = input.as_ref();
    let mut buf = vec![0; decoded_len_bound(input.len())];
    let written = decode_lenient(input.iter().copied(), &mut buf);
    buf.truncate(written);
    buf
}

/// Decodes at most `len` bytes pulled from `cursor` into `out`.
///
/// The cursor advances past every byte consumed, including the terminating
/// [`PAD`](super::PAD) if one is met.
///
/// # Errors
///
/// [`Error::BufferTooSmall`] if `out` is shorter than
/// `decoded_len_bound(len)`.
pub fn decode_cursor(cursor: &mut super::ByteCursor<'_>, len: usize, out: &mut [u8]) -> Result<usize> {
    check_decode_capacity(len, out)?;
    Ok(decode_lenient(cursor.by_ref().take(len), out))
}

/// Strictly decodes `input` into `out`.
///
/// # Errors
///
/// - [`Error::BufferTooSmall`] if `out` is too short.
/// - [`Error::InvalidSymbol`] for any byte outside the alphabet, including
///   whitespace and [`PAD`](super::PAD).
/// - [`Error::DanglingSymbol`] if a single symbol is left over.
/// - [`Error::NonCanonicalTail`] if the zero-filled bits of the last symbol
///   are set, which the encoder never produces.
pub fn decode_strict_to_slice(input: impl AsRef<[u8]>, out: &mut [u8]) -> Result<usize> {
    let input = input.as_ref();
    check_decode_capacity(input.len(), out)?;

    let mut acc = Accumulator::default();
    for (index, &byte) in input.iter().enumerate() {
        let value = DECODE_TABLE[byte as usize];
        if value == NO_VALUE {
            return Err(Error::InvalidSymbol { byte, index });
        }
        acc.push(value, out);
    }

    match acc.finish(out) {
        (_, _, true) => Err(Error::DanglingSymbol),
        (_, dropped, _) if dropped != 0 => Err(Error::NonCanonicalTail),
        (written, _, _) => Ok(written),
    }
}

/// Strictly decodes `input` into a new `Vec`. See [`decode_strict_to_slice`].
///
/// # Errors
///
/// Same as [`decode_strict_to_slice`], minus the buffer check.
pub fn decode_strict(input: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let input = input.as_ref();
    let mut buf = vec![0; decoded_len_bound(input.len())];
    let written = decode_strict_to_slice(input, &mut buf)?;
    buf.truncate(written);
    Ok(buf)
}
