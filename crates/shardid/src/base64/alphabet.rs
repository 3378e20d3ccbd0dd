/// The 64 symbols in value order. This table is the persisted text format of
/// every id ever written; it must never change.
pub const ALPHABET: &[u8; 64] = b"-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz";

/// Legacy end-of-input marker. The encoder never writes it, the decoder stops
/// at the first one.
pub const PAD: u8 = b'=';

/// Sentinel in [`DECODE_TABLE`] for bytes outside the alphabet.
pub const NO_VALUE: u8 = 255;

pub(crate) const BITS_PER_SYMBOL: u32 = 6;
pub(crate) const BYTES_PER_GROUP: usize = 3;
pub(crate) const SYMBOLS_PER_GROUP: usize = 4;
pub(crate) const MASK_6BITS: u32 = 0x3F;

/// Inverse of [`ALPHABET`]: byte value to 6-bit value, or [`NO_VALUE`].
pub const DECODE_TABLE: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
};

/// Bytes tolerated as ignorable by [`is_base64`](crate::base64::is_base64).
const WHITESPACE: &[u8; 4] = b" \r\n\t";

/// Returns `true` if `byte` is an alphabet symbol or the [`PAD`] terminator.
#[must_use]
pub const fn is_base64_byte(byte: u8) -> bool {
    byte == PAD || DECODE_TABLE[byte as usize] != NO_VALUE
}

const fn is_whitespace(byte: u8) -> bool {
    let mut i = 0;
    while i < WHITESPACE.len() {
        if WHITESPACE[i] == byte {
            return true;
        }
        i += 1;
    }
    false
}

/// Returns `true` if every character of `text` is an alphabet symbol, the
/// [`PAD`] terminator, or one of space, `\r`, `\n`, `\t`.
///
/// Any character with a code point of 255 or above makes the whole input
/// invalid. The empty string is valid.
#[must_use]
pub fn is_base64(text: &str) -> bool {
    text.chars().all(|c| {
        let cp = u32::from(c);
        if cp >= 255 {
            return false;
        }
        let byte = cp as u8;
        is_whitespace(byte) || is_base64_byte(byte)
    })
}

/// Byte-slice variant of [`is_base64`].
#[must_use]
pub fn is_base64_bytes(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .all(|&b| b != 255 && (is_whitespace(b) || is_base64_byte(b)))
}
