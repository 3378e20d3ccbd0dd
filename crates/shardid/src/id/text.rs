//! Hex text forms and the legacy "babble" permutation.

use crate::{Error, Result};
use alloc::string::String;

/// Number of two-character groups in the first babble block.
const BABBLE_BLOCK: usize = 8;

/// Returns `true` if every byte of `s` is a hex digit, in either case.
#[must_use]
pub fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Renders `bytes` as lowercase hex.
pub(crate) fn to_hex<const N: usize>(bytes: &[u8; N]) -> String {
    let mut buf = alloc::vec![0; N * 2];
    // The buffer is exactly twice the input length, the only failure case.
    if hex::encode_to_slice(bytes, &mut buf).is_err() {
        return String::new();
    }
    // SAFETY: hex output is ASCII.
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Parses exactly `2 * N` hex digits of either case.
pub(crate) fn from_hex<const N: usize>(s: &str) -> Result<[u8; N]> {
    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).map_err(|_| Error::invalid_format(s))?;
    Ok(out)
}

fn babble_unchecked(hex: &str) -> String {
    let groups: alloc::vec::Vec<&str> = (0..hex.len() / 2).map(|i| &hex[i * 2..i * 2 + 2]).collect();
    let (first, second) = groups.split_at(BABBLE_BLOCK.min(groups.len()));
    let mut out = String::with_capacity(hex.len());
    first.iter().rev().chain(second.iter().rev()).for_each(|g| out.push_str(g));
    out
}

/// Applies the legacy babble permutation to a hex id.
///
/// The hex string is split into two-character groups. Groups 0..8 are
/// reversed as one block, and the remaining groups are reversed as a second,
/// independent block. This is not a single reversal of the whole string, and
/// it is kept exactly as-is because previously persisted ids depend on it.
///
/// The permutation is its own inverse, so the same function converts in both
/// directions.
///
/// ```
/// use shardid::babble;
///
/// let hex = "0123456789abcdeffedcba9876543210";
/// let babbled = babble(hex).unwrap();
/// assert_eq!(babbled, "efcdab89674523011032547698badcfe");
/// assert_eq!(babble(&babbled).unwrap(), hex);
/// ```
///
/// # Errors
///
/// [`Error::InvalidFormat`] unless the input is 24 or 32 hex digits.
pub fn babble(hex: &str) -> Result<String> {
    if !matches!(hex.len(), 24 | 32) || !is_hex(hex) {
        return Err(Error::invalid_format(hex));
    }
    Ok(babble_unchecked(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_and_accepts_mixed_case() {
        let bytes = [0x00, 0xAB, 0xCD, 0xEF];
        assert_eq!(to_hex(&bytes), "00abcdef");
        assert_eq!(from_hex::<4>("00AbCdeF").unwrap(), bytes);
    }

    #[test]
    fn from_hex_rejects_bad_digits_and_lengths() {
        assert!(matches!(from_hex::<2>("zz00"), Err(Error::InvalidFormat { .. })));
        assert!(matches!(from_hex::<2>("000"), Err(Error::InvalidFormat { .. })));
        assert!(matches!(from_hex::<2>("000000"), Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn babble_reverses_two_independent_blocks_of_24() {
        let hex = "000102030405060708090a0b";
        let babbled = babble(hex).unwrap();
        assert_eq!(babbled, "07060504030201000b0a0908");
        assert_eq!(babble(&babbled).unwrap(), hex);
    }

    #[test]
    fn babble_reverses_two_independent_blocks_of_32() {
        let hex = "0123456789abcdeffedcba9876543210";
        let babbled = babble(hex).unwrap();
        assert_eq!(babbled, "efcdab89674523011032547698badcfe");
        // A single 16-group reversal would give a different answer.
        assert_ne!(babbled, "1032547698badcfeefcdab8967452301");
        assert_eq!(babble(&babbled).unwrap(), hex);
    }

    #[test]
    fn babble_rejects_non_hex_input() {
        assert_eq!(
            babble("abc"),
            Err(Error::InvalidFormat {
                input: "abc".into()
            })
        );
        assert!(babble("zz0102030405060708090a0b").is_err());
        assert!(babble("----------------").is_err());
    }
}
