//! Sortable, padding-free Base64.
//!
//! The alphabet is `-`, `0-9`, `A-Z`, `_`, `a-z`, assigned to the 6-bit values
//! 0..=63 in that order. Because the symbols are in ascending ASCII order,
//! comparing two encodings of equal-length input made of whole 3-byte groups
//! gives the same answer as comparing the bytes.
//!
//! This is not a drop-in replacement for standard Base64: the alphabet differs
//! and no padding is ever written.

mod alphabet;
mod codec;
mod cursor;
mod formatter;
mod interface;

pub use alphabet::*;
pub use codec::*;
pub use cursor::*;
pub use formatter::*;
pub use interface::*;
