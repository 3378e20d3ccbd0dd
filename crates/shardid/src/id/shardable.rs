use super::text::{babble, from_hex, is_hex, to_hex};
use crate::base64::{SortableBase64Ext, SortableBytes, is_base64};
use crate::{Error, IdInput, Result, UnsignedOrd, compare_unsigned_32};
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A 12-byte object id laid out for sharding.
///
/// ```text
///  Byte:   0         4         8        12
///          +---------+---------+---------+
///  Field:  | machine |  time   |   inc   |
///          +---------+---------+---------+
///          each field big-endian u32
/// ```
///
/// The machine leads, so ids sort by machine first, then by creation second,
/// then by the per-process counter. The 12 bytes are exactly four Base64
/// groups, so the 16-char sortable text sorts the same way as the bytes.
///
/// # Equality and ordering
///
/// `Eq` compares `(time, machine, inc)` while `Ord` compares
/// `(machine, time, inc)` as unsigned values. Both look at the same three
/// fields, so they agree on what is equal; only the priority differs. Neither
/// looks at [`ShardableId::is_new`].
#[derive(Clone, Copy)]
pub struct ShardableId {
    machine: u32,
    time: u32,
    inc: u32,
    is_new: bool,
}

impl ShardableId {
    pub const BYTE_LEN: usize = 12;
    pub const HEX_LEN: usize = 24;
    pub const ENCODED_LEN: usize = 16;

    /// Creates an id from its fields. `time` is seconds since the Unix epoch.
    #[must_use]
    pub const fn from_parts(time: u32, machine: u32, inc: u32) -> Self {
        Self {
            machine,
            time,
            inc,
            is_new: false,
        }
    }

    /// Creates an id from fields held in signed 32-bit storage. The bit
    /// patterns are kept as-is.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_signed_parts(time: i32, machine: i32, inc: i32) -> Self {
        Self::from_parts(time as u32, machine as u32, inc as u32)
    }

    /// Creates an id for a time given in milliseconds since the Unix epoch.
    /// The time is truncated to whole seconds and wraps past 2106.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_unix_millis(millis: u64, machine: u32, inc: u32) -> Self {
        Self::from_parts((millis / 1000) as u32, machine, inc)
    }

    /// Creates an id for the given [`std::time::SystemTime`]. Times before
    /// the Unix epoch map to zero.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_datetime(datetime: std::time::SystemTime, machine: u32, inc: u32) -> Self {
        let millis = datetime
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or(core::time::Duration::ZERO)
            .as_millis();
        Self::from_unix_millis(millis as u64, machine, inc)
    }

    /// Marks the id as freshly minted. Only generators do this.
    #[must_use]
    pub(crate) const fn into_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Reads the 12-byte layout.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        let [m0, m1, m2, m3, t0, t1, t2, t3, i0, i1, i2, i3] = bytes;
        Self::from_parts(
            u32::from_be_bytes([t0, t1, t2, t3]),
            u32::from_be_bytes([m0, m1, m2, m3]),
            u32::from_be_bytes([i0, i1, i2, i3]),
        )
    }

    /// Reads the 12-byte layout from a slice.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] unless `bytes` is exactly 12 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 12] = bytes
            .try_into()
            .map_err(|_| Error::invalid_length(Self::BYTE_LEN, bytes.len()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Writes the 12-byte layout: machine, time, inc, each big-endian.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 12] {
        let [m0, m1, m2, m3] = self.machine.to_be_bytes();
        let [t0, t1, t2, t3] = self.time.to_be_bytes();
        let [i0, i1, i2, i3] = self.inc.to_be_bytes();
        [m0, m1, m2, m3, t0, t1, t2, t3, i0, i1, i2, i3]
    }

    #[must_use]
    pub const fn machine(&self) -> u32 {
        self.machine
    }

    /// Creation time in seconds since the Unix epoch.
    #[must_use]
    pub const fn time_seconds(&self) -> u32 {
        self.time
    }

    /// Creation time in milliseconds since the Unix epoch.
    #[must_use]
    pub const fn time_millis(&self) -> u64 {
        self.time as u64 * 1000
    }

    #[must_use]
    pub const fn inc(&self) -> u32 {
        self.inc
    }

    /// `true` only for ids minted by a generator and not yet marked seen.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn mark_not_new(&mut self) {
        self.is_new = false;
    }

    /// Lowercase hex of the 12-byte layout.
    #[must_use]
    pub fn to_hex(&self) -> String {
        to_hex(&self.to_bytes())
    }

    /// The legacy babble form of [`ShardableId::to_hex`].
    #[must_use]
    pub fn to_babble(&self) -> String {
        // Always 24 hex digits, which is what babble accepts.
        babble(&self.to_hex()).unwrap_or_default()
    }

    /// Returns `true` if `s` is 24 hex digits (any case) or 16 characters
    /// accepted by [`is_base64`].
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        match s.len() {
            Self::HEX_LEN => is_hex(s),
            Self::ENCODED_LEN => is_base64(s),
            _ => false,
        }
    }

    /// Parses 24-char hex or 16-char sortable Base64.
    ///
    /// ```
    /// use shardid::ShardableId;
    ///
    /// let id = ShardableId::from_parts(1, 2, 3);
    /// assert_eq!(ShardableId::parse(&id.to_hex()).unwrap(), id);
    /// assert_eq!(ShardableId::parse(&id.to_string()).unwrap(), id);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] for any other input.
    pub fn parse(s: &str) -> Result<Self> {
        match s.len() {
            Self::HEX_LEN if is_hex(s) => Ok(Self::from_bytes(from_hex(s)?)),
            Self::ENCODED_LEN => <Self as SortableBase64Ext>::decode(s),
            _ => Err(Error::invalid_format(s)),
        }
    }

    /// Parses the babble form produced by [`ShardableId::to_babble`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] unless `s` is 24 hex digits.
    pub fn parse_babble(s: &str) -> Result<Self> {
        if s.len() != Self::HEX_LEN {
            return Err(Error::invalid_format(s));
        }
        Self::parse(&babble(s)?)
    }

    /// Converts any of the accepted input shapes into an id.
    ///
    /// Returns `None` when the bytes are not 12 long or the text is not a
    /// valid id form.
    #[must_use]
    pub fn massage<'a>(input: impl Into<IdInput<'a>>) -> Option<Self> {
        match input.into() {
            IdInput::Id(id) => Some(id),
            IdInput::Bytes(bytes) => Self::from_slice(bytes).ok(),
            IdInput::Text(text) if Self::is_valid(text) => Self::parse(text).ok(),
            IdInput::Text(_) => None,
        }
    }

    /// Legacy comparison returning a magnitude.
    ///
    /// Walks `(machine, time, inc)` and returns the first non-zero clamped
    /// unsigned difference, or `0`. The sign always matches [`Ord::cmp`].
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn compare_to(&self, other: &Self) -> i32 {
        [
            (self.machine, other.machine),
            (self.time, other.time),
            (self.inc, other.inc),
        ]
        .into_iter()
        .map(|(a, b)| compare_unsigned_32(a as i32, b as i32))
        .find(|&d| d != 0)
        .unwrap_or(0)
    }

    /// Legacy hash: `time + machine * 111 + inc * 17` over wrapping `i32`.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn legacy_hash(&self) -> i32 {
        (self.time as i32)
            .wrapping_add((self.machine as i32).wrapping_mul(111))
            .wrapping_add((self.inc as i32).wrapping_mul(17))
    }
}

const _: () = {
    match crate::base64::encoded_len(ShardableId::BYTE_LEN) {
        Some(n) => assert!(n == ShardableId::ENCODED_LEN),
        None => panic!("encoded length overflow"),
    }
};

impl SortableBytes for ShardableId {
    const BYTE_LEN: usize = 12;
    const ENCODED_LEN: usize = 16;

    type Bytes = [u8; 12];
    type Encoded = [u8; 16];

    fn to_sortable_bytes(&self) -> Self::Bytes {
        self.to_bytes()
    }

    fn from_sortable_bytes(bytes: Self::Bytes) -> Self {
        Self::from_bytes(bytes)
    }
}

impl PartialEq for ShardableId {
    fn eq(&self, other: &Self) -> bool {
        self.time == other.time && self.machine == other.machine && self.inc == other.inc
    }
}

impl Eq for ShardableId {}

impl Hash for ShardableId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.legacy_hash());
    }
}

impl Ord for ShardableId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.machine
            .unsigned_cmp(other.machine)
            .then_with(|| self.time.unsigned_cmp(other.time))
            .then_with(|| self.inc.unsigned_cmp(other.inc))
    }
}

impl PartialOrd for ShardableId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ShardableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.encode(), f)
    }
}

impl fmt::Debug for ShardableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShardableId")
            .field("machine", &format_args!("{} (0x{:08x})", self.machine, self.machine))
            .field("time", &format_args!("{} (0x{:08x})", self.time, self.time))
            .field("inc", &format_args!("{} (0x{:08x})", self.inc, self.inc))
            .field("is_new", &self.is_new)
            .finish()
    }
}

impl core::str::FromStr for ShardableId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ShardableId {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for ShardableId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<[u8; 12]> for ShardableId {
    fn from(bytes: [u8; 12]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<ShardableId> for [u8; 12] {
    fn from(id: ShardableId) -> Self {
        id.to_bytes()
    }
}

impl PartialEq<str> for ShardableId {
    fn eq(&self, other: &str) -> bool {
        Self::parse(other).is_ok_and(|id| id == *self)
    }
}

impl PartialEq<&str> for ShardableId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<ShardableId> for String {
    fn from(id: ShardableId) -> Self {
        id.encode().as_str().into()
    }
}
