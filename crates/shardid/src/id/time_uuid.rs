use super::text::{from_hex, is_hex, to_hex};
use crate::base64::{SortableBase64Ext, SortableBytes};
use crate::{Error, RandSource, Result, UnsignedOrd};
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;

/// 100-nanosecond ticks between the UUID epoch (1582-10-15) and the Unix
/// epoch.
pub const UUID_EPOCH_OFFSET: u64 = 0x01b2_1dd2_1381_4000;

/// A version-1 style UUID with a time-leading sortable byte form.
///
/// The standard layout stores the 60-bit timestamp as `time_low | time_mid |
/// version:time_hi`, which does not sort by time. The sortable form reverses
/// the three time fields so the most significant bits come first:
///
/// ```text
///  Byte:   0        2        4                8                 16
///          +--------+--------+----------------+-----------------+
///  Field:  |ver:hi  |  mid   |      low       | clock_seq, node |
///          +--------+--------+----------------+-----------------+
/// ```
///
/// The 22-char sortable Base64 text therefore sorts by creation time, then
/// by the clock/node bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeUuid {
    msb: u64,
    lsb: u64,
}

impl TimeUuid {
    pub const BYTE_LEN: usize = 16;
    pub const HEX_LEN: usize = 32;
    pub const HYPHENATED_LEN: usize = 36;
    pub const ENCODED_LEN: usize = 22;

    #[must_use]
    pub const fn from_u64_pair(msb: u64, lsb: u64) -> Self {
        Self { msb, lsb }
    }

    #[must_use]
    pub const fn as_u64_pair(&self) -> (u64, u64) {
        (self.msb, self.lsb)
    }

    #[must_use]
    pub const fn msb(&self) -> u64 {
        self.msb
    }

    #[must_use]
    pub const fn lsb(&self) -> u64 {
        self.lsb
    }

    /// Packs ticks since the Unix epoch (100 ns units, may be negative) into
    /// the high half of a version-1 UUID.
    #[must_use]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub const fn create_time(tenth_micros: i64) -> u64 {
        let ttu = tenth_micros.wrapping_add(UUID_EPOCH_OFFSET as i64) as u64;
        (ttu << 32) | ((ttu & 0xFFFF_0000_0000) >> 16) | 0x1000 | ((ttu >> 48) & 0x0FFF)
    }

    /// Draws the low half: random clock sequence and node with the RFC 4122
    /// variant bits (`10`) forced on top.
    pub fn create_rand_node_and_clock<R>(rng: &R) -> u64
    where
        R: RandSource<u64> + ?Sized,
    {
        (rng.rand() & 0x3FFF_FFFF_FFFF_FFFF) | 0x8000_0000_0000_0000
    }

    /// Builds a time UUID for `tenth_micros` ticks since the Unix epoch.
    pub fn from_time_and_rand<R>(tenth_micros: i64, rng: &R) -> Self
    where
        R: RandSource<u64> + ?Sized,
    {
        Self::from_u64_pair(
            Self::create_time(tenth_micros),
            Self::create_rand_node_and_clock(rng),
        )
    }

    /// Builds a time UUID for milliseconds since the Unix epoch.
    pub fn from_unix_millis_and_rand<R>(millis: i64, rng: &R) -> Self
    where
        R: RandSource<u64> + ?Sized,
    {
        Self::from_time_and_rand(millis.wrapping_mul(10_000), rng)
    }

    /// Builds a time UUID for `datetime` with thread-local randomness. Times
    /// before 1970 produce negative ticks and still round-trip.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn from_datetime(datetime: std::time::SystemTime) -> Self {
        let ticks = match datetime.duration_since(std::time::UNIX_EPOCH) {
            Ok(after) => (after.as_nanos() / 100) as i64,
            Err(before) => -((before.duration().as_nanos() / 100) as i64),
        };
        Self::from_time_and_rand(ticks, &crate::ThreadRandom)
    }

    /// A time UUID for the current system time.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(std::time::SystemTime::now())
    }

    /// The 60-bit timestamp: 100 ns ticks since the UUID epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        let msb = self.msb;
        ((msb & 0x0FFF) << 48) | (((msb >> 16) & 0xFFFF) << 32) | (msb >> 32)
    }

    /// Ticks since the Unix epoch; the inverse of [`TimeUuid::create_time`].
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn extract_tenth_of_micros(&self) -> i64 {
        (self.timestamp() as i64).wrapping_sub(UUID_EPOCH_OFFSET as i64)
    }

    /// Milliseconds since the Unix epoch, truncated toward zero.
    #[must_use]
    pub const fn extract_unix_millis(&self) -> i64 {
        self.extract_tenth_of_micros() / 10_000
    }

    #[must_use]
    pub const fn version(&self) -> u8 {
        ((self.msb >> 12) & 0xF) as u8
    }

    #[must_use]
    pub const fn variant(&self) -> u8 {
        (self.lsb >> 62) as u8
    }

    #[must_use]
    pub const fn clock_sequence(&self) -> u16 {
        ((self.lsb >> 48) & 0x3FFF) as u16
    }

    #[must_use]
    pub const fn node(&self) -> u64 {
        self.lsb & 0xFFFF_FFFF_FFFF
    }

    /// The standard 16-byte layout: `msb` then `lsb`, big-endian.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 16] {
        ((self.msb as u128) << 64 | self.lsb as u128).to_be_bytes()
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        let raw = u128::from_be_bytes(bytes);
        Self::from_u64_pair((raw >> 64) as u64, raw as u64)
    }

    /// Reads the standard layout from a slice.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] unless `bytes` is exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 16] = bytes
            .try_into()
            .map_err(|_| Error::invalid_length(Self::BYTE_LEN, bytes.len()))?;
        Ok(Self::from_bytes(bytes))
    }

    /// The time-leading byte form. See the type docs for the layout.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn to_sortable_bytes(&self) -> [u8; 16] {
        let [h0, h1] = (self.msb as u16).to_be_bytes();
        let [m0, m1] = ((self.msb >> 16) as u16).to_be_bytes();
        let [l0, l1, l2, l3] = ((self.msb >> 32) as u32).to_be_bytes();
        let [n0, n1, n2, n3, n4, n5, n6, n7] = self.lsb.to_be_bytes();
        [
            h0, h1, m0, m1, l0, l1, l2, l3, n0, n1, n2, n3, n4, n5, n6, n7,
        ]
    }

    /// Inverse of [`TimeUuid::to_sortable_bytes`].
    #[must_use]
    pub const fn from_sortable_bytes(bytes: [u8; 16]) -> Self {
        let [h0, h1, m0, m1, l0, l1, l2, l3, n0, n1, n2, n3, n4, n5, n6, n7] = bytes;
        let hi = u16::from_be_bytes([h0, h1]) as u64;
        let mid = u16::from_be_bytes([m0, m1]) as u64;
        let low = u32::from_be_bytes([l0, l1, l2, l3]) as u64;
        Self::from_u64_pair(
            (low << 32) | (mid << 16) | hi,
            u64::from_be_bytes([n0, n1, n2, n3, n4, n5, n6, n7]),
        )
    }

    /// 32 lowercase hex digits of the standard layout.
    #[must_use]
    pub fn to_hex(&self) -> String {
        to_hex(&self.to_bytes())
    }

    /// The 36-char `8-4-4-4-12` form, same as [`fmt::Display`].
    #[must_use]
    pub fn to_hyphenated(&self) -> String {
        self.to_string()
    }

    /// Parses 32-char hex, the 36-char hyphenated form, or 22-char sortable
    /// Base64.
    ///
    /// ```
    /// use shardid::{SortableBase64Ext, TimeUuid};
    ///
    /// let id = TimeUuid::parse("1e7aba60-26e6-11e3-b407-005056c00008").unwrap();
    /// assert_eq!(id.extract_unix_millis(), 1_380_225_554_694);
    /// assert_eq!(TimeUuid::parse(&id.encode().to_string()).unwrap(), id);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] for any other input.
    pub fn parse(s: &str) -> Result<Self> {
        match s.len() {
            Self::HEX_LEN if is_hex(s) => Ok(Self::from_bytes(from_hex(s)?)),
            Self::HYPHENATED_LEN => Self::parse_hyphenated(s),
            Self::ENCODED_LEN => <Self as SortableBase64Ext>::decode(s),
            _ => Err(Error::invalid_format(s)),
        }
    }

    fn parse_hyphenated(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if [8, 13, 18, 23].iter().any(|&i| bytes[i] != b'-') {
            return Err(Error::invalid_format(s));
        }
        let mut digits = [0u8; 32];
        let mut n = 0;
        for &b in bytes.iter().filter(|&&b| b != b'-') {
            if n == digits.len() {
                return Err(Error::invalid_format(s));
            }
            digits[n] = b;
            n += 1;
        }
        let digits = core::str::from_utf8(&digits[..n]).map_err(|_| Error::invalid_format(s))?;
        if n != Self::HEX_LEN || !is_hex(digits) {
            return Err(Error::invalid_format(s));
        }
        Ok(Self::from_bytes(from_hex(digits)?))
    }

    /// Orders by timestamp, then by the low half as unsigned.
    ///
    /// Ids that differ only in version bits compare equal here; [`Ord`]
    /// breaks that tie on the high half.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.timestamp()
            .unsigned_cmp(other.timestamp())
            .then_with(|| self.lsb.unsigned_cmp(other.lsb))
    }
}

const _: () = match crate::base64::encoded_len(TimeUuid::BYTE_LEN) {
    Some(n) => assert!(n == TimeUuid::ENCODED_LEN),
    None => panic!("encoded length overflow"),
};

impl SortableBytes for TimeUuid {
    const BYTE_LEN: usize = 16;
    const ENCODED_LEN: usize = 22;

    type Bytes = [u8; 16];
    type Encoded = [u8; 22];

    fn to_sortable_bytes(&self) -> Self::Bytes {
        Self::to_sortable_bytes(self)
    }

    fn from_sortable_bytes(bytes: Self::Bytes) -> Self {
        Self::from_sortable_bytes(bytes)
    }
}

impl Ord for TimeUuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other).then_with(|| self.msb.cmp(&other.msb))
    }
}

impl PartialOrd for TimeUuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            self.msb >> 32,
            (self.msb >> 16) & 0xFFFF,
            self.msb & 0xFFFF,
            self.lsb >> 48,
            self.node(),
        )
    }
}

impl fmt::Debug for TimeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeUuid")
            .field("uuid", &format_args!("{self}"))
            .field("timestamp", &self.timestamp())
            .field("clock_sequence", &self.clock_sequence())
            .field("node", &format_args!("0x{:012x}", self.node()))
            .finish()
    }
}

impl core::str::FromStr for TimeUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TimeUuid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&[u8]> for TimeUuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<[u8; 16]> for TimeUuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<TimeUuid> for [u8; 16] {
    fn from(id: TimeUuid) -> Self {
        id.to_bytes()
    }
}

impl From<TimeUuid> for u128 {
    fn from(id: TimeUuid) -> Self {
        u128::from_be_bytes(id.to_bytes())
    }
}

impl From<u128> for TimeUuid {
    fn from(raw: u128) -> Self {
        Self::from_bytes(raw.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
impl From<uuid::Uuid> for TimeUuid {
    fn from(uuid: uuid::Uuid) -> Self {
        let (msb, lsb) = uuid.as_u64_pair();
        Self::from_u64_pair(msb, lsb)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
impl From<TimeUuid> for uuid::Uuid {
    fn from(id: TimeUuid) -> Self {
        let (msb, lsb) = id.as_u64_pair();
        Self::from_u64_pair(msb, lsb)
    }
}
