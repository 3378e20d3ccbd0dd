use core::cmp::Ordering;

/// Comparison of fixed-width integers as unsigned magnitudes.
///
/// Id fields are unsigned counters and timestamps, but they often pass through
/// signed storage (Java ints, database `INTEGER` columns) on the way in. This
/// trait ranks the bit pattern, so `0x8000_0000_i32 as i32` sorts above `0`.
///
/// `unsigned_diff` returns the difference of the two unsigned values clamped
/// to the signed range of the same width. The clamp keeps the sign correct
/// when the true difference does not fit, where naive wrapping subtraction
/// would flip it.
///
/// ```
/// use shardid::UnsignedOrd;
/// use core::cmp::Ordering;
///
/// let high = 0x8000_0000_u32 as i32; // negative as i32
/// assert_eq!(high.unsigned_cmp(0), Ordering::Greater);
/// assert_eq!(u32::MAX.unsigned_diff(0), i32::MAX);
/// ```
pub trait UnsignedOrd: Copy {
    /// Signed type of the same width, used for the clamped difference.
    type Diff: Copy + Ord + Default;

    /// `self - other` over the unsigned reinterpretations, clamped.
    fn unsigned_diff(self, other: Self) -> Self::Diff;

    /// Orders `self` and `other` as unsigned values.
    fn unsigned_cmp(self, other: Self) -> Ordering {
        self.unsigned_diff(other).cmp(&Self::Diff::default())
    }
}

macro_rules! impl_unsigned_ord {
    ($($ty:ty => $unsigned:ty, $wide:ty, $diff:ty);* $(;)?) => {
        $(
            impl UnsignedOrd for $ty {
                type Diff = $diff;

                #[inline]
                #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
                fn unsigned_diff(self, other: Self) -> $diff {
                    let diff = <$wide>::from(self as $unsigned) - <$wide>::from(other as $unsigned);
                    diff.clamp(<$wide>::from(<$diff>::MIN), <$wide>::from(<$diff>::MAX)) as $diff
                }
            }
        )*
    };
}

impl_unsigned_ord! {
    i32 => u32, i64, i32;
    u32 => u32, i64, i32;
    i64 => u64, i128, i64;
    u64 => u64, i128, i64;
}

/// Clamped unsigned difference of two 32-bit patterns.
#[must_use]
pub fn compare_unsigned_32(a: i32, b: i32) -> i32 {
    a.unsigned_diff(b)
}

/// Clamped unsigned difference of two 64-bit patterns.
#[must_use]
pub fn compare_unsigned_64(a: i64, b: i64) -> i64 {
    a.unsigned_diff(b)
}
