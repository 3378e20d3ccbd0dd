/// A source of random integers.
///
/// Generators draw their counter seed from one, and time UUIDs draw their
/// clock and node bits from one. Plug in a fixed source in tests.
///
/// # Example
/// ```
/// use shardid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

impl<T, R> RandSource<T> for &R
where
    R: RandSource<T> + ?Sized,
{
    fn rand(&self) -> T {
        (**self).rand()
    }
}
