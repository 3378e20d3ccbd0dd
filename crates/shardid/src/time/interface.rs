/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// Generators read it once per id. Plug in a fixed clock in tests.
///
/// # Example
///
/// ```
/// use shardid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the Unix epoch.
    fn current_millis(&self) -> T;
}

impl<T, C> TimeSource<T> for &C
where
    C: TimeSource<T> + ?Sized,
{
    fn current_millis(&self) -> T {
        (**self).current_millis()
    }
}
