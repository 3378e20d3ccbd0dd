use portable_atomic::{AtomicU32, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{MachineIdSource, RandSource, ShardableId, ShardableIdGenerator, TimeSource};

/// A lock-free [`ShardableId`] generator suitable for multi-threaded
/// environments.
///
/// Each id is `(machine, now in seconds, counter)`. The counter lives in an
/// [`AtomicU32`], starts at a seed, and advances by one per id with wrapping
/// arithmetic. It never resets, so within one generator ids stay unique until
/// 2^32 of them share the same second. There is no duplicate detection.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Never blocks or waits on the clock
///
/// ## Caveats
/// The time component is whatever the clock reports, truncated to whole
/// seconds. A clock that steps backwards produces ids that sort earlier.
///
/// Hold one generator per process and share it; two generators with the same
/// machine id and overlapping seeds can mint the same id.
pub struct AtomicShardableIdGenerator<T>
where
    T: TimeSource<u64>,
{
    machine_id: u32,
    inc: AtomicU32,
    time: T,
}

impl<T> AtomicShardableIdGenerator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a generator with an explicit counter seed.
    ///
    /// The machine id is read from `machine` once, here.
    ///
    /// # Example
    /// ```
    /// use shardid::{AtomicShardableIdGenerator, TimeSource};
    ///
    /// struct FixedTime;
    /// impl TimeSource<u64> for FixedTime {
    ///     fn current_millis(&self) -> u64 {
    ///         1_700_000_000_500
    ///     }
    /// }
    ///
    /// let generator = AtomicShardableIdGenerator::new(7, FixedTime, 41);
    /// let id = generator.next_id();
    /// assert_eq!((id.machine(), id.time_seconds(), id.inc()), (7, 1_700_000_000, 41));
    /// assert!(id.is_new());
    /// ```
    pub fn new(machine: impl MachineIdSource, time: T, seed: u32) -> Self {
        Self {
            machine_id: machine.machine_id(),
            inc: AtomicU32::new(seed),
            time,
        }
    }

    /// Creates a generator whose counter starts at a random value.
    pub fn with_rand<R>(machine: impl MachineIdSource, time: T, rng: &R) -> Self
    where
        R: RandSource<u32> + ?Sized,
    {
        Self::new(machine, time, rng.rand())
    }

    /// Mints an id for the current time.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_id(&self) -> ShardableId {
        let secs = (self.time.current_millis() / 1000) as u32;
        self.next_id_at(secs)
    }

    /// Mints an id for `secs` seconds since the Unix epoch.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id_at(&self, secs: u32) -> ShardableId {
        let inc = self.inc.fetch_add(1, Ordering::Relaxed);
        ShardableId::from_parts(secs, self.machine_id, inc).into_new()
    }

    /// The counter value the next id will carry.
    pub fn current_inc(&self) -> u32 {
        self.inc.load(Ordering::Relaxed)
    }

    pub const fn machine_id(&self) -> u32 {
        self.machine_id
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl AtomicShardableIdGenerator<crate::SystemClock> {
    /// A generator on the system clock with a counter seeded from the
    /// thread-local RNG.
    pub fn from_system(machine: impl MachineIdSource) -> Self {
        Self::with_rand(machine, crate::SystemClock, &crate::ThreadRandom)
    }
}

impl<T> ShardableIdGenerator<T> for AtomicShardableIdGenerator<T>
where
    T: TimeSource<u64>,
{
    fn new(machine_id: u32, time: T, seed: u32) -> Self {
        Self::new(machine_id, time, seed)
    }

    fn next_id(&self) -> ShardableId {
        self.next_id()
    }

    fn next_id_at(&self, secs: u32) -> ShardableId {
        self.next_id_at(secs)
    }

    fn machine_id(&self) -> u32 {
        self.machine_id()
    }
}
