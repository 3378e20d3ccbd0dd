use super::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock backed by [`SystemTime::now`].
///
/// No monotonic guarantee: if the system clock steps backwards, so do the
/// ids. A clock set before 1970 reads as `0`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_millis() as u64)
    }
}
