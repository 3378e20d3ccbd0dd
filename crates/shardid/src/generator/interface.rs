use crate::{ShardableId, TimeSource};

/// A minimal interface for generating [`ShardableId`]s.
pub trait ShardableIdGenerator<T>
where
    T: TimeSource<u64>,
{
    /// Creates a new generator with an explicit counter seed.
    fn new(machine_id: u32, time: T, seed: u32) -> Self;

    /// Mints an id for the current time. The result reports
    /// [`ShardableId::is_new`].
    fn next_id(&self) -> ShardableId;

    /// Mints an id for `secs` seconds since the Unix epoch, drawing the
    /// counter as [`ShardableIdGenerator::next_id`] does.
    fn next_id_at(&self, secs: u32) -> ShardableId;

    /// The machine id stamped into every id.
    fn machine_id(&self) -> u32;
}
