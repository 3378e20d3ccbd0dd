/// Supplies the machine component of every [`ShardableId`] a generator
/// mints.
///
/// Generators read it once at construction and keep the value for their
/// lifetime. Discovery (hostnames, MAC addresses, config lookups) is left to
/// the caller: pass a fixed `u32`, or a closure that computes one.
///
/// ```
/// use shardid::MachineIdSource;
///
/// assert_eq!(7_u32.machine_id(), 7);
/// assert_eq!((|| 0xCAFE_u32).machine_id(), 0xCAFE);
/// ```
///
/// [`ShardableId`]: crate::ShardableId
pub trait MachineIdSource {
    fn machine_id(&self) -> u32;
}

impl MachineIdSource for u32 {
    fn machine_id(&self) -> u32 {
        *self
    }
}

impl<F> MachineIdSource for F
where
    F: Fn() -> u32,
{
    fn machine_id(&self) -> u32 {
        self()
    }
}
