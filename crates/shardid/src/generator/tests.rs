use crate::{
    AtomicShardableIdGenerator, RandSource, ShardableId, ShardableIdGenerator, SystemClock,
    TimeSource,
};
use core::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use std::thread::scope;
use std::vec::Vec;

struct MockTime {
    millis: u64,
}

impl TimeSource<u64> for MockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

struct MockStepTime {
    values: Vec<u64>,
    index: Cell<usize>,
}

impl TimeSource<u64> for MockStepTime {
    fn current_millis(&self) -> u64 {
        let i = self.index.get();
        self.index.set(i + 1);
        self.values[i]
    }
}

struct FixedRand(u32);

impl RandSource<u32> for FixedRand {
    fn rand(&self) -> u32 {
        self.0
    }
}

fn run_inc_advances_by_one<G>(generator: &G)
where
    G: ShardableIdGenerator<MockTime>,
{
    let id1 = generator.next_id();
    let id2 = generator.next_id();
    let id3 = generator.next_id();

    assert_eq!(id1.time_seconds(), 42);
    assert_eq!(id2.time_seconds(), 42);
    assert_eq!(id3.time_seconds(), 42);
    assert_eq!(id2.inc(), id1.inc().wrapping_add(1));
    assert_eq!(id3.inc(), id2.inc().wrapping_add(1));
    assert!(id1 < id2 && id2 < id3);
}

#[test]
fn atomic_inc_advances_by_one() {
    let generator: AtomicShardableIdGenerator<_> =
        ShardableIdGenerator::new(1, MockTime { millis: 42_999 }, 10);
    run_inc_advances_by_one(&generator);
    assert_eq!(generator.current_inc(), 13);
}

#[test]
fn minted_ids_are_new_and_carry_the_machine() {
    let generator = AtomicShardableIdGenerator::new(0xDEAD_BEEF, MockTime { millis: 0 }, 0);
    let id = generator.next_id();
    assert!(id.is_new());
    assert_eq!(id.machine(), 0xDEAD_BEEF);
    assert_eq!(generator.machine_id(), 0xDEAD_BEEF);
    assert_eq!(id, ShardableId::from_parts(0, 0xDEAD_BEEF, 0));
}

#[test]
fn counter_wraps_silently() {
    let generator = AtomicShardableIdGenerator::new(1, MockTime { millis: 0 }, u32::MAX - 1);
    assert_eq!(generator.next_id().inc(), u32::MAX - 1);
    assert_eq!(generator.next_id().inc(), u32::MAX);
    assert_eq!(generator.next_id().inc(), 0);
    assert_eq!(generator.next_id().inc(), 1);
}

#[test]
fn time_truncates_to_seconds_and_follows_the_clock() {
    let clock = MockStepTime {
        values: vec![999, 1_000, 61_500, 4_294_967_296_000],
        index: Cell::new(0),
    };
    let generator = AtomicShardableIdGenerator::new(1, clock, 0);
    let secs: Vec<u32> = (0..4).map(|_| generator.next_id().time_seconds()).collect();
    // Seconds past u32::MAX wrap.
    assert_eq!(secs, [0, 1, 61, 0]);
}

#[test]
fn next_id_at_uses_the_given_time_and_shared_counter() {
    let generator = AtomicShardableIdGenerator::new(3, MockTime { millis: 5_000 }, 100);
    let at = generator.next_id_at(1_234);
    let now = generator.next_id();
    assert_eq!(at.time_seconds(), 1_234);
    assert_eq!(at.inc(), 100);
    assert_eq!(now.time_seconds(), 5);
    assert_eq!(now.inc(), 101);
}

#[test]
fn machine_id_is_read_once() {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&calls);
    let source = move || {
        counter.set(counter.get() + 1);
        0xABCD_u32
    };
    let generator = AtomicShardableIdGenerator::new(source, MockTime { millis: 0 }, 0);
    for _ in 0..5 {
        assert_eq!(generator.next_id().machine(), 0xABCD);
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn with_rand_seeds_the_counter() {
    let generator = AtomicShardableIdGenerator::with_rand(1, MockTime { millis: 0 }, &FixedRand(77));
    assert_eq!(generator.current_inc(), 77);
    assert_eq!(generator.next_id().inc(), 77);
}

#[test]
fn ids_are_unique_across_threads() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 4096;

    let generator = AtomicShardableIdGenerator::new(9, MockTime { millis: 1_000 }, 0);
    let ids: Vec<Vec<ShardableId>> = scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| (0..PER_THREAD).map(|_| generator.next_id()).collect::<Vec<_>>()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let seen: HashSet<[u8; 12]> = ids.iter().flatten().map(ShardableId::to_bytes).collect();
    assert_eq!(seen.len(), THREADS * PER_THREAD);
    assert_eq!(generator.current_inc() as usize, THREADS * PER_THREAD);
}

#[test]
fn system_generator_stamps_a_recent_time() {
    let generator = AtomicShardableIdGenerator::from_system(5);
    let id = generator.next_id();
    let now = u32::try_from(SystemClock.current_millis() / 1000).unwrap();
    assert!(now - id.time_seconds() <= 1);
    assert_eq!(id.machine(), 5);
}

#[test]
fn successive_ids_are_never_equal() {
    let generator = AtomicShardableIdGenerator::from_system(5);
    let ids: Vec<ShardableId> = (0..32).map(|_| generator.next_id()).collect();
    for pair in ids.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
    let distinct: HashSet<[u8; 12]> = ids.iter().map(ShardableId::to_bytes).collect();
    assert_eq!(distinct.len(), ids.len());
}
