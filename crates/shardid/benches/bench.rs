use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use shardid::{
    AtomicShardableIdGenerator, ShardableId, ShardableIdGenerator, SortableBase64Ext, SystemClock,
    ThreadRandom, TimeSource, TimeUuid, base64,
};
use std::{
    sync::{Arc, Barrier},
    thread::scope,
    time::Instant,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

// Number of IDs generated per benchmark iteration (per-thread for
// multi-threaded).
const TOTAL_IDS: usize = 4096;

/// Benchmarks a single generator on one thread.
fn bench_generator<G, T>(c: &mut Criterion, group_name: &str, generator_fn: impl Fn() -> G)
where
    G: ShardableIdGenerator<T>,
    T: TimeSource<u64>,
{
    let mut group = c.benchmark_group(group_name);
    group.throughput(Throughput::Elements(TOTAL_IDS as u64));

    group.bench_function(format!("elems/{TOTAL_IDS}"), |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let generator = generator_fn();
                for _ in 0..TOTAL_IDS {
                    black_box(generator.next_id());
                }
            }

            start.elapsed()
        });
    });

    group.finish();
}

/// Benchmarks a shared generator across threads.
fn bench_generator_contended<G, T>(c: &mut Criterion, group_name: &str, generator_fn: impl Fn() -> G)
where
    G: ShardableIdGenerator<T> + Send + Sync,
    T: TimeSource<u64>,
{
    let mut group = c.benchmark_group(group_name);

    for thread_count in [1, 2, 4, 8, 16] {
        let ids_per_thread = TOTAL_IDS / thread_count;

        group.throughput(Throughput::Elements(TOTAL_IDS as u64));
        group.bench_function(format!("elems/{TOTAL_IDS}/threads/{thread_count}"), |b| {
            b.iter_custom(|iters| {
                let start = Instant::now();

                for _ in 0..iters {
                    let generator = Arc::new(generator_fn());
                    let barrier = Arc::new(Barrier::new(thread_count + 1));
                    scope(|s| {
                        for _ in 0..thread_count {
                            let generator = Arc::clone(&generator);
                            let barrier = Arc::clone(&barrier);
                            s.spawn(move || {
                                barrier.wait();
                                for _ in 0..ids_per_thread {
                                    black_box(generator.next_id());
                                }
                            });
                        }
                        barrier.wait();
                    });
                }

                start.elapsed()
            });
        });
    }

    group.finish();
}

fn benchmark_mock_sequential_atomic(c: &mut Criterion) {
    bench_generator(c, "mock/sequential/atomic", || {
        AtomicShardableIdGenerator::new(0, FixedMockTime { millis: 1 }, 0)
    });
}

fn benchmark_mock_contended_atomic(c: &mut Criterion) {
    bench_generator_contended(c, "mock/contended/atomic", || {
        AtomicShardableIdGenerator::new(0, FixedMockTime { millis: 1 }, 0)
    });
}

/// Same as the mock run, but every id reads the wall clock.
fn benchmark_system_sequential_atomic(c: &mut Criterion) {
    bench_generator(c, "system/sequential/atomic", || {
        AtomicShardableIdGenerator::from_system(0)
    });
}

fn benchmark_system_contended_atomic(c: &mut Criterion) {
    bench_generator_contended(c, "system/contended/atomic", || {
        AtomicShardableIdGenerator::with_rand(0, SystemClock, &ThreadRandom)
    });
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let id = ShardableId::from_parts(1_700_000_000, 0xDEAD_BEEF, 42);
    let text = id.encode();
    let uuid = TimeUuid::now();
    let uuid_text = uuid.encode();

    group.throughput(Throughput::Elements(1));
    group.bench_function("shardable/encode", |b| {
        b.iter(|| black_box(black_box(&id).encode()));
    });
    group.bench_function("shardable/encode_to_buf", |b| {
        let mut buf = ShardableId::buf();
        b.iter(|| {
            black_box(black_box(&id).encode_to_buf(&mut buf));
        });
    });
    group.bench_function("shardable/decode", |b| {
        b.iter(|| black_box(ShardableId::decode(black_box(text.as_str()))));
    });
    group.bench_function("shardable/parse_hex", |b| {
        let hex = id.to_hex();
        b.iter(|| black_box(ShardableId::parse(black_box(&hex))));
    });
    group.bench_function("time_uuid/encode", |b| {
        b.iter(|| black_box(black_box(&uuid).encode()));
    });
    group.bench_function("time_uuid/decode", |b| {
        b.iter(|| black_box(TimeUuid::decode(black_box(uuid_text.as_str()))));
    });

    let payload: Vec<u8> = (0..=255).collect();
    let encoded = base64::encode(&payload);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("bytes/encode/256", |b| {
        b.iter(|| black_box(base64::encode(black_box(&payload))));
    });
    group.bench_function("bytes/decode/256", |b| {
        b.iter(|| black_box(base64::decode(black_box(&encoded))));
    });

    group.finish();
}

criterion_group!(
    benches,
    // Mock clock
    benchmark_mock_sequential_atomic,
    benchmark_mock_contended_atomic,
    // System clock
    benchmark_system_sequential_atomic,
    benchmark_system_contended_atomic,
    // Text forms
    benchmark_codec,
);
criterion_main!(benches);
