use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use fixed_hashtable::{FixedHashTable, MixedDigitHasher, ModuloDigitHasher, SlotHasher};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// 16-digit keys, like the report driver's data files.
fn key(n: u64) -> String {
    format!("{:016}", n % 10_000_000_000_000_000)
}

const CAPACITY: usize = 16_411;
const FILL: usize = 12_000;

fn filled<H: SlotHasher>(hasher: H, keys: &[String]) -> FixedHashTable<String, H> {
    let mut t = FixedHashTable::with_hasher(CAPACITY, hasher);
    for k in keys {
        t.insert(k.clone()).unwrap();
    }
    t
}

fn bench_insert(c: &mut Criterion) {
    let keys: Vec<_> = lcg(1).take(FILL).map(key).collect();
    c.bench_function("fixed_hash_table_insert_12k", |b| {
        b.iter_batched(
            || (FixedHashTable::<String>::new(CAPACITY), keys.clone()),
            |(mut t, keys)| {
                for k in keys {
                    t.insert(k).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    let keys: Vec<_> = lcg(7).take(FILL).map(key).collect();
    let t = filled(MixedDigitHasher, &keys);
    let mut it = keys.iter().cycle();
    c.bench_function("fixed_hash_table_get_hit", |b| {
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k).unwrap());
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    let keys: Vec<_> = lcg(11).take(FILL).map(key).collect();
    let t = filled(MixedDigitHasher, &keys);
    let mut miss = lcg(0xdead_beef);
    c.bench_function("fixed_hash_table_get_miss", |b| {
        b.iter(|| {
            // generate keys unlikely in table
            let k = key(miss.next().unwrap());
            let _ = black_box(t.get(&k));
        })
    });
}

// Sequential ids are the baseline hasher's best case; strided ids its worst.
fn bench_hashers_on_strided_keys(c: &mut Criterion) {
    let keys: Vec<_> = (1..=2_000u64).map(|i| key(i * CAPACITY as u64)).collect();
    let mixed = filled(MixedDigitHasher, &keys);
    let baseline = filled(ModuloDigitHasher, &keys);
    c.bench_function("fixed_hash_table_strided_get_mixed", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| black_box(mixed.get(it.next().unwrap()).unwrap()))
    });
    c.bench_function("fixed_hash_table_strided_get_baseline", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| black_box(baseline.get(it.next().unwrap()).unwrap()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_hashers_on_strided_keys
}
criterion_main!(benches);
