use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use minhash::{compute_signature, PermutationTable};

fn bench_signature(c: &mut Criterion) {
    let table = PermutationTable::generate(42, 128);
    let mut group = c.benchmark_group("minhash_signature");

    for size in [50, 500, 5000].iter() {
        let hashes: Vec<u32> = (0..*size as u32).collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_function(format!("shingles_{size}"), |b| {
            b.iter(|| compute_signature(black_box(&hashes), black_box(&table)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_signature);
criterion_main!(benches);
