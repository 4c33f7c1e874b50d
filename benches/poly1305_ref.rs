use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use poly1305::universal_hash::KeyInit;
use poly1305::{Key, Poly1305};
use std::hint::black_box;

const BENCH_SIZE: usize = 1024 * 1024;

pub fn bench_poly1305_crate(c: &mut Criterion) {
    let key = [0u8; 32];
    let input = vec![0u8; BENCH_SIZE];

    let mut group = c.benchmark_group("poly1305::Poly1305");
    group.throughput(Throughput::Bytes(BENCH_SIZE as u64));

    group.bench_function("1 MiB", |b| {
        b.iter(|| {
            let mac = Poly1305::new(Key::from_slice(&key));
            mac.compute_unpadded(black_box(&input))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_poly1305_crate);
criterion_main!(benches);
