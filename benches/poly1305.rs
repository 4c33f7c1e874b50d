use cryptal_mac::Poly1305;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const BENCH_SIZE: usize = 1024 * 1024;

pub fn bench_poly1305(c: &mut Criterion) {
    let key = [0u8; 32];
    let input = vec![0u8; BENCH_SIZE];

    let mut group = c.benchmark_group("poly1305");
    group.throughput(Throughput::Bytes(BENCH_SIZE as u64));

    group.bench_function("1 MiB", |b| {
        b.iter(|| {
            let mut mac = Poly1305::new(&key).unwrap();
            mac.write(black_box(&input));
            mac.tag()
        })
    });

    group.bench_function("64 bytes", |b| {
        b.iter(|| {
            let mut mac = Poly1305::new(&key).unwrap();
            mac.write(black_box(&input[..64]));
            mac.tag()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_poly1305);
criterion_main!(benches);
