use criterion::{Criterion, criterion_group, criterion_main};
use reflex_bq::{BinaryQuantizer, DEFAULT_DIMENSIONS, hamming_distance};
use std::hint::black_box;

fn create_vector(seed: u64, dims: usize) -> Vec<f32> {
    (0..dims as u64)
        .map(|i| {
            let mixed = (seed.wrapping_mul(31).wrapping_add(i * 17)) % 1000;
            (mixed as f32 / 500.0) - 1.0
        })
        .collect()
}

fn bench_fit(c: &mut Criterion) {
    let data: Vec<Vec<f32>> = (0..1000)
        .map(|s| create_vector(s, DEFAULT_DIMENSIONS))
        .collect();

    c.bench_function("fit_1000x1536", |b| {
        b.iter(|| {
            let mut bq = BinaryQuantizer::new(DEFAULT_DIMENSIONS);
            bq.fit(black_box(&data)).unwrap();
            bq
        })
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut bq = BinaryQuantizer::new(DEFAULT_DIMENSIONS);
    let data: Vec<Vec<f32>> = (0..100)
        .map(|s| create_vector(s, DEFAULT_DIMENSIONS))
        .collect();
    bq.fit(&data).unwrap();
    let vector = create_vector(4242, DEFAULT_DIMENSIONS);

    c.bench_function("encode_1536", |b| {
        b.iter(|| bq.encode(black_box(&vector)).unwrap())
    });
}

fn bench_distance(c: &mut Criterion) {
    let bq = BinaryQuantizer::new(DEFAULT_DIMENSIONS);
    let a = bq.encode(&create_vector(1, DEFAULT_DIMENSIONS)).unwrap();
    let b = bq.encode(&create_vector(2, DEFAULT_DIMENSIONS)).unwrap();

    c.bench_function("hamming_1536", |bench| {
        bench.iter(|| hamming_distance(black_box(&a), black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_fit, bench_encode, bench_distance);
criterion_main!(benches);
