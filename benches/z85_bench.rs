use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic pseudo random bytes so runs are comparable
fn sample(size: usize) -> Vec<u8> {
    let mut state: u64 = 567537357543;
    (0..size)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as u8
        })
        .collect()
}

pub fn encode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for size in [1, 4, 16, 64, 256, 1024, 4096].iter() {
        let data = sample(*size);
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::new("alloc", size), size, |b, &_size| {
            b.iter(|| z85::encode(black_box(&data)))
        });

        let mut out = vec![0u8; z85::encoded_len(*size)];
        group.bench_with_input(BenchmarkId::new("reuse", size), size, |b, &_size| {
            b.iter(|| z85::encode_to(black_box(&data), &mut out).unwrap())
        });
    }
    group.finish();
}

pub fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    for size in [1, 4, 16, 64, 256, 1024, 4096].iter() {
        let encoded = z85::encode(sample(*size));
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("alloc", size), size, |b, &_size| {
            b.iter(|| z85::decode(black_box(&encoded)).unwrap())
        });

        let mut out = vec![0u8; z85::decoded_cap(encoded.len()).unwrap()];
        group.bench_with_input(BenchmarkId::new("reuse", size), size, |b, &_size| {
            b.iter(|| z85::decode_to(black_box(&encoded), &mut out).unwrap())
        });
    }
    group.finish();
}

pub fn megabyte_benchmark(c: &mut Criterion) {
    let data = sample(1 << 20);
    let encoded = z85::encode_to_string(&data);
    let mut group = c.benchmark_group("1mb");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode-to-string", |b| {
        b.iter(|| z85::encode_to_string(black_box(&data)))
    });
    group.bench_function("decode-str", |b| {
        b.iter(|| z85::decode_str(black_box(&encoded)).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    encode_benchmark,
    decode_benchmark,
    megabyte_benchmark,
);
criterion_main!(benches);
