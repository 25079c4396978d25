use base64_rfc::{decode, decode_into, decoded_capacity, encode, encode_into, encoded_len};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = sample(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_encode_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_into");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = sample(*size);
        let mut dest = vec![0u8; encoded_len(*size) + 1];

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode_into(black_box(&mut dest), black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in SIZES.iter() {
        let encoded = encode(&sample(*size));

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_into(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_into");

    for size in SIZES.iter() {
        let encoded = encode(&sample(*size));
        let mut dest = vec![0u8; decoded_capacity(encoded.len())];

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_into(black_box(&mut dest), black_box(encoded.as_bytes())).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_encode_into,
    bench_decode,
    bench_decode_into
);
criterion_main!(benches);
