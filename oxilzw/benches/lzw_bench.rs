//! Performance benchmarks for oxilzw
//!
//! - Compression/decompression throughput
//! - Scaling with input size (the dictionary is never capped)
//! - Cost of the arena dictionary on runs that build long entries

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxilzw::{LzwConfig, LzwDecoder, LzwEncoder, compress, decompress};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes the same (longest dictionary chains)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// No patterns (dictionary grows by one entry per ~1 byte)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Short repeating phrase
    pub fn repetitive(size: usize) -> Vec<u8> {
        b"TOBEORNOTTOBEORTOBEORNOT"
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect()
    }

    /// English-like text
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }
}

const SIZES: [(&str, usize); 3] = [
    ("4KB", 4 * 1024),
    ("64KB", 64 * 1024),
    ("1MB", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("repetitive", test_data::repetitive as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let codes = compress(black_box(data), LzwConfig::BYTE).unwrap();
                    black_box(codes);
                });
            });
        }
    }

    group.finish();
}

fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let codes = compress(&generator(size), LzwConfig::BYTE).unwrap();
            let id = format!("{}/{}", size_name, pattern_name);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &codes, |b, codes| {
                b.iter(|| {
                    let data = decompress(black_box(codes), LzwConfig::BYTE).unwrap();
                    black_box(data);
                });
            });
        }
    }

    group.finish();
}

/// Reusing one encoder/decoder pair versus fresh instances per call
fn bench_instance_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("instance_reuse");
    let data = test_data::text_like(64 * 1024);

    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("fresh", |b| {
        b.iter(|| {
            let codes = compress(black_box(&data), LzwConfig::BYTE).unwrap();
            black_box(decompress(&codes, LzwConfig::BYTE).unwrap());
        });
    });

    let mut encoder = LzwEncoder::new(LzwConfig::BYTE).unwrap();
    let mut decoder = LzwDecoder::new(LzwConfig::BYTE).unwrap();
    group.bench_function("reused", |b| {
        b.iter(|| {
            let codes = encoder.encode(black_box(&data)).unwrap();
            black_box(decoder.decode(&codes).unwrap());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_instance_reuse,
);
criterion_main!(benches);
