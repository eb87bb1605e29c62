use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::io::{Read, Write};

use multibase_rs::{Encoding, Reader, Writer, decode, encode};

/// Create test data of the given size for benchmarking.
fn make_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn size_label(size: usize) -> String {
    if size >= 1024 * 1024 {
        format!("{}MB", size / (1024 * 1024))
    } else {
        format!("{}KB", size / 1024)
    }
}

const FAST: [(&str, Encoding); 4] = [
    ("base16", Encoding::BASE16),
    ("base32", Encoding::BASE32),
    ("base64", Encoding::BASE64),
    ("base64urlpad", Encoding::BASE64_URL_PAD),
];

fn bench_encode(c: &mut Criterion) {
    let sizes = [1024, 64 * 1024, 1024 * 1024];

    let mut group = c.benchmark_group("encode");
    for &size in &sizes {
        let data = make_test_data(size);
        let label = size_label(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, encoding) in FAST {
            group.bench_with_input(BenchmarkId::new(name, &label), &data, |b, data| {
                b.iter(|| encode(encoding, data).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let sizes = [1024, 64 * 1024, 1024 * 1024];

    let mut group = c.benchmark_group("decode");
    for &size in &sizes {
        let data = make_test_data(size);
        let label = size_label(size);
        group.throughput(Throughput::Bytes(size as u64));

        for (name, encoding) in FAST {
            let tagged = encode(encoding, &data).unwrap();
            group.bench_with_input(BenchmarkId::new(name, &label), &tagged, |b, tagged| {
                b.iter(|| decode(tagged).unwrap());
            });
        }
    }
    group.finish();
}

/// The big-number bases are quadratic, so they get much smaller inputs.
fn bench_basex(c: &mut Criterion) {
    let sizes = [32, 256, 1024];

    let mut group = c.benchmark_group("basex");
    for &size in &sizes {
        let data = make_test_data(size);
        let label = format!("{size}B");
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("base58btc", &label), &data, |b, data| {
            b.iter(|| encode(Encoding::BASE58_BTC, data).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("base36", &label), &data, |b, data| {
            b.iter(|| encode(Encoding::BASE36, data).unwrap());
        });
    }
    group.finish();
}

fn bench_stream(c: &mut Criterion) {
    let size = 10 * 1024 * 1024;
    let data = make_test_data(size);

    let mut group = c.benchmark_group("stream");
    group.sample_size(10);
    group.throughput(Throughput::Bytes(size as u64));

    for (name, encoding) in FAST {
        group.bench_with_input(BenchmarkId::new("write", name), &data, |b, data| {
            b.iter(|| {
                let mut writer = Writer::new(encoding, Vec::new()).unwrap();
                for piece in data.chunks(8 * 1024) {
                    writer.write_all(piece).unwrap();
                }
                writer.finish().unwrap()
            });
        });

        let tagged = encode(encoding, &data).unwrap();
        group.bench_with_input(BenchmarkId::new("read", name), &tagged, |b, tagged| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size);
                Reader::new(tagged.as_slice()).read_to_end(&mut out).unwrap();
                out
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_basex, bench_stream);
criterion_main!(benches);
