//! Token decoding performance benchmarks
//!
//! Benchmarks decoding and verification with different payload sizes.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use jwtmint::*;
use serde_json::json;

fn token_with_payload_size(engine: &TokenEngine, payload_size: usize) -> String {
    let payload = json!({
        "sub": "user123",
        "iss": "https://example.com",
        "iat": 1516239022,
        "data": "x".repeat(payload_size),
    });
    engine.encode(&payload).unwrap()
}

fn bench_decode_by_size(c: &mut Criterion) {
    let engine = TokenEngine::new("test-secret-key");
    let mut group = c.benchmark_group("decode_by_size");

    for size in [64, 256, 1024, 4096, 16384] {
        let token = token_with_payload_size(&engine, size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| engine.decode(black_box(&token)));
        });
    }

    group.finish();
}

fn bench_verify_by_size(c: &mut Criterion) {
    let engine = TokenEngine::new("test-secret-key");
    let mut group = c.benchmark_group("verify_by_size");

    for size in [64, 1024, 16384] {
        let token = token_with_payload_size(&engine, size);
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{size}"), |b| {
            b.iter(|| engine.verify(black_box(&token)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode_by_size, bench_verify_by_size);
criterion_main!(benches);
