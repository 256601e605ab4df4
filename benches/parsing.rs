//! Criterion benchmarks for address parsing and comparison.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ipvx::{FamilyKind, equal, parse};

/// Benchmark: parse with varying families and field shapes
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let test_cases = [
        ("ipv4", FamilyKind::Ipv4, "192.168.1.100"),
        ("ipv4_padded", FamilyKind::Ipv4, "   0192.  0168.  001. 0100  "),
        ("ipv6_full", FamilyKind::Ipv6, "fce6:d1ad:ca44:9625:e589:3806:0248:8591"),
        ("ipv6_short", FamilyKind::Ipv6, "2001:4860:4860::8888"),
        ("ipv6_blank", FamilyKind::Ipv6, "::"),
    ];

    for (name, kind, text) in test_cases {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("address", name), &text, |b, text| {
            b.iter(|| parse(black_box(text), kind));
        });
    }

    group.finish();
}

/// Benchmark: equality on the fast text path and the segment path
fn bench_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("equal");

    let pairs = [
        ("same_text", "2001:4860:4860::8888", "2001:4860:4860::8888"),
        ("padded", "2001:4860:4860::8888", "2001:4860:4860:0000:8888:0:0:0"),
        (
            "mismatch",
            "fce6:d1ad:ca44:e589:3806:9625:248:8591",
            "fce6:d1ad:ca44:9625:e589:3806:0248:8591",
        ),
    ];

    for (name, a, b) in pairs {
        let a = parse(a, FamilyKind::Ipv6).expect("valid address");
        let b = parse(b, FamilyKind::Ipv6).expect("valid address");
        group.bench_function(name, |bench| {
            bench.iter(|| equal(black_box(&a), Some(black_box(&b))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_equal);
criterion_main!(benches);
