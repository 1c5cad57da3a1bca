#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use json_value::Value;

const SMALL: &str = r#"{"id":1,"name":"widget","active":true,"tags":["a","b","c"]}"#;

fn large_array(n: usize) -> String {
    let items: Vec<String> = (0..n).map(|i| i.to_string()).collect();
    format!("[{}]", items.join(","))
}

fn bench_parse(c: &mut Criterion) {
    let large = large_array(10_000);
    let mut group = c.benchmark_group("parse");
    group.bench_function("small_object", |b| {
        b.iter(|| Value::parse(black_box(SMALL)).unwrap());
    });
    group.bench_function("large_array", |b| {
        b.iter(|| Value::parse(black_box(large.as_str())).unwrap());
    });
    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let small = Value::parse(SMALL).unwrap();
    let large = Value::parse(large_array(10_000).as_str()).unwrap();
    let mut group = c.benchmark_group("serialize");
    group.bench_function("small_object", |b| {
        b.iter(|| black_box(&small).to_json_bytes());
    });
    group.bench_function("large_array", |b| {
        b.iter(|| black_box(&large).to_json_bytes());
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize);
criterion_main!(benches);
