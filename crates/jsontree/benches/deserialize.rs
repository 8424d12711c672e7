#![allow(missing_docs)]
//! Benchmark comparison of jsontree and `serde_json`.
//!
//! Each dataset is generated in memory and parsed once per iteration, both
//! into a `jsontree::Node` and into a `serde_json::Value`. The `_read`
//! variants also walk the tree and coerce every number, which is where the
//! deferred numeric parsing is paid for.

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{
    BenchmarkGroup, Criterion, Throughput, criterion_group, criterion_main, measurement::WallTime,
};
use jsontree::{Kind, Node, ParserOptions};
use serde_json::Value as SerdeValue;

struct Dataset {
    name: &'static str,
    build: fn() -> String,
}

fn ints_array() -> String {
    let items: Vec<String> = (0..10_000i64).map(|i| (i * 7919 - 40_000).to_string()).collect();
    format!("[{}]", items.join(","))
}

fn floats_array() -> String {
    let items: Vec<String> = (0..10_000).map(|i| format!("{}.{}e-3", i, i % 97)).collect();
    format!("[{}]", items.join(","))
}

fn string_array() -> String {
    let items: Vec<String> = (0..5_000)
        .map(|i| format!(r#""item {i} with \"escapes\" and ünïcödé""#))
        .collect();
    format!("[{}]", items.join(","))
}

fn records() -> String {
    let mut out = String::from("[");
    for i in 0..2_000 {
        if i > 0 {
            out.push(',');
        }
        write!(
            out,
            r#"{{"id": {i}, "name": "record-{i}", "active": {}, "score": {}.5, "tags": ["a", "b", null], "meta": {{"depth": {{"level": {}}}}}}}"#,
            i % 2 == 0,
            i % 100,
            i % 5
        )
        .unwrap();
    }
    out.push(']');
    out
}

fn nested() -> String {
    // serde_json stops at 128 levels.
    let depth = 60;
    let mut out = String::new();
    for _ in 0..depth {
        out.push_str(r#"{"a": ["#);
    }
    out.push('1');
    for _ in 0..depth {
        out.push_str("]}");
    }
    out
}

fn sum_numbers(node: &Node) -> f64 {
    match node.kind() {
        Kind::Numeric => node.get::<f64>().unwrap(),
        Kind::Array | Kind::Object => node.iter().map(sum_numbers).sum(),
        _ => 0.0,
    }
}

fn jsontree_value(json: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function("jsontree_value", |b| {
        b.iter(|| {
            let node = jsontree::deserialize(black_box(json)).unwrap();
            black_box(node)
        });
    });
}

fn jsontree_strict(json: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    let options = ParserOptions {
        strict_numbers: true,
        reject_duplicate_keys: true,
        max_depth: Some(1024),
    };
    group.bench_function("jsontree_strict", |b| {
        b.iter(|| {
            let node = jsontree::deserialize_with(black_box(json), options).unwrap();
            black_box(node)
        });
    });
}

fn jsontree_read(json: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function("jsontree_read", |b| {
        b.iter(|| {
            let node = jsontree::deserialize(black_box(json)).unwrap();
            black_box(sum_numbers(&node))
        });
    });
}

fn serde_value(json: &str, group: &mut BenchmarkGroup<'_, WallTime>) {
    group.bench_function("serde_value", |b| {
        b.iter(|| {
            let value: SerdeValue = serde_json::from_str(black_box(json)).unwrap();
            black_box(value)
        });
    });
}

fn bench_dataset(cfg: &Dataset, c: &mut Criterion) {
    let json = (cfg.build)();
    let mut group = c.benchmark_group(cfg.name);
    group.measurement_time(Duration::from_secs(3));
    group.warm_up_time(Duration::from_secs(1));
    group.throughput(Throughput::Bytes(json.len() as u64));
    jsontree_value(&json, &mut group);
    jsontree_strict(&json, &mut group);
    jsontree_read(&json, &mut group);
    serde_value(&json, &mut group);
    group.finish();
}

pub fn deserialize_benches(c: &mut Criterion) {
    let datasets = [
        Dataset {
            name: "ints_array",
            build: ints_array,
        },
        Dataset {
            name: "floats_array",
            build: floats_array,
        },
        Dataset {
            name: "string_array",
            build: string_array,
        },
        Dataset {
            name: "records",
            build: records,
        },
        Dataset {
            name: "nested",
            build: nested,
        },
    ];
    for dataset in &datasets {
        bench_dataset(dataset, c);
    }
}

criterion_group!(benches, deserialize_benches);
criterion_main!(benches);
