use criterion::{criterion_group, criterion_main, Criterion};
use keli_show::{render, show, Value, Variant};
use std::hint::black_box;

/// A list of 1000 `Point` variants.
fn wide_value() -> Value {
    Value::Sequence(
        (0..1000)
            .map(|i| {
                Value::from(
                    Variant::new("Point")
                        .with_field("x", i)
                        .with_field("y", i * 2)
                        .with_field("label", format!("p{i}")),
                )
            })
            .collect(),
    )
}

/// `Some` nested 100 levels deep around a record.
fn deep_value() -> Value {
    let mut value = Value::record([("leaf", Value::from(true))]);
    for _ in 0..100 {
        value = Variant::new("Some").with_field("value", value).into();
    }
    value
}

fn bench_render(c: &mut Criterion) {
    let wide = wide_value();
    let deep = deep_value();
    let wide_json = serde_json::to_string(&wide).unwrap();

    c.bench_function("render_wide", |b| b.iter(|| render(black_box(&wide))));
    c.bench_function("render_deep", |b| b.iter(|| render(black_box(&deep))));
    c.bench_function("show_wide_json", |b| {
        b.iter(|| show(black_box(&wide_json)).unwrap())
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
