use criterion::{Criterion, criterion_group, criterion_main};
use fbchart::api::{ChartConfig, compose_frame};
use fbchart::core::{MarkerRecord, VerticalBoundsPolicy};
use fbchart::input::parse_markers;
use serde_json::{Value, json};
use std::hint::black_box;

const SYMBOLS: [&str; 6] = ["E", "A", "D", "G", "B", "e"];

fn generated_input(count: usize) -> String {
    let entries: Vec<Value> = (0..count)
        .map(|i| {
            if i % 3 == 0 {
                json!({"fret": i % 24, "string": SYMBOLS[i % 6], "color": "tab:orange"})
            } else {
                json!({"fret": (i % 24) as f64 + 0.5, "string": (i % 6) as f64})
            }
        })
        .collect();
    Value::Array(entries).to_string()
}

fn bench_parse_markers_10k(c: &mut Criterion) {
    let raw = generated_input(10_000);

    c.bench_function("parse_markers_10k", |b| {
        b.iter(|| {
            let _ = parse_markers(black_box(&raw)).expect("generated input is valid");
        })
    });
}

fn bench_compose_frame_10k(c: &mut Criterion) {
    let markers: Vec<MarkerRecord> = parse_markers(&generated_input(10_000)).expect("valid input");

    c.bench_function("compose_frame_10k_fixed_slots", |b| {
        b.iter(|| {
            let _ = compose_frame(black_box(markers.clone()), ChartConfig::default())
                .expect("frame composition should succeed");
        })
    });

    let data_driven = ChartConfig::default().with_vertical_bounds(VerticalBoundsPolicy::DataDriven);
    c.bench_function("compose_frame_10k_data_driven", |b| {
        b.iter(|| {
            let _ = compose_frame(black_box(markers.clone()), data_driven.clone())
                .expect("frame composition should succeed");
        })
    });
}

criterion_group!(benches, bench_parse_markers_10k, bench_compose_frame_10k);
criterion_main!(benches);
