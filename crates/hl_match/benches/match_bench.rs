use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hl_core::config::MatchConfigV1;
use hl_core::types::{BoundingBox, SourceEntry};
use hl_match::{create_mapping, TextIndex};
use serde_json::json;

fn synthetic_entries(rows: usize) -> Vec<SourceEntry> {
    (0..rows)
        .map(|i| SourceEntry {
            text: format!("ITEM-{i:05} Industrial Widget"),
            bounds: BoundingBox {
                x: 10.0,
                y: 20.0 * i as f64,
                width: 480.0,
                height: 18.0,
                page: Some((i / 40) as i64 + 1),
            },
            path: format!("document.items.[{i}].description"),
        })
        .collect()
}

fn synthetic_payload(rows: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..rows)
        .map(|i| json!({ "Material": format!("ITEM-{i:05} Industrial Widget") }))
        .collect();
    json!({ "to_Item": items })
}

fn index_bench(c: &mut Criterion) {
    let entries = synthetic_entries(500);
    c.bench_function("index_build_500_entries", |b| {
        b.iter(|| TextIndex::build(black_box(entries.clone())));
    });
}

fn mapping_bench(c: &mut Criterion) {
    let index = TextIndex::build(synthetic_entries(500));
    let payload = synthetic_payload(500);
    let cfg = MatchConfigV1::default_v1();
    c.bench_function("create_mapping_500_leaves", |b| {
        b.iter(|| create_mapping(black_box(&payload), &index, &cfg));
    });
}

criterion_group!(benches, index_bench, mapping_bench);
criterion_main!(benches);
