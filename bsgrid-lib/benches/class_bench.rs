extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bsgrid_lib::{ColumnSizeBuilder, ColumnSizeRule, CssBuilder, LayoutSpec};

fn bench_chained_builder(c: &mut Criterion) {
    let builder = ColumnSizeBuilder::empty()
        .s12()
        .s6()
        .on_tablet()
        .s4()
        .on_laptop()
        .auto()
        .on_widescreen();

    c.bench_function("chained_to_class", |b| {
        b.iter(|| black_box(&builder).to_class())
    });
}

fn bench_many_rules(c: &mut Criterion) {
    let rules: Vec<ColumnSizeRule> = (0..10_000)
        .map(|i| ColumnSizeRule::new(((i % 14) + 1).to_string(), None))
        .collect();
    let builder = ColumnSizeBuilder::from_rules(&rules);

    c.bench_function("many_rules_to_class", |b| {
        b.iter(|| black_box(&builder).to_class())
    });
}

fn bench_layout_document(c: &mut Criterion) {
    let json = r#"{ "size": "12 md:6 xl:4", "offset": "md:3 xl:4", "order": "lg:first" }"#;

    c.bench_function("layout_document", |b| {
        b.iter(|| {
            let spec = LayoutSpec::from_json(black_box(json)).unwrap();
            spec.to_layout().unwrap().to_class()
        })
    });
}

criterion_group!(
    benches,
    bench_chained_builder,
    bench_many_rules,
    bench_layout_document
);
criterion_main!(benches);
