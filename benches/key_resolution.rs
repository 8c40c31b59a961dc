// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use folio_i18n::config::Config;
use folio_i18n::i18n::I18n;
use std::hint::black_box;

fn key_resolution_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_resolution");

    let i18n = I18n::new(Some("en".to_string()), &Config::default());

    group.bench_function("resolve_shallow_leaf", |b| {
        b.iter(|| black_box(i18n.tr(black_box("hero.greeting"))));
    });

    group.bench_function("resolve_deep_leaf", |b| {
        b.iter(|| {
            black_box(i18n.tr(black_box(
                "experience.education.softwareEngineering.institution",
            )))
        });
    });

    group.bench_function("resolve_missing_key_fallback", |b| {
        b.iter(|| black_box(i18n.tr(black_box("hero.subtitle.missing"))));
    });

    group.bench_function("resolve_structured_list", |b| {
        b.iter(|| black_box(i18n.resolve(black_box("services.categories"))));
    });

    group.finish();
}

criterion_group!(benches, key_resolution_benchmark);
criterion_main!(benches);
