// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lockstudy::catalog::builtin_catalog;
use lockstudy::render::{highlight_java, render_plain, ViewModel};
use lockstudy::store::{catalog_from_json_str, catalog_to_json_string};
use lockstudy::viewer::{ViewerEvent, ViewerState};

mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.code`, `render.view`, `store.json`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_render(c: &mut Criterion) {
    let catalog = builtin_catalog();

    let mut group = c.benchmark_group("render.code");
    for (index, scenario) in catalog.iter().enumerate() {
        for file in scenario.code() {
            let id = format!("s{}_{}", index + 1, file.name().as_str().to_lowercase());
            let source = file.source().to_owned();
            group.bench_function(id, move |b| {
                b.iter(|| black_box(highlight_java(black_box(&source)).len()))
            });
        }
    }
    let large = catalog
        .iter()
        .flat_map(|scenario| scenario.code().iter().map(|file| file.source()))
        .collect::<Vec<_>>()
        .join("\n")
        .repeat(20);
    group.bench_function("all_sources_x20", move |b| {
        b.iter(|| black_box(highlight_java(black_box(&large)).len()))
    });
    group.finish();

    let mut group = c.benchmark_group("render.view");
    for (id, events) in [
        ("no_selection", vec![]),
        ("selected", vec![ViewerEvent::Select(0)]),
        ("info_panel", vec![ViewerEvent::Select(0), ViewerEvent::ToggleInfo]),
        ("code_panel", vec![ViewerEvent::Select(0), ViewerEvent::ToggleCode]),
    ] {
        let mut state = ViewerState::new();
        for event in events {
            state.apply(event, catalog.len());
        }
        let catalog = catalog.clone();
        group.bench_function(id, move |b| {
            b.iter(|| {
                let view = ViewModel::build(black_box(&catalog), black_box(&state));
                black_box(render_plain(&view).len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("store.json");
    let json = catalog_to_json_string(&catalog).expect("catalog_to_json_string");
    let export_catalog = catalog.clone();
    group.bench_function("export", move |b| {
        b.iter(|| {
            black_box(catalog_to_json_string(black_box(&export_catalog)).expect("export").len())
        })
    });
    group.bench_function("import", move |b| {
        b.iter(|| black_box(catalog_from_json_str(black_box(&json)).expect("import").len()))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
