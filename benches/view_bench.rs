//! Benchmarks for CRM Studio view derivation
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crm_studio::kpi::{catalog, KpiStore};
use crm_studio::render::render_view;
use crm_studio::state::{SelectionEvent, SelectionState};
use crm_studio::view::{compose, filter_integrations};

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for query in ["", "sales", "VARIANTS", "zzz"] {
        group.bench_function(format!("query_{:?}", query), |b| {
            b.iter(|| filter_integrations(black_box(query), catalog()))
        });
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let store = KpiStore::seeded();

    for id in ["salesforce_cti", "salesforce_sidebar", "copper"] {
        group.bench_function(id, |b| b.iter(|| compose(black_box(id), &store)));
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let store = KpiStore::seeded();
    let events = vec![
        SelectionEvent::SetQuery("s".to_string()),
        SelectionEvent::SetQuery("sal".to_string()),
        SelectionEvent::Select("salesforce_sidebar".to_string()),
        SelectionEvent::SetQuery(String::new()),
        SelectionEvent::Select("copper".to_string()),
        SelectionEvent::Select("salesforce_cti".to_string()),
    ];

    c.bench_function("session_replay", |b| {
        b.iter(|| {
            let mut state = SelectionState::default();
            for event in events.iter().cloned() {
                state = state.apply(catalog(), event).unwrap();
                black_box(state.visible(catalog()));
                black_box(state.view(&store));
            }
        })
    });

    c.bench_function("render_text", |b| {
        let integration = catalog()[0];
        let view = compose(integration.id, &store);
        b.iter(|| render_view(black_box(&integration), &view))
    });
}

criterion_group!(benches, bench_filter, bench_compose, bench_session);
criterion_main!(benches);
