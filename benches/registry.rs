// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for registry operations.
//!
//! Measures the performance of:
//! - Inserting distinct toasts
//! - Refreshing on a colliding dedup key
//! - Reconciling the overlay timer set against a populated registry

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toasts::domain::toast::ToastKind;
use iced_toasts::registry::Registry;
use iced_toasts::ui::toasts::Overlay;
use std::hint::black_box;
use std::time::Instant;

/// Benchmark inserting distinct toasts.
fn bench_add_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("add_distinct_32", |b| {
        b.iter(|| {
            let mut registry = Registry::new();
            for i in 0..32 {
                registry.add(format!("toast-{i}"), ToastKind::Info, None);
            }
            black_box(registry.len());
        });
    });

    group.finish();
}

/// Benchmark the dedup refresh path against a populated registry.
fn bench_add_colliding(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let mut registry = Registry::new();
    for i in 0..32 {
        registry.add(format!("toast-{i}"), ToastKind::Info, None);
    }

    group.bench_function("refresh_colliding", |b| {
        b.iter(|| {
            registry.add("toast-16", ToastKind::Info, None);
            black_box(registry.len());
        });
    });

    group.finish();
}

/// Benchmark overlay reconciliation over a full snapshot.
fn bench_overlay_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let mut registry = Registry::new();
    for i in 0..32 {
        registry.add(format!("toast-{i}"), ToastKind::Info, None);
    }

    group.bench_function("overlay_sync_32", |b| {
        b.iter(|| {
            let mut overlay = Overlay::new();
            overlay.sync(&registry, Instant::now());
            black_box(overlay.timer_count());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_distinct,
    bench_add_colliding,
    bench_overlay_sync
);
criterion_main!(benches);
