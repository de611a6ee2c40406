// ABOUTME: Criterion benchmarks for food safety evaluation and progress aggregation
// ABOUTME: Measures single-item evaluation, parallel batch evaluation, and range summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the intelligence crate hot paths.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutriguard::intelligence::{
    AssessmentContext, DateRange, FoodSafetyConfig, FoodSafetyEvaluator, ProgressAggregator,
};
use nutriguard::models::{DailyNutrientTotals, GoalProfile, NutrientProfile, SafetyBreakdown};

fn sample_profile(seed: u32) -> NutrientProfile {
    let scale = f64::from(seed % 10 + 1);
    NutrientProfile::try_from_pairs([
        ("ENERC_KCAL", 120.0 * scale),
        ("PROCNT", 4.0 * scale),
        ("CHOCDF", 18.0 * scale),
        ("FAT", 3.5 * scale),
        ("FASAT", 1.2 * scale),
        ("SUGAR.added", 2.5 * scale),
        ("NA", 150.0 * scale),
        ("K", 200.0),
        ("FIBTG", 2.0),
    ])
    .unwrap()
}

fn sample_context() -> AssessmentContext {
    AssessmentContext::builder()
        .age_years(34)
        .item_label("whole grain granola bar")
        .serving_weight_g(45.0)
        .build()
        .unwrap()
}

fn bench_evaluate(c: &mut Criterion) {
    let config = FoodSafetyConfig::default();
    let evaluator = FoodSafetyEvaluator::new(&config);
    let profile = sample_profile(3);
    let context = sample_context();

    c.bench_function("evaluate_single_item", |b| {
        b.iter(|| evaluator.evaluate(black_box(&profile), black_box(&context)));
    });
}

fn bench_evaluate_batch(c: &mut Criterion) {
    let config = FoodSafetyConfig::default();
    let evaluator = FoodSafetyEvaluator::new(&config);
    let mut group = c.benchmark_group("evaluate_batch");

    for count in [10_u32, 100, 1_000] {
        let items: Vec<_> = (0..count)
            .map(|seed| (sample_profile(seed), sample_context()))
            .collect();
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| evaluator.evaluate_batch(black_box(items)));
        });
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let totals: Vec<DailyNutrientTotals> = (0_u32..365)
        .map(|offset| DailyNutrientTotals {
            calories: 1800.0 + f64::from(offset % 7) * 50.0,
            protein: 90.0,
            sodium: 2100.0,
            ..DailyNutrientTotals::empty(start + Duration::days(i64::from(offset)))
        })
        .collect();
    let goal = GoalProfile {
        calories: 2000.0,
        protein: 100.0,
        sodium: 2300.0,
        ..GoalProfile::default()
    };
    let range = DateRange::new(start, start + Duration::days(364)).unwrap();
    let breakdown = SafetyBreakdown::new(800, 150, 50);
    let aggregator = ProgressAggregator::default();

    c.bench_function("summarize_year_with_missing_days", |b| {
        b.iter(|| {
            aggregator.summarize(
                black_box(&totals),
                black_box(&goal),
                range,
                true,
                black_box(&breakdown),
            )
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_evaluate_batch, bench_summarize);
criterion_main!(benches);
