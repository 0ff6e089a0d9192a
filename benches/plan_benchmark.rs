//! Benchmarks for deckplan classification and assignment.
//!
//! Run with: cargo bench
//!
//! These benchmarks use a synthetic deck cycling through every kind of
//! slide the classifier recognizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deckplan::{
    assign, AssignOptions, Classifier, ClassifierOptions, ContentType, DiagnosticReport,
    LegacySlide, SlideCatalog,
};

/// Creates synthetic slide records for a deck of the given size.
fn create_test_records(slide_count: usize) -> Vec<LegacySlide> {
    let samples: [(&str, &str); 8] = [
        ("Q3 Review", "Northwind Traders"),
        ("Key Metrics", "87% retention\n3x growth\n$4.2M ARR\n120 customers"),
        ("Getting Started", "1. Install the agent\n2. Connect your data\n3. Invite the team"),
        ("Why it matters", "- Faster onboarding\n- Fewer support tickets\n- Happier customers"),
        ("", "\"The rollout took a week, not a quarter.\"\n- Dana Reyes, CTO"),
        ("Build vs Buy", "Build: full control, long timeline\nBuy: fast start, less control"),
        ("Part Two", ""),
        ("Thank you", "Questions?"),
    ];

    (0..slide_count)
        .map(|i| {
            let (title, body) = samples[i % samples.len()];
            LegacySlide::new(title, body)
        })
        .collect()
}

fn create_catalog() -> SlideCatalog {
    SlideCatalog::new()
        .with_slot(ContentType::TitleOpening, 1)
        .with_slot(ContentType::BulletList, 4)
        .with_slot(ContentType::BulletList, 5)
        .with_slot(ContentType::NumberedStep, 6)
        .with_slot(ContentType::SectionHeader, 2)
        .with_slot(ContentType::Closing, 12)
}

/// Benchmark classification at various deck sizes, parallel and sequential.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for slide_count in [10, 100, 1000].iter() {
        let records = create_test_records(*slide_count);

        group.bench_function(format!("{}_slides_parallel", slide_count), |b| {
            let classifier = Classifier::default();
            b.iter(|| classifier.classify_records(black_box(records.clone()), "deck.pptx", "pptx"));
        });

        group.bench_function(format!("{}_slides_sequential", slide_count), |b| {
            let classifier = Classifier::new(ClassifierOptions::new().sequential());
            b.iter(|| classifier.classify_records(black_box(records.clone()), "deck.pptx", "pptx"));
        });
    }

    group.finish();
}

/// Benchmark layout assignment on a classified deck.
fn bench_assignment(c: &mut Criterion) {
    let doc = Classifier::default().classify_records(create_test_records(200), "deck.pptx", "pptx");
    let catalog = create_catalog();
    let report = DiagnosticReport::default();

    c.bench_function("assign_200_slides", |b| {
        b.iter(|| {
            assign::assign(
                black_box(&doc),
                &report,
                &catalog,
                AssignOptions::default(),
            )
            .unwrap()
        });
    });

    c.bench_function("assign_200_slides_cookbook", |b| {
        b.iter(|| {
            assign::assign(
                black_box(&doc),
                &report,
                &catalog,
                AssignOptions::new().cookbook_only(),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_classification, bench_assignment);
criterion_main!(benches);
