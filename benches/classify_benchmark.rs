//! Benchmarks for kbpress classification performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test the line classifier and transpiler with synthetic
//! knowledge-base documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kbpress::{LineClassifier, RenderOptions};

/// Creates a synthetic knowledge-base document with the given number of
/// sections.
fn create_test_document(section_count: usize) -> String {
    let mut content = String::new();

    content.push_str("# FILE EASY ACCOUNTANCY - AI ASSISTANT KNOWLEDGE BASE\n");
    content.push_str(&"=".repeat(80));
    content.push('\n');

    for i in 0..section_count {
        content.push_str(&format!("\n# SECTION {}\n", i + 1));
        content.push_str(&"=".repeat(80));
        content.push_str("\n\n## Overview\n");
        content.push_str(
            "Benchmark paragraph with **bold text**, a [link](https://example.com/page/), \
             and `inline code` to exercise every translation pass.\n",
        );
        for j in 0..10 {
            content.push_str(&format!("- **Item {}**: bulleted detail line\n", j + 1));
        }
        for j in 0..5 {
            content.push_str(&format!("{}. Numbered detail line\n", j + 1));
        }
    }

    content
}

/// Benchmark single-line classification per rule.
fn bench_line_classification(c: &mut Criterion) {
    let classifier = LineClassifier::new();

    c.bench_function("classify_heading", |b| {
        b.iter(|| classifier.classify_line(black_box("## Service Categories")));
    });

    c.bench_function("classify_bullet_with_markup", |b| {
        b.iter(|| {
            classifier.classify_line(black_box(
                "- **Bookkeeping**: from [Pricing](https://example.com/pricing/)",
            ))
        });
    });

    c.bench_function("classify_paragraph_fallback", |b| {
        b.iter(|| {
            classifier.classify_line(black_box(
                "Plain paragraph text with `code` and no other markers present.",
            ))
        });
    });
}

/// Benchmark whole-document classification at various sizes.
fn bench_document_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("document_classification");

    for section_count in [1, 10, 50].iter() {
        let document = create_test_document(*section_count);
        let classifier = LineClassifier::new();

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| classifier.classify(black_box(&document)));
        });
    }

    group.finish();
}

/// Benchmark transpilation of a classified document.
fn bench_transpile(c: &mut Criterion) {
    let document = create_test_document(10);
    let blocks = LineClassifier::new().classify(&document);
    let options = RenderOptions::default();

    c.bench_function("transpile_10_sections", |b| {
        b.iter(|| kbpress::render::transpile(black_box(&blocks), &options));
    });
}

criterion_group!(
    benches,
    bench_line_classification,
    bench_document_classification,
    bench_transpile,
);
criterion_main!(benches);
