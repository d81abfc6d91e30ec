//! Benchmarks for mdtex conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks time uncached conversion of synthetic documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mdtex::to_latex;

/// Creates a synthetic Markdown document with the given number of sections.
fn create_test_document(section_count: usize) -> String {
    let mut content = String::new();
    for i in 0..section_count {
        content.push_str(&format!("# Section {}\n\n", i + 1));
        content.push_str(
            "A paragraph with *emphasis*, **strong** text, `inline_code`, \
             and a [link](https://example.com/page).\n\n",
        );
        content.push_str("- first item\n- second item\n- third item\n\n");
        content.push_str("```rust\nfn compute(n: u32) -> u32 {\n    n * 31\n}\n```\n\n");
        content.push_str("The relation $$x_i = y^2$$ holds whenever $i > 0$.\n\n");
        content.push_str("| Key | Value |\n|-----|-------|\n| a | 1 |\n| b | 2 |\n\n");
    }
    content
}

fn bench_convert_small(c: &mut Criterion) {
    let doc = create_test_document(5);
    c.bench_function("convert_small", |b| {
        b.iter(|| to_latex(black_box(&doc)).unwrap())
    });
}

fn bench_convert_chunked(c: &mut Criterion) {
    // Large enough to cross the chunking threshold
    let doc = create_test_document(150);
    assert!(doc.chars().count() > 30_000);
    c.bench_function("convert_chunked", |b| {
        b.iter(|| to_latex(black_box(&doc)).unwrap())
    });
}

fn bench_cache_key(c: &mut Criterion) {
    let doc = create_test_document(150);
    c.bench_function("cache_key", |b| {
        b.iter(|| mdtex::cache_key(black_box(&doc)))
    });
}

criterion_group!(
    benches,
    bench_convert_small,
    bench_convert_chunked,
    bench_cache_key
);
criterion_main!(benches);
