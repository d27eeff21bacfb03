//! Benchmarks for markup compilation.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use scribe_markup::{compile, format};

/// Generate markup with the given number of sections.
fn generate_markup(sections: usize) -> String {
    let mut markup = String::from("Title:: Benchmark | Subtitle:: Generated markup | ");
    for i in 0..sections {
        markup.push_str(&format!("H2:: Section {i} | "));
        markup.push_str(&format!(
            "Text:: Paragraph {i} with **bold**, *italic*, `code` and a [link](https://example.com/{i}). | "
        ));
        markup.push_str("List:: • one • two • three | NumberList:: 1. first 2. second | ");
        markup.push_str(&format!("LaTeX:: x_{i} = {i} | Footnote:: [{i}] note {i} | "));
    }
    markup
}

fn bench_format_inline(c: &mut Criterion) {
    let text = "Mix of **bold**, *italic*, ~~gone~~, `code` and [links](https://example.com).";
    c.bench_function("format_inline_all_markers", |b| {
        b.iter(|| format(text));
    });
}

fn bench_compile_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_markup");
    for sections in [1, 10, 100] {
        let markup = generate_markup(sections);
        group.throughput(Throughput::Bytes(markup.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &markup, |b, markup| {
            b.iter(|| compile(markup));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_format_inline, bench_compile_varying_sizes);
criterion_main!(benches);
