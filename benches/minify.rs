//! Minification Benchmarks
//!
//! **Purpose:** Measure throughput of the rule chain and the full pipeline
//!
//! **Regression Threshold:** >15% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench minify
//! cargo bench --bench minify -- --save-baseline main
//! cargo bench --bench minify -- --baseline main
//! ```
//!
//! **What's Being Measured:**
//! 1. `minify/<size>` - Rule chain only, on stylesheets of increasing size
//! 2. `pipeline run (at ceiling)` - Blank check, truncation, minify and size report
//! 3. `pipeline run (over ceiling)` - Same, with truncation taking effect
//!
//! **Performance Notes:**
//! - Each rule is a full pass over the text, so cost is linear in input size
//! - Regexes are compiled once per process and excluded after warm-up

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use css_slim::pipeline::{minify, MinifyPipeline, PipelineConfig, MAX_CHARS};
use std::hint::black_box;

const RULE_BLOCK: &str = "/* card */\n.card , .panel {\n  margin : 0 auto ;\n  padding: 8px 16px;\n  color: #333;\n}\n\n";

fn stylesheet(bytes: usize) -> String {
    RULE_BLOCK.repeat(bytes / RULE_BLOCK.len() + 1)
}

fn bench_rule_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("minify");
    for size in [1_024usize, 16 * 1_024, MAX_CHARS] {
        let css = stylesheet(size);
        group.throughput(Throughput::Bytes(css.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &css, |b, css| {
            b.iter(|| black_box(minify(black_box(css))));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = MinifyPipeline::new(PipelineConfig::default());
    let at_ceiling: String = stylesheet(MAX_CHARS).chars().take(MAX_CHARS).collect();
    let over_ceiling = stylesheet(MAX_CHARS * 2);

    c.bench_function("pipeline run (at ceiling)", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&at_ceiling))).unwrap());
    });

    c.bench_function("pipeline run (over ceiling)", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&over_ceiling))).unwrap());
    });
}

criterion_group!(benches, bench_rule_chain, bench_pipeline);
criterion_main!(benches);
