// Criterion benchmarks for lamon-la.
//
// Uses the small fixture dictionary and model from the integration tests,
// so no data files are needed.
//
// Run:
//   cargo bench -p lamon-la

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lamon_core::TagStyle;
use lamon_la::{BatchOptions, TagOptions, Tagger, normalize, tokenizer};
use lamon_nn::ModelOptions;

#[path = "../tests/common/mod.rs"]
mod common;

const PASSAGE: &str = "Gallia est omnis dīvīsa in partēs trēs, quārum ūnam incolunt Belgae, \
aliam Aquītānī, tertiam quī ipsōrum linguā Celtae, nostrā Gallī appellantur. \
Rosae rosam amant; puellae rosaeque MCMXCIV.";

fn passage(repeat: usize) -> String {
    let mut text = String::with_capacity(PASSAGE.len() * repeat);
    for _ in 0..repeat {
        text.push_str(PASSAGE);
        text.push(' ');
    }
    text
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_tokenize(c: &mut Criterion) {
    let text = passage(20);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenizer::tokens(black_box(&text)).count())
    });
}

fn bench_normalize(c: &mut Criterion) {
    let text = passage(20);
    c.bench_function("normalize", |b| b.iter(|| normalize::normalize(black_box(&text))));
}

fn bench_candidates(c: &mut Criterion) {
    let dict = common::dictionary();
    let text = passage(20);
    c.bench_function("analyze", |b| b.iter(|| dict.analyze(black_box(&text))));
}

fn bench_tag(c: &mut Criterion) {
    let store = common::store(true);
    let Ok(tagger) = Tagger::new(common::dictionary(), &store, ModelOptions::default()) else {
        eprintln!("[bench_tag] fixture model did not load, skipping");
        return;
    };
    let text = passage(1);
    let mut group = c.benchmark_group("tag");
    for beam_size in [1, 4] {
        let opts = TagOptions {
            style: TagStyle::Perseus,
            beam_size,
            bidirectional: true,
        };
        group.bench_function(format!("beam_{beam_size}"), |b| {
            b.iter(|| tagger.tag(black_box(&text), &opts))
        });
    }
    group.finish();

    let texts: Vec<String> = (0..32).map(|_| passage(1)).collect();
    c.bench_function("tag_batch_32", |b| {
        b.iter(|| tagger.tag_batch(black_box(&texts), &TagOptions::default(), &BatchOptions::default()))
    });
}

criterion_group!(benches, bench_tokenize, bench_normalize, bench_candidates, bench_tag);
criterion_main!(benches);
