//! Criterion benchmarks for the iterative ranker.
//!
//! Corpora are generated from a fixed seed so runs are comparable.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use surfrank_core::LinkGraph;
use surfrank_iterative::{IterationConfig, iterate_pagerank};

/// Seed for deterministic corpus generation.
const BENCHMARK_SEED: u64 = 42;

/// Corpus sizes to benchmark.
const CORPUS_SIZES: [usize; 3] = [10, 100, 500];

/// Average out-degree of generated pages.
const MEAN_OUT_DEGREE: usize = 4;

/// Generate a random corpus where roughly one page in ten is dangling.
fn generate_corpus(pages: usize, seed: u64) -> LinkGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let adjacency = (0..pages).map(|source| {
        let out_degree = if rng.gen_range(0..10) == 0 {
            0
        } else {
            rng.gen_range(1..=MEAN_OUT_DEGREE * 2)
        };
        let targets: Vec<String> = (0..out_degree)
            .map(|_| rng.gen_range(0..pages))
            .filter(|target| *target != source)
            .map(|target| format!("{target}.html"))
            .collect();
        (format!("{source}.html"), targets)
    });
    LinkGraph::from_adjacency(adjacency.collect::<Vec<_>>()).expect("generated corpus is valid")
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_pagerank");
    for size in CORPUS_SIZES {
        let graph = generate_corpus(size, BENCHMARK_SEED);
        let config = IterationConfig::default();
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| iterate_pagerank(black_box(graph), &config).expect("converges"));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iterate);
criterion_main!(benches);
