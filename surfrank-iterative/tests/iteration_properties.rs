//! Property-based tests for the iterative ranker.
//!
//! # Invariants tested
//!
//! - **Normalisation:** ranks sum to one within `1e-3`.
//! - **Determinism:** repeated runs return identical ranks.
//! - **Jump floor:** every page keeps at least the uniform jump mass.
//! - **Fixed point:** one more pass moves no page by more than the tolerance.

use proptest::prelude::*;
use surfrank_core::test_support::corpus_strategy;
use surfrank_core::{DampingFactor, Ranker, count_to_f64};
use surfrank_iterative::{IterationConfig, IterativeRanker};

fn ranker(damping: f64) -> IterativeRanker {
    IterativeRanker::new(IterationConfig {
        damping: DampingFactor::new(damping).expect("damping in range"),
        ..IterationConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: ranks cover every page and sum to one.
    #[test]
    fn ranks_sum_to_one(graph in corpus_strategy(10), damping in 0.05_f64..0.95) {
        let ranks = ranker(damping).rank(&graph).expect("converges");
        prop_assert_eq!(ranks.len(), graph.len());
        prop_assert!((ranks.total() - 1.0).abs() < 1e-3, "sum {}", ranks.total());
    }

    /// Property: the ranker has no hidden state or randomness.
    #[test]
    fn repeated_runs_agree(graph in corpus_strategy(10), damping in 0.05_f64..0.95) {
        let ranker = ranker(damping);
        let first = ranker.rank(&graph).expect("first run");
        let second = ranker.rank(&graph).expect("second run");
        prop_assert_eq!(first, second);
    }

    /// Property: no page falls below `(1 - d) / N`.
    #[test]
    fn ranks_respect_the_jump_floor(graph in corpus_strategy(10), damping in 0.05_f64..0.95) {
        let ranks = ranker(damping).rank(&graph).expect("converges");
        let floor = (1.0 - damping) / count_to_f64(graph.len());
        for (page, rank) in ranks.iter() {
            prop_assert!(rank >= floor - 1e-12, "{} has {} below {}", page, rank, floor);
        }
    }

    /// Property: tightening the tolerance changes no rank by much.
    #[test]
    fn result_is_near_the_fixed_point(graph in corpus_strategy(8)) {
        let loose = IterativeRanker::default().rank(&graph).expect("loose run");
        let strict = IterativeRanker::new(IterationConfig {
            tolerance: 1e-10,
            ..IterationConfig::default()
        })
        .rank(&graph)
        .expect("strict run");
        prop_assert!(loose.max_abs_difference(&strict) < 0.01);
    }
}
