//! Property-based tests for the transition model.
//!
//! # Invariants tested
//!
//! - **Normalisation:** every transition distribution sums to one.
//! - **Coverage:** the distribution has an entry for every page.
//! - **Jump floor:** no page receives less than the uniform jump mass.
//! - **Dangling uniformity:** dangling pages produce `1 / N` everywhere.

use proptest::prelude::*;
use surfrank_core::test_support::corpus_strategy;
use surfrank_core::{DampingFactor, count_to_f64, transition_model};

fn damping_strategy() -> impl Strategy<Value = DampingFactor> {
    (0.01_f64..0.99).prop_map(|value| DampingFactor::new(value).expect("value in range"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every page's transition distribution is complete and sums to one.
    #[test]
    fn distributions_sum_to_one(graph in corpus_strategy(8), damping in damping_strategy()) {
        for page in graph.pages() {
            let next = transition_model(&graph, page.as_str(), damping).expect("distribution");
            prop_assert_eq!(next.len(), graph.len());
            prop_assert!(
                (next.total() - 1.0).abs() < 1e-9,
                "distribution from {} sums to {}",
                page,
                next.total()
            );
        }
    }

    /// Property: the uniform jump mass is a lower bound for every page.
    #[test]
    fn every_page_keeps_the_jump_mass(graph in corpus_strategy(8), damping in damping_strategy()) {
        let floor = damping.jump_probability() / count_to_f64(graph.len());
        for page in graph.pages() {
            let next = transition_model(&graph, page.as_str(), damping).expect("distribution");
            for (target, probability) in next.iter() {
                prop_assert!(
                    probability >= floor - 1e-12,
                    "{} -> {} has {} below floor {}",
                    page,
                    target,
                    probability,
                    floor
                );
            }
        }
    }

    /// Property: leaving a dangling page is a uniform choice over all pages.
    #[test]
    fn dangling_pages_are_uniform(graph in corpus_strategy(8), damping in damping_strategy()) {
        let uniform = 1.0 / count_to_f64(graph.len());
        for page in graph.pages().filter(|page| graph.is_dangling(page.as_str())) {
            let next = transition_model(&graph, page.as_str(), damping).expect("distribution");
            for probability in next.values() {
                prop_assert!((probability - uniform).abs() < 1e-9);
            }
        }
    }
}
