//! Behavioural coverage for the sampling ranker.

use std::cell::{Cell, RefCell};

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use surfrank_core::test_support::mixed_corpus;
use surfrank_core::{LinkGraph, RankError, Ranker, Ranks, SampleCount};
use surfrank_iterative::IterativeRanker;
use surfrank_sampling::{SamplingConfig, SamplingRanker};

/// Scenario state shared between steps.
#[derive(Debug, Default)]
struct SamplingWorld {
    graph: RefCell<LinkGraph>,
    config: Cell<SamplingConfig>,
    sampled: RefCell<Vec<Result<Ranks, RankError>>>,
    iterated: RefCell<Option<Ranks>>,
}

impl SamplingWorld {
    fn sampled_ranks(&self) -> Vec<Ranks> {
        self.sampled
            .borrow()
            .iter()
            .map(|result| match result {
                Ok(ranks) => ranks.clone(),
                Err(err) => panic!("expected ranks, found {err}"),
            })
            .collect()
    }

    fn sample(&self) {
        let ranker = SamplingRanker::new(self.config.get());
        let result = ranker.rank(&self.graph.borrow());
        self.sampled.borrow_mut().push(result);
    }
}

#[fixture]
fn world() -> SamplingWorld {
    SamplingWorld::default()
}

#[given("the mixed corpus")]
fn given_mixed_corpus(world: &SamplingWorld) {
    world.graph.replace(mixed_corpus());
}

#[given("an empty corpus")]
fn given_empty_corpus(world: &SamplingWorld) {
    world.graph.replace(LinkGraph::default());
}

#[given("a sampling run of {draws} draws seeded with {seed}")]
fn given_sampling_run(world: &SamplingWorld, draws: usize, seed: u64) {
    world.config.set(SamplingConfig {
        samples: SampleCount::new(draws).expect("non-zero draws"),
        seed: Some(seed),
        ..SamplingConfig::default()
    });
}

#[when("I sample the corpus twice")]
fn sample_twice(world: &SamplingWorld) {
    world.sample();
    world.sample();
}

#[when("I sample the corpus and iterate to convergence")]
fn sample_and_iterate(world: &SamplingWorld) {
    world.sample();
    let iterated = IterativeRanker::default()
        .rank(&world.graph.borrow())
        .expect("iteration converges");
    world.iterated.replace(Some(iterated));
}

#[then("both runs return identical ranks")]
fn identical_runs(world: &SamplingWorld) {
    let runs = world.sampled_ranks();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs.first(), runs.last());
}

#[then("the ranks sum to one")]
fn ranks_sum_to_one(world: &SamplingWorld) {
    for ranks in world.sampled_ranks() {
        assert!((ranks.total() - 1.0).abs() < 1e-9, "sum {}", ranks.total());
    }
}

#[then("every sampled rank is within {tolerance} of the iterated rank")]
fn sampled_close_to_iterated(world: &SamplingWorld, tolerance: f64) {
    let sampled = world.sampled_ranks();
    let sampled = sampled.first().expect("one sampling run");
    let iterated = world.iterated.borrow();
    let iterated = iterated.as_ref().expect("iterated ranks");
    let delta = sampled.max_abs_difference(iterated);
    assert!(delta <= tolerance, "largest difference {delta}");
}

#[then("sampling reports an invalid corpus")]
fn reports_invalid_corpus(world: &SamplingWorld) {
    let sampled = world.sampled.borrow();
    assert!(!sampled.is_empty());
    assert!(
        sampled
            .iter()
            .all(|result| matches!(result, Err(RankError::InvalidCorpus(_)))),
        "expected invalid corpus errors, found {sampled:?}"
    );
}

#[scenario(path = "tests/features/sampling_ranking.feature", index = 0)]
fn seeded_sampling_is_reproducible(world: SamplingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sampling_ranking.feature", index = 1)]
fn sampling_agrees_with_iteration(world: SamplingWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sampling_ranking.feature", index = 2)]
fn sampling_rejects_empty_corpus(world: SamplingWorld) {
    let _ = world;
}
