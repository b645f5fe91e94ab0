//! Random-walk sampling estimate of PageRank.
//!
//! A simulated surfer starts on a uniformly chosen page and then moves
//! according to the [`transition_model`] of the page it is on. The share of
//! draws that landed on each page estimates that page's rank.
//!
//! A run performs exactly `n` draws: the uniform first draw plus `n - 1`
//! transitions. Visits are counted as integers and divided by `n` once, so
//! the resulting ranks sum to one up to a single rounding per page.
//!
//! # Examples
//!
//! ```
//! use surfrank_core::{LinkGraph, Ranker, SampleCount};
//! use surfrank_sampling::{SamplingConfig, SamplingRanker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = LinkGraph::from_adjacency([
//!     ("1.html", vec!["2.html"]),
//!     ("2.html", vec!["1.html"]),
//! ])?;
//! let ranker = SamplingRanker::new(SamplingConfig {
//!     samples: SampleCount::new(1_000)?,
//!     seed: Some(7),
//!     ..SamplingConfig::default()
//! });
//! let ranks = ranker.rank(&graph)?;
//! assert!((ranks.total() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::distributions::{Distribution as _, WeightedIndex};
use rand_chacha::ChaCha8Rng;
use surfrank_core::{
    DampingFactor, LinkGraph, PageId, RankError, Ranker, Ranks, SampleCount, count_to_f64,
    transition_model,
};

/// Parameters for a sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SamplingConfig {
    /// Probability of following a link rather than jumping uniformly.
    pub damping: DampingFactor,
    /// Total number of pages drawn.
    pub samples: SampleCount,
    /// Seed for the random walk; `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

/// [`Ranker`] estimating PageRank by sampling a random surfer's walk.
///
/// Each call to [`Ranker::rank`] seeds a `ChaCha8Rng` from the configured
/// seed, so a fixed seed reproduces the same ranks on every run and
/// platform. Without a seed the generator is seeded from the thread RNG and
/// the chosen seed is logged at `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SamplingRanker {
    config: SamplingConfig,
}

impl SamplingRanker {
    /// Create a ranker with the given configuration.
    #[must_use]
    pub const fn new(config: SamplingConfig) -> Self {
        Self { config }
    }

    /// Return the ranker's configuration.
    #[must_use]
    pub const fn config(&self) -> &SamplingConfig {
        &self.config
    }
}

impl Ranker for SamplingRanker {
    fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        debug!(
            "sampling {} draws over {} pages (seed {seed})",
            self.config.samples.get(),
            graph.len()
        );
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        sample_pagerank(graph, self.config.damping, self.config.samples, &mut rng)
    }

    fn name(&self) -> &'static str {
        "Sampling"
    }
}

/// Estimate PageRank from `samples` draws of a random surfer.
///
/// The first page is drawn uniformly; each later page is drawn from the
/// transition model of the previous one. `rng` is injected so callers can
/// supply a seeded generator.
///
/// # Errors
/// Returns [`RankError::InvalidCorpus`] for an empty graph and
/// [`RankError::InvalidDistribution`] if a transition distribution cannot
/// be sampled.
pub fn sample_pagerank<R>(
    graph: &LinkGraph,
    damping: DampingFactor,
    samples: SampleCount,
    rng: &mut R,
) -> Result<Ranks, RankError>
where
    R: Rng + ?Sized,
{
    let page_count = graph.ensure_not_empty()?;
    let pages: Vec<&PageId> = graph.pages().collect();
    let transitions = transition_tables(graph, &pages, damping)?;

    let mut visits = vec![0_usize; page_count];
    let mut current = rng.gen_range(0..page_count);
    record_visit(&mut visits, current);
    for _ in 1..samples.get() {
        if let Some(table) = transitions.get(current) {
            current = table.sample(rng);
        }
        record_visit(&mut visits, current);
    }

    Ok(normalise_visits(&pages, &visits, samples))
}

/// Precompute one weighted sampler per page, in page order.
fn transition_tables(
    graph: &LinkGraph,
    pages: &[&PageId],
    damping: DampingFactor,
) -> Result<Vec<WeightedIndex<f64>>, RankError> {
    pages
        .iter()
        .map(|page| {
            let distribution = transition_model(graph, page.as_str(), damping)?;
            WeightedIndex::new(distribution.values()).map_err(|_| {
                RankError::InvalidDistribution {
                    page: (*page).clone(),
                }
            })
        })
        .collect()
}

fn record_visit(visits: &mut [usize], page: usize) {
    if let Some(count) = visits.get_mut(page) {
        *count += 1;
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "visit frequencies are visit counts divided by the sample count"
)]
fn normalise_visits(pages: &[&PageId], visits: &[usize], samples: SampleCount) -> Ranks {
    let total = count_to_f64(samples.get());
    pages
        .iter()
        .zip(visits)
        .map(|(page, count)| ((*page).clone(), count_to_f64(*count) / total))
        .collect()
}
