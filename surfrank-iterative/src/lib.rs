//! Fixed-point iteration of the PageRank equation.
//!
//! Every page starts at `1 / N`. Each pass derives a complete new snapshot
//! from the previous one:
//!
//! ```text
//! PR(p) = (1 - d) / N + d * sum(PR(q) / L(q) for every q linking to p)
//! ```
//!
//! Dangling pages count as linking to every page, themselves included, so
//! they contribute `PR(q) / N` to each page. Iteration stops after the first
//! pass in which no page moved by more than the configured tolerance.
//!
//! # Examples
//!
//! ```
//! use surfrank_core::{LinkGraph, Ranker};
//! use surfrank_iterative::IterativeRanker;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = LinkGraph::from_adjacency([
//!     ("1.html", vec!["2.html", "3.html"]),
//!     ("2.html", vec!["3.html"]),
//!     ("3.html", vec!["2.html"]),
//! ])?;
//! let ranks = IterativeRanker::default().rank(&graph)?;
//! assert!((ranks.get("2.html").unwrap_or_default() - 0.475).abs() < 0.005);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use log::{debug, warn};
use surfrank_core::{
    DampingFactor, EffectiveLinks, LinkGraph, PageId, ParameterError, RankError, Ranker, Ranks,
    count_to_f64,
};

/// Largest per-page change accepted as converged when none is configured.
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Pass cap applied when none is configured.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Parameters for an iterative run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationConfig {
    /// Probability of following a link rather than jumping uniformly.
    pub damping: DampingFactor,
    /// Largest per-page change that still counts as converged.
    pub tolerance: f64,
    /// Maximum number of passes before giving up.
    pub max_iterations: usize,
}

impl Default for IterationConfig {
    fn default() -> Self {
        Self {
            damping: DampingFactor::default(),
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl IterationConfig {
    /// Check the tolerance and iteration cap.
    ///
    /// # Errors
    /// Returns [`ParameterError::InvalidTolerance`] for a non-positive or
    /// non-finite tolerance and [`ParameterError::ZeroIterationCap`] for a
    /// zero cap.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ParameterError::InvalidTolerance(self.tolerance));
        }
        if self.max_iterations == 0 {
            return Err(ParameterError::ZeroIterationCap);
        }
        Ok(())
    }
}

/// [`Ranker`] solving the PageRank equation by repeated relaxation.
///
/// The result is fully deterministic: identical graphs and configurations
/// always produce identical ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeRanker {
    config: IterationConfig,
}

impl IterativeRanker {
    /// Create a ranker with the given configuration.
    #[must_use]
    pub const fn new(config: IterationConfig) -> Self {
        Self { config }
    }

    /// Return the ranker's configuration.
    #[must_use]
    pub const fn config(&self) -> &IterationConfig {
        &self.config
    }
}

impl Ranker for IterativeRanker {
    fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError> {
        iterate_pagerank(graph, &self.config)
    }

    fn name(&self) -> &'static str {
        "Iteration"
    }
}

/// Relax the PageRank equation until every page settles.
///
/// # Errors
/// Returns [`RankError::InvalidParameter`] for an invalid configuration,
/// [`RankError::InvalidCorpus`] for an empty graph, and
/// [`RankError::Convergence`] when `max_iterations` passes do not settle.
#[expect(
    clippy::float_arithmetic,
    reason = "the initial rank is the reciprocal of the page count"
)]
pub fn iterate_pagerank(graph: &LinkGraph, config: &IterationConfig) -> Result<Ranks, RankError> {
    config.validate()?;
    let page_count = graph.ensure_not_empty()?;
    let index = InboundIndex::build(graph);

    let mut ranks = vec![1.0 / count_to_f64(page_count); page_count];
    let mut max_delta = f64::INFINITY;
    for iteration in 1..=config.max_iterations {
        let next = index.relax(&ranks, config.damping);
        max_delta = largest_change(&ranks, &next);
        ranks = next;
        if max_delta <= config.tolerance {
            debug!("ranks converged after {iteration} iterations over {page_count} pages");
            return Ok(index.into_ranks(&ranks));
        }
    }

    warn!(
        "ranks failed to converge within {} iterations (last change {max_delta})",
        config.max_iterations
    );
    Err(RankError::Convergence {
        iterations: config.max_iterations,
        max_delta,
    })
}

#[expect(
    clippy::float_arithmetic,
    reason = "convergence compares consecutive rank snapshots"
)]
fn largest_change(previous: &[f64], next: &[f64]) -> f64 {
    previous
        .iter()
        .zip(next)
        .map(|(old, new)| (new - old).abs())
        .fold(0.0_f64, f64::max)
}

/// Dense, index-addressed view of who links to whom.
///
/// Pages are numbered in the graph's page order. Dangling pages are kept
/// apart because their rank is shared with every page.
#[derive(Debug)]
struct InboundIndex<'graph> {
    pages: Vec<&'graph PageId>,
    /// For each page, the linked (non-dangling) pages pointing at it.
    predecessors: Vec<Vec<usize>>,
    /// `1 / L(q)` for each page; unused for dangling pages.
    share: Vec<f64>,
    dangling: Vec<usize>,
}

impl<'graph> InboundIndex<'graph> {
    #[expect(
        clippy::float_arithmetic,
        reason = "link shares are reciprocals of the out-degree"
    )]
    fn build(graph: &'graph LinkGraph) -> Self {
        let pages: Vec<&PageId> = graph.pages().collect();
        let mut predecessors = vec![Vec::new(); pages.len()];
        let mut share = vec![0.0; pages.len()];
        let mut dangling = Vec::new();

        for (source, page) in pages.iter().enumerate() {
            match graph.effective_links(page.as_str()) {
                Some(EffectiveLinks::Targets(targets)) => {
                    if let Some(slot) = share.get_mut(source) {
                        *slot = 1.0 / count_to_f64(targets.len());
                    }
                    for target in targets {
                        let position = pages.binary_search(&target);
                        if let Some(inbound) = position
                            .ok()
                            .and_then(|position| predecessors.get_mut(position))
                        {
                            inbound.push(source);
                        }
                    }
                }
                Some(EffectiveLinks::AllPages { .. }) => dangling.push(source),
                None => {}
            }
        }

        Self {
            pages,
            predecessors,
            share,
            dangling,
        }
    }

    /// Compute one full pass from the `ranks` snapshot.
    #[expect(
        clippy::float_arithmetic,
        reason = "the PageRank update is a weighted sum of ranks"
    )]
    fn relax(&self, ranks: &[f64], damping: DampingFactor) -> Vec<f64> {
        let page_count = count_to_f64(self.pages.len());
        let jump = damping.jump_probability() / page_count;
        let dangling_mass: f64 = self
            .dangling
            .iter()
            .filter_map(|source| ranks.get(*source))
            .sum();
        let dangling_share = dangling_mass / page_count;

        self.predecessors
            .iter()
            .map(|inbound| {
                let linked: f64 = inbound
                    .iter()
                    .filter_map(|source| Some(ranks.get(*source)? * self.share.get(*source)?))
                    .sum();
                jump + damping.get() * (linked + dangling_share)
            })
            .collect()
    }

    fn into_ranks(self, ranks: &[f64]) -> Ranks {
        self.pages
            .into_iter()
            .zip(ranks)
            .map(|(page, rank)| (page.clone(), *rank))
            .collect()
    }
}
