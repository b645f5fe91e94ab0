//! Produce a PageRank estimate for a link graph.
//!
//! The `Ranker` trait assigns every page of a [`LinkGraph`](crate::LinkGraph)
//! a rank, returning a complete [`Ranks`](crate::Ranks) mapping that sums to
//! one.

use thiserror::Error;

use crate::{CorpusError, LinkGraph, PageId, ParameterError, Ranks};

/// Errors returned by [`Ranker::rank`] and the transition model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// The corpus cannot be ranked, e.g. because it is empty.
    #[error("invalid corpus: {0}")]
    InvalidCorpus(#[from] CorpusError),
    /// A ranking parameter was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// A page was requested that is not part of the corpus.
    #[error("page {page} is not in the corpus")]
    UnknownPage {
        /// The requested page.
        page: PageId,
    },
    /// A transition distribution could not be used for weighted sampling.
    #[error("transition probabilities for page {page} cannot be sampled")]
    InvalidDistribution {
        /// Page whose outbound distribution was rejected.
        page: PageId,
    },
    /// Iterative ranking did not settle within its iteration cap.
    #[error("ranks did not converge after {iterations} iterations (last change {max_delta})")]
    Convergence {
        /// Number of passes performed.
        iterations: usize,
        /// Largest per-page change observed in the final pass.
        max_delta: f64,
    },
}

/// Estimate the PageRank of every page in a graph.
///
/// Implementations either return a complete mapping covering every page, or
/// an error; partial results are never returned. Rankers must be
/// `Send + Sync` so callers may hold them behind shared references.
///
/// # Examples
///
/// ```rust
/// use surfrank_core::{LinkGraph, RankError, Ranker, Ranks, count_to_f64};
///
/// struct UniformRanker;
///
/// impl Ranker for UniformRanker {
///     fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError> {
///         let share = 1.0 / count_to_f64(graph.ensure_not_empty()?);
///         Ok(graph.pages().map(|page| (page.clone(), share)).collect())
///     }
///
///     fn name(&self) -> &'static str {
///         "Uniform"
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = LinkGraph::from_adjacency([("a.html", vec!["b.html"]), ("b.html", vec![])])?;
/// let ranks = UniformRanker.rank(&graph)?;
/// assert_eq!(ranks.get("a.html"), Some(0.5));
/// # Ok(())
/// # }
/// ```
pub trait Ranker: Send + Sync {
    /// Rank every page of `graph`.
    ///
    /// # Errors
    /// Returns [`RankError::InvalidCorpus`] for an empty graph, and
    /// implementation-specific errors such as [`RankError::Convergence`].
    fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError>;

    /// Short human-readable name used in reports and log messages.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FirstPageRanker;

    impl Ranker for FirstPageRanker {
        fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError> {
            graph.ensure_not_empty()?;
            Ok(graph
                .pages()
                .enumerate()
                .map(|(index, page)| (page.clone(), if index == 0 { 1.0 } else { 0.0 }))
                .collect())
        }

        fn name(&self) -> &'static str {
            "First page"
        }
    }

    #[rstest]
    fn returns_ranks_for_a_populated_graph() {
        let graph = LinkGraph::from_adjacency([("a.html", Vec::<&str>::new())]).expect("valid");
        let ranks = FirstPageRanker.rank(&graph).expect("ranks");
        assert_eq!(ranks.get("a.html"), Some(1.0));
    }

    #[rstest]
    fn empty_graph_is_an_invalid_corpus() {
        let err = FirstPageRanker
            .rank(&LinkGraph::default())
            .expect_err("empty corpus");
        assert_eq!(err, RankError::InvalidCorpus(CorpusError::Empty));
    }

    #[rstest]
    fn errors_render_their_context() {
        let err = RankError::Convergence {
            iterations: 3,
            max_delta: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "ranks did not converge after 3 iterations (last change 0.5)"
        );
    }
}
