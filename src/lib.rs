//! Facade crate for the surfrank PageRank engine.
//!
//! This crate re-exports the core domain types and exposes the rankers and
//! the corpus crawler behind feature flags.
//!
//! ```
//! # #[cfg(all(feature = "ranker-sampling", feature = "ranker-iterative"))]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use surfrank::{IterativeRanker, LinkGraph, Ranker, SamplingConfig, SamplingRanker};
//!
//! let graph = LinkGraph::from_adjacency([
//!     ("1.html", vec!["2.html", "3.html"]),
//!     ("2.html", vec!["3.html"]),
//!     ("3.html", vec!["2.html"]),
//! ])?;
//! let sampled = SamplingRanker::new(SamplingConfig {
//!     seed: Some(1),
//!     ..SamplingConfig::default()
//! })
//! .rank(&graph)?;
//! let iterated = IterativeRanker::default().rank(&graph)?;
//! assert_eq!(sampled.len(), iterated.len());
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "ranker-sampling", feature = "ranker-iterative")))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use surfrank_core::{
    CorpusError, DEFAULT_DAMPING, DEFAULT_SAMPLES, DampingFactor, Distribution, LinkGraph, PageId,
    ParameterError, RankError, Ranker, Ranks, SampleCount, transition_model,
};

#[cfg(feature = "ranker-sampling")]
pub use surfrank_sampling::{SamplingConfig, SamplingRanker, sample_pagerank};

#[cfg(feature = "ranker-iterative")]
pub use surfrank_iterative::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, IterationConfig, IterativeRanker, iterate_pagerank,
};

#[cfg(feature = "corpus")]
pub use surfrank_corpus::{CrawlError, crawl};
