//! Core domain types for the surfrank engine.
//!
//! The crate models a small hyperlink corpus as a validated [`LinkGraph`] and
//! provides the one-step [`transition_model`] shared by the ranking
//! algorithms. Ranking implementations live in their own crates and plug into
//! callers through the [`Ranker`] trait.
//!
//! Constructors return `Result` so malformed corpora and out-of-range
//! parameters surface before any ranking work starts.
//!
//! # Examples
//!
//! ```
//! use surfrank_core::{DampingFactor, LinkGraph, transition_model};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = LinkGraph::from_adjacency([
//!     ("1.html", vec!["2.html", "3.html"]),
//!     ("2.html", vec!["3.html"]),
//!     ("3.html", vec!["2.html"]),
//! ])?;
//! let next = transition_model(&graph, "1.html", DampingFactor::default())?;
//! assert!((next.total() - 1.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distribution;
pub mod graph;
pub mod page;
pub mod params;
pub mod ranker;
pub mod transition;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use distribution::{Distribution, Ranks, count_to_f64};
pub use graph::{CorpusError, EffectiveLinks, LinkGraph};
pub use page::PageId;
pub use params::{DEFAULT_DAMPING, DEFAULT_SAMPLES, DampingFactor, ParameterError, SampleCount};
pub use ranker::{RankError, Ranker};
pub use transition::transition_model;
