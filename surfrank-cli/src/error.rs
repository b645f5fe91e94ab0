//! Error types emitted by the surfrank CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use surfrank_core::{ParameterError, RankError};
use surfrank_corpus::CrawlError;
use thiserror::Error;

/// Errors emitted by the surfrank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set <{field}> or {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A ranking parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    /// The corpus path does not exist or is not a directory.
    #[error("corpus path {path:?} is not a directory")]
    CorpusNotDirectory {
        /// Path supplied for the corpus.
        path: Utf8PathBuf,
    },
    /// The corpus path could not be inspected due to an IO error.
    #[error("failed to inspect corpus path {path:?}: {source}")]
    InspectCorpus {
        /// Path supplied for the corpus.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading the corpus failed.
    #[error("failed to crawl corpus: {0}")]
    Crawl(#[from] CrawlError),
    /// A ranker rejected the corpus or failed to converge.
    #[error("{ranker} ranking failed: {source}")]
    Rank {
        /// Name of the failing ranker.
        ranker: &'static str,
        /// Error reported by the ranker.
        #[source]
        source: RankError,
    },
    /// Serialising the JSON report failed.
    #[error("failed to serialise rank report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Creating the report output file failed.
    #[error("failed to create report file {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the report failed.
    #[error("failed to write rank report: {0}")]
    WriteReport(#[source] std::io::Error),
}
