//! Errors raised while reading a corpus directory.

use std::io;

use camino::Utf8PathBuf;
use surfrank_core::CorpusError;
use thiserror::Error;

/// Errors returned by [`crate::crawl`] and [`crate::build_link_graph`].
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The corpus directory could not be opened.
    #[error("failed to open corpus directory {path}")]
    OpenDirectory {
        /// Directory that was requested.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO failure.
        source: io::Error,
    },
    /// Listing the corpus directory failed.
    #[error("failed to list corpus directory {path}")]
    ListDirectory {
        /// Directory being listed.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO failure.
        source: io::Error,
    },
    /// A directory entry could not be inspected.
    #[error("failed to inspect directory entry in {path}")]
    ReadEntry {
        /// Entry, or its directory when the name itself was unreadable.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO failure.
        source: io::Error,
    },
    /// A page could not be read as UTF-8 text.
    #[error("failed to read page {path}")]
    ReadPage {
        /// Page that failed to load.
        path: Utf8PathBuf,
        #[source]
        /// Underlying IO failure.
        source: io::Error,
    },
    /// The anchor pattern failed to compile.
    #[error("invalid link pattern: {0}")]
    Pattern(#[source] regex::Error),
    /// The extracted links did not form a valid graph.
    #[error(transparent)]
    Graph(#[from] CorpusError),
}
