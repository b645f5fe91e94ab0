//! Build link graphs from a directory of HTML pages.
//!
//! Responsibilities:
//! - List a corpus directory and read every `.html` file in it.
//! - Extract anchor targets from the page markup.
//! - Drop self-links and links to pages outside the corpus.
//!
//! Boundaries:
//! - Ranking lives in the ranker crates; this crate only produces a
//!   validated [`LinkGraph`].
//! - Markup is matched with a regular expression, not parsed; only
//!   double-quoted `href` attributes on `<a>` tags are recognised.
//!
//! # Examples
//!
//! ```
//! use surfrank_corpus::build_link_graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = build_link_graph([
//!     ("1.html".to_owned(), r#"<a href="2.html">next</a>"#.to_owned()),
//!     ("2.html".to_owned(), r#"<a href="https://example.com">out</a>"#.to_owned()),
//! ])?;
//! assert_eq!(graph.link_count(), 1);
//! assert!(graph.is_dangling("2.html"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod error;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use camino::Utf8Path;
use log::{debug, info};
use regex::Regex;
use surfrank_core::{LinkGraph, PageId};

pub use error::CrawlError;

/// File extension identifying corpus pages.
pub const PAGE_EXTENSION: &str = ".html";

static ANCHOR_HREF: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#));

/// Read every `.html` file in `dir` and build the corpus link graph.
///
/// Only the directory itself is listed; subdirectories are ignored, as are
/// entries that are not regular files.
///
/// # Errors
/// Returns [`CrawlError`] when the directory cannot be listed or a page
/// cannot be read.
pub fn crawl(dir: &Utf8Path) -> Result<LinkGraph, CrawlError> {
    let corpus = surfrank_fs::open_utf8_dir(dir).map_err(|source| CrawlError::OpenDirectory {
        path: dir.to_path_buf(),
        source,
    })?;
    let entries = corpus
        .entries()
        .map_err(|source| CrawlError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;

    let mut documents = Vec::new();
    for listed in entries {
        let entry = listed.map_err(|source| CrawlError::ListDirectory {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().map_err(|source| CrawlError::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        if !name.ends_with(PAGE_EXTENSION) {
            debug!("skipping {name}: not an HTML page");
            continue;
        }
        let is_file = entry
            .file_type()
            .map(|kind| kind.is_file())
            .map_err(|source| CrawlError::ReadEntry {
                path: dir.join(&name),
                source,
            })?;
        if !is_file {
            debug!("skipping {name}: not a regular file");
            continue;
        }
        let contents =
            corpus
                .read_to_string(name.as_str())
                .map_err(|source| CrawlError::ReadPage {
                    path: dir.join(&name),
                    source,
                })?;
        documents.push((name, contents));
    }

    let graph = build_link_graph(documents)?;
    info!(
        "crawled {} pages with {} links from {dir}",
        graph.len(),
        graph.link_count()
    );
    Ok(graph)
}

/// Build a link graph from `(page name, markup)` pairs.
///
/// Links to the page itself and to names that are not among the supplied
/// pages are discarded, so the result always satisfies the link graph
/// invariants.
///
/// # Errors
/// Returns [`CrawlError::Pattern`] if the link pattern fails to compile.
pub fn build_link_graph<I>(documents: I) -> Result<LinkGraph, CrawlError>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut raw: BTreeMap<PageId, BTreeSet<String>> = BTreeMap::new();
    for (name, markup) in documents {
        let links = extract_links(&markup)?;
        raw.insert(PageId::new(name), links);
    }

    let links = raw
        .iter()
        .map(|(page, targets)| {
            let kept: BTreeSet<PageId> = targets
                .iter()
                .filter(|target| target.as_str() != page.as_str())
                .filter(|target| raw.contains_key(target.as_str()))
                .map(|target| PageId::from(target.as_str()))
                .collect();
            let dropped = targets.len().saturating_sub(kept.len());
            if dropped > 0 {
                debug!("{page}: dropped {dropped} links leaving the corpus or pointing to itself");
            }
            (page.clone(), kept)
        })
        .collect();

    Ok(LinkGraph::new(links)?)
}

/// Return the distinct `href` targets of the anchors in `markup`.
///
/// # Errors
/// Returns [`CrawlError::Pattern`] if the link pattern fails to compile.
pub fn extract_links(markup: &str) -> Result<BTreeSet<String>, CrawlError> {
    let pattern = ANCHOR_HREF
        .as_ref()
        .map_err(|err| CrawlError::Pattern(err.clone()))?;
    Ok(pattern
        .captures_iter(markup)
        .filter_map(|captures| captures.get(1))
        .map(|target| target.as_str().to_owned())
        .collect())
}
