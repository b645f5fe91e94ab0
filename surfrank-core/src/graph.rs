//! The validated link graph ranked by the engine.
//!
//! A [`LinkGraph`] maps every page in a corpus to the set of pages it links
//! to. Construction enforces the corpus invariants: link targets must be
//! pages of the corpus and no page may link to itself. Pages without links
//! are "dangling"; [`LinkGraph::effective_links`] reports them as linking to
//! every page, including themselves, so ranking code never special-cases
//! them twice.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::PageId;

/// Errors raised when a corpus violates the link graph invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    /// The corpus contains no pages.
    #[error("corpus contains no pages")]
    Empty,
    /// A page links to a target that is not part of the corpus.
    #[error("page {page} links to {target}, which is not in the corpus")]
    UnknownLinkTarget {
        /// Page holding the offending link.
        page: PageId,
        /// Link target missing from the corpus.
        target: PageId,
    },
    /// A page links to itself.
    #[error("page {page} links to itself")]
    SelfLink {
        /// Page holding the self-link.
        page: PageId,
    },
}

/// Immutable hyperlink graph over a page corpus.
///
/// Pages and links are kept in ordered collections, so iteration order is
/// identical across processes. Seeded sampling relies on this to reproduce
/// its draws.
///
/// # Examples
///
/// ```
/// use surfrank_core::LinkGraph;
///
/// # fn main() -> Result<(), surfrank_core::CorpusError> {
/// let graph = LinkGraph::from_adjacency([
///     ("a.html", vec!["b.html"]),
///     ("b.html", vec![]),
/// ])?;
/// assert_eq!(graph.len(), 2);
/// assert!(graph.is_dangling("b.html"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkGraph {
    links: BTreeMap<PageId, BTreeSet<PageId>>,
}

impl LinkGraph {
    /// Validate and wrap an adjacency map.
    ///
    /// An empty map is accepted; rankers reject it when asked to rank.
    ///
    /// # Errors
    /// Returns [`CorpusError::SelfLink`] when a page lists itself and
    /// [`CorpusError::UnknownLinkTarget`] when a link points outside the
    /// corpus.
    pub fn new(links: BTreeMap<PageId, BTreeSet<PageId>>) -> Result<Self, CorpusError> {
        for (page, targets) in &links {
            if targets.contains(page) {
                return Err(CorpusError::SelfLink { page: page.clone() });
            }
            if let Some(target) = targets.iter().find(|target| !links.contains_key(*target)) {
                return Err(CorpusError::UnknownLinkTarget {
                    page: page.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(Self { links })
    }

    /// Build a graph from `(page, links)` pairs.
    ///
    /// Repeated pages merge their link lists.
    ///
    /// # Errors
    /// Propagates the validation errors of [`LinkGraph::new`].
    pub fn from_adjacency<I, P, L, T>(adjacency: I) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<PageId>,
        L: IntoIterator<Item = T>,
        T: Into<PageId>,
    {
        let mut links: BTreeMap<PageId, BTreeSet<PageId>> = BTreeMap::new();
        for (page, targets) in adjacency {
            links
                .entry(page.into())
                .or_default()
                .extend(targets.into_iter().map(Into::into));
        }
        Self::new(links)
    }

    /// Number of pages in the corpus.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Report whether the corpus has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Return the page count, rejecting an empty corpus.
    ///
    /// # Errors
    /// Returns [`CorpusError::Empty`] when the graph has no pages.
    pub fn ensure_not_empty(&self) -> Result<usize, CorpusError> {
        if self.links.is_empty() {
            Err(CorpusError::Empty)
        } else {
            Ok(self.links.len())
        }
    }

    /// Report whether `page` belongs to the corpus.
    #[must_use]
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Iterate over the pages in lexicographic order.
    pub fn pages(&self) -> impl ExactSizeIterator<Item = &PageId> + '_ {
        self.links.keys()
    }

    /// Iterate over each page and its outbound links.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&PageId, &BTreeSet<PageId>)> + '_ {
        self.links.iter()
    }

    /// Return the pages `page` links to, or `None` when it is not in the corpus.
    #[must_use]
    pub fn links(&self, page: &str) -> Option<&BTreeSet<PageId>> {
        self.links.get(page)
    }

    /// Total number of links across the corpus.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    /// Report whether `page` is in the corpus and has no outbound links.
    #[must_use]
    pub fn is_dangling(&self, page: &str) -> bool {
        self.links.get(page).is_some_and(BTreeSet::is_empty)
    }

    /// Links a random surfer may follow from `page`.
    ///
    /// Dangling pages behave as if they linked to every page in the corpus,
    /// themselves included. Returns `None` when `page` is not in the corpus.
    #[must_use]
    pub fn effective_links(&self, page: &str) -> Option<EffectiveLinks<'_>> {
        self.links.get(page).map(|targets| {
            if targets.is_empty() {
                EffectiveLinks::AllPages {
                    page_count: self.links.len(),
                }
            } else {
                EffectiveLinks::Targets(targets)
            }
        })
    }

    /// Consume the graph and return the adjacency map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<PageId, BTreeSet<PageId>> {
        self.links
    }
}

/// Outbound links as seen by a random surfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveLinks<'graph> {
    /// The page's own, non-empty link set.
    Targets(&'graph BTreeSet<PageId>),
    /// A dangling page treated as linking to every page in the corpus.
    AllPages {
        /// Number of pages in the corpus.
        page_count: usize,
    },
}

impl EffectiveLinks<'_> {
    /// Number of pages the surfer chooses between when following a link.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        match self {
            Self::Targets(targets) => targets.len(),
            Self::AllPages { page_count } => *page_count,
        }
    }

    /// Report whether following a link may land on `page`.
    #[must_use]
    pub fn reaches(&self, page: &str) -> bool {
        match self {
            Self::Targets(targets) => targets.contains(page),
            Self::AllPages { .. } => true,
        }
    }

    /// Report whether these links stand in for a dangling page.
    #[must_use]
    pub const fn is_dangling(&self) -> bool {
        matches!(self, Self::AllPages { .. })
    }
}
