//! Test-only corpora and a trivial `Ranker` used by unit and behaviour tests
//! across the workspace.

use crate::{LinkGraph, RankError, Ranker, Ranks, count_to_f64};

/// Build a graph from static adjacency pairs, panicking on invalid input.
///
/// # Panics
/// Panics when the pairs violate the link graph invariants; fixtures are
/// expected to be well formed.
#[must_use]
pub fn graph_from(pairs: &[(&str, &[&str])]) -> LinkGraph {
    match LinkGraph::from_adjacency(pairs.iter().map(|(page, links)| (*page, links.iter().copied())))
    {
        Ok(graph) => graph,
        Err(err) => panic!("fixture corpus should be valid: {err}"),
    }
}

/// The three-page corpus used throughout the documentation.
///
/// `1.html` links to `2.html` and `3.html`, which link to each other.
#[must_use]
pub fn three_page_corpus() -> LinkGraph {
    graph_from(&[
        ("1.html", &["2.html", "3.html"]),
        ("2.html", &["3.html"]),
        ("3.html", &["2.html"]),
    ])
}

/// Two pages linking to each other plus an isolated dangling page.
#[must_use]
pub fn dangling_corpus() -> LinkGraph {
    graph_from(&[("a.html", &["b.html"]), ("b.html", &["a.html"]), ("c.html", &[])])
}

/// A five-page corpus mixing hubs, chains and a dangling page.
#[must_use]
pub fn mixed_corpus() -> LinkGraph {
    graph_from(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html"]),
        ("4.html", &["2.html"]),
        ("5.html", &[]),
    ])
}

/// Deterministic `Ranker` assigning every page the same rank.
#[derive(Debug, Copy, Clone, Default)]
pub struct UniformRanker;

impl Ranker for UniformRanker {
    #[expect(
        clippy::float_arithmetic,
        reason = "a uniform rank is the reciprocal of the page count"
    )]
    fn rank(&self, graph: &LinkGraph) -> Result<Ranks, RankError> {
        let share = 1.0 / count_to_f64(graph.ensure_not_empty()?);
        Ok(graph.pages().map(|page| (page.clone(), share)).collect())
    }

    fn name(&self) -> &'static str {
        "Uniform"
    }
}

/// Strategy producing valid corpora of one to `max_pages` pages.
///
/// Pages are named `0.html`, `1.html`, and so on. Each page links to a
/// random subset of the other pages, so self-links and unknown targets never
/// occur; pages with an empty subset are dangling.
pub fn corpus_strategy(
    max_pages: usize,
) -> impl proptest::strategy::Strategy<Value = LinkGraph> {
    use proptest::prelude::*;

    (1..=max_pages.max(1)).prop_flat_map(|pages| {
        proptest::collection::vec(proptest::collection::vec(any::<bool>(), pages), pages)
            .prop_map(|matrix| {
                let adjacency = matrix.into_iter().enumerate().map(|(source, row)| {
                    let targets: Vec<String> = row
                        .into_iter()
                        .enumerate()
                        .filter(|(target, linked)| *linked && *target != source)
                        .map(|(target, _)| format!("{target}.html"))
                        .collect();
                    (format!("{source}.html"), targets)
                });
                match LinkGraph::from_adjacency(adjacency) {
                    Ok(graph) => graph,
                    Err(err) => panic!("generated corpus should be valid: {err}"),
                }
            })
    })
}
