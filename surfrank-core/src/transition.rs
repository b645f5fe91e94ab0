//! One-step random-surfer transition probabilities.

use crate::{DampingFactor, Distribution, LinkGraph, PageId, RankError, count_to_f64};

/// Return the distribution over the page a random surfer visits next.
///
/// Every page receives the uniform jump mass `(1 - d) / N`. Each page the
/// current page links to additionally receives `d / L`, where `L` is the
/// current page's out-degree. A dangling page links to every page, itself
/// included, which makes the result uniform.
///
/// # Errors
/// Returns [`RankError::InvalidCorpus`] for an empty graph and
/// [`RankError::UnknownPage`] when `page` is not part of the corpus.
///
/// # Examples
///
/// ```
/// use surfrank_core::{DampingFactor, LinkGraph, transition_model};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let graph = LinkGraph::from_adjacency([
///     ("1.html", vec!["2.html", "3.html"]),
///     ("2.html", vec!["3.html"]),
///     ("3.html", vec!["2.html"]),
/// ])?;
/// let next = transition_model(&graph, "1.html", DampingFactor::new(0.85)?)?;
/// assert!((next.get("1.html").unwrap_or_default() - 0.05).abs() < 1e-9);
/// assert!((next.get("2.html").unwrap_or_default() - 0.475).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "transition probabilities are ratios of the damping factor"
)]
pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping: DampingFactor,
) -> Result<Distribution, RankError> {
    let page_count = graph.ensure_not_empty()?;
    let links = graph
        .effective_links(page)
        .ok_or_else(|| RankError::UnknownPage {
            page: PageId::from(page),
        })?;

    let jump = damping.jump_probability() / count_to_f64(page_count);
    let follow = damping.get() / count_to_f64(links.out_degree());

    Ok(graph
        .pages()
        .map(|candidate| {
            let probability = if links.reaches(candidate.as_str()) {
                jump + follow
            } else {
                jump
            };
            (candidate.clone(), probability)
        })
        .collect())
}
