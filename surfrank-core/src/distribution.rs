//! Probability distributions and rank mappings over corpus pages.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use crate::PageId;

/// Probability mass per page, keyed in page order.
///
/// Rankers and the transition model always return a value for every page in
/// the corpus, and the values sum to one within floating-point tolerance.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distribution {
    probabilities: BTreeMap<PageId, f64>,
}

/// Final output of a ranker: the estimated PageRank of every page.
pub type Ranks = Distribution;

impl Distribution {
    /// Wrap a pre-computed map.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "distributions are produced at runtime by rankers"
    )]
    #[must_use]
    pub fn new(probabilities: BTreeMap<PageId, f64>) -> Self {
        Self { probabilities }
    }

    /// Return the probability of `page`, if present.
    #[must_use]
    pub fn get(&self, page: &str) -> Option<f64> {
        self.probabilities.get(page).copied()
    }

    /// Iterate over pages and probabilities in page order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&PageId, f64)> + '_ {
        self.probabilities.iter().map(|(page, value)| (page, *value))
    }

    /// Iterate over the probabilities in page order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.probabilities.values().copied()
    }

    /// Number of pages covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Report whether no pages are covered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Largest absolute per-page difference against `other`.
    ///
    /// Pages missing from either side count their full value as difference.
    #[expect(
        clippy::float_arithmetic,
        reason = "comparing distributions subtracts probabilities"
    )]
    #[must_use]
    pub fn max_abs_difference(&self, other: &Self) -> f64 {
        let forward = self
            .probabilities
            .iter()
            .map(|(page, value)| (value - other.get(page.as_str()).unwrap_or(0.0)).abs());
        let missing = other
            .probabilities
            .iter()
            .filter(|(page, _)| !self.probabilities.contains_key(*page))
            .map(|(_, value)| value.abs());
        forward.chain(missing).fold(0.0_f64, f64::max)
    }

    /// Consume the wrapper and return the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<PageId, f64> {
        self.probabilities
    }
}

impl FromIterator<(PageId, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (PageId, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Convert a page or sample count into `f64` for probability arithmetic.
#[expect(
    clippy::cast_precision_loss,
    reason = "corpus sizes and sample counts stay far below 2^52"
)]
#[must_use]
pub fn count_to_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dist(entries: &[(&str, f64)]) -> Distribution {
        entries
            .iter()
            .map(|(page, value)| (PageId::from(*page), *value))
            .collect()
    }

    #[rstest]
    fn totals_all_values() {
        let d = dist(&[("a", 0.25), ("b", 0.75)]);
        assert!((d.total() - 1.0).abs() < 1e-12);
        assert_eq!(d.len(), 2);
        assert_eq!(d.get("b"), Some(0.75));
        assert_eq!(d.get("c"), None);
    }

    #[rstest]
    #[case(&[("a", 0.5), ("b", 0.5)], &[("a", 0.4), ("b", 0.6)], 0.1)]
    #[case(&[("a", 1.0)], &[("a", 0.5), ("b", 0.5)], 0.5)]
    #[case(&[("a", 0.3)], &[("a", 0.3)], 0.0)]
    fn measures_largest_difference(
        #[case] left: &[(&str, f64)],
        #[case] right: &[(&str, f64)],
        #[case] expected: f64,
    ) {
        let delta = dist(left).max_abs_difference(&dist(right));
        assert!((delta - expected).abs() < 1e-12, "got {delta}");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_a_page_keyed_object() {
        let d = dist(&[("b.html", 0.5), ("a.html", 0.5)]);
        let json = serde_json::to_string(&d).expect("serialise");
        assert_eq!(json, r#"{"a.html":0.5,"b.html":0.5}"#);
    }
}
