//! Page identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier for a page in the corpus, usually its file name.
///
/// Identifiers compare by exact string equality and order lexicographically,
/// which gives reports and rank mappings a stable page order.
///
/// # Examples
///
/// ```
/// use surfrank_core::PageId;
///
/// let page = PageId::from("index.html");
/// assert_eq!(page.as_str(), "index.html");
/// assert!(PageId::from("a.html") < PageId::from("b.html"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PageId(String);

impl PageId {
    /// Wrap a page name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the underlying string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets ordered collections keyed by `PageId` be queried with `&str`.
impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
