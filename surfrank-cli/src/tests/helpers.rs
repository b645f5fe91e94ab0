//! Test helpers for building corpus directories on disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary corpus directory kept alive for the duration of a test.
pub(super) struct CorpusDir {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl CorpusDir {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Self { _dir: dir, root }
    }

    /// Empty corpus created under the working directory and addressed by a
    /// relative path.
    pub(super) fn relative() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("corpus")
            .tempdir_in(".")
            .expect("tempdir in working directory");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        assert!(root.is_relative(), "{root} should be relative");
        Self { _dir: dir, root }
    }

    /// Directory with `1.html -> 2.html, 3.html`, `2.html <-> 3.html`.
    pub(super) fn three_pages() -> Self {
        Self::new().with_three_pages()
    }

    pub(super) fn with_three_pages(self) -> Self {
        self.write_page("1.html", &["2.html", "3.html"]);
        self.write_page("2.html", &["3.html"]);
        self.write_page("3.html", &["2.html"]);
        self
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write_page(&self, name: &str, links: &[&str]) {
        let anchors: String = links
            .iter()
            .map(|target| format!(r#"<li><a href="{target}">{target}</a></li>"#))
            .collect();
        let body = format!("<html><body><ul>{anchors}</ul></body></html>");
        std::fs::write(self.root.join(name).as_std_path(), body).expect("write page");
    }
}
