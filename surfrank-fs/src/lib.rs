//! Capability-based filesystem helpers for corpus directories and reports.
//!
//! Paths arrive from the command line as ambient UTF-8 paths. These helpers
//! resolve them to `cap-std` directory handles once, so the rest of the
//! workspace only ever operates relative to an opened directory.
#![forbid(unsafe_code)]

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open a directory using ambient authority.
pub fn open_utf8_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    fs_utf8::Dir::open_ambient_dir(path, ambient_authority())
}

/// Open the directory containing `path` and return it with the final path
/// component.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((open_utf8_dir(parent)?, name))
}

/// Create or truncate a file for writing, creating missing parent
/// directories first.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.create(name.as_str())
}

/// Create every missing ancestor directory of `path`.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent().filter(|parent| !parent.as_str().is_empty()) else {
        return Ok(());
    };
    let (base, relative) = base_dir_and_relative(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    base.create_dir_all(&relative)
}

/// Return whether `path` exists and is a directory.
///
/// A missing path is reported as an [`io::ErrorKind::NotFound`] error rather
/// than `false`, so callers can tell the two apart. Paths without a final
/// name, such as `.`, `..` or `/`, are opened directly.
pub fn path_is_dir(path: &Utf8Path) -> io::Result<bool> {
    if path.file_name().is_none() {
        return open_utf8_dir(path).map(|_| true);
    }
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_dir())
}

/// Split `path` into the directory it is anchored at and the path below it.
///
/// Absolute paths are anchored at their root (and drive prefix on Windows);
/// relative paths at the current directory.
pub fn base_dir_and_relative(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let mut base = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => base.push(component),
            _ => relative.push(component),
        }
    }
    if base.as_str().is_empty() {
        base.push(".");
    }
    Ok((open_utf8_dir(&base)?, relative))
}
