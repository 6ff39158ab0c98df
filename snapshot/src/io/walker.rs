//! Lazy directory traversal that prunes denied subtrees.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::denylist::Denylists;

/// Enumerates candidate files under a root directory.
///
/// Directories whose name is denied are pruned at any depth below the root.
/// Entries are visited depth-first, sorted by file name within each directory.
/// Symlinked directories are not descended into.
#[derive(Debug, Clone)]
pub struct TreeWalker<'a> {
    root: PathBuf,
    denylists: &'a Denylists,
    skip: Option<PathBuf>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: impl Into<PathBuf>, denylists: &'a Denylists) -> Self {
        Self {
            root: root.into(),
            denylists,
            skip: None,
        }
    }

    /// Never yield `path` (compared as given, so pass the same form the walk produces).
    pub fn skip_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip = Some(path.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh walk. Each call restarts from the root.
    pub fn candidates(&self) -> Candidates<'_> {
        let inner = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Candidates {
            inner,
            denylists: self.denylists,
            skip: self.skip.as_deref(),
        }
    }
}

/// Iterator returned by [`TreeWalker::candidates`].
pub struct Candidates<'w> {
    inner: walkdir::IntoIter,
    denylists: &'w Denylists,
    skip: Option<&'w Path>,
}

impl Iterator for Candidates<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                if entry.depth() > 0 && self.is_denied_dir(&entry) {
                    debug!(path = %entry.path().display(), "pruning excluded directory");
                    self.inner.skip_current_dir();
                }
                continue;
            }

            if !is_file_candidate(&entry) {
                debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }
            if self.skip.is_some_and(|skip| skip == entry.path()) {
                debug!(path = %entry.path().display(), "skipping output file");
                continue;
            }
            return Some(entry.into_path());
        }
    }
}

impl Candidates<'_> {
    fn is_denied_dir(&self, entry: &DirEntry) -> bool {
        entry
            .file_name()
            .to_str()
            .is_some_and(|name| self.denylists.excludes_dir(name))
    }
}

/// Regular files, and symlinks that resolve to regular files.
fn is_file_candidate(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && entry.path().is_file()
}
