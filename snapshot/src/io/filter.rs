//! Per-file exclusion decisions.

use std::path::Path;

use crate::core::denylist::Denylists;
use crate::core::types::Exclusion;
use crate::io::sniff::is_binary_file;

/// Decides whether a candidate file is left out of the snapshot.
///
/// Checks run cheapest first (extension, name, content sniff) and stop at the
/// first match. Directory pruning happens in the walker, not here.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionFilter<'a> {
    denylists: &'a Denylists,
}

impl<'a> ExclusionFilter<'a> {
    pub fn new(denylists: &'a Denylists) -> Self {
        Self { denylists }
    }

    /// Reason `path` is excluded, or `None` if it should be collected.
    pub fn exclusion(&self, path: &Path) -> Option<Exclusion> {
        if path
            .extension()
            .is_some_and(|ext| self.denylists.excludes_extension(&ext.to_string_lossy()))
        {
            return Some(Exclusion::Extension);
        }
        if path
            .file_name()
            .is_some_and(|name| self.denylists.excludes_file_name(&name.to_string_lossy()))
        {
            return Some(Exclusion::FileName);
        }
        if is_binary_file(path) {
            return Some(Exclusion::Binary);
        }
        None
    }

    pub fn should_exclude(&self, path: &Path) -> bool {
        self.exclusion(path).is_some()
    }
}
