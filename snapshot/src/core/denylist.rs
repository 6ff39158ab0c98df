//! Fixed exclusion sets for directories, extensions and file names.

use std::collections::BTreeSet;

/// Directory names whose whole subtree is skipped (exact match).
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    ".idea",
    ".vscode",
    ".next",
    "build",
    "dist",
    "target",
];

/// File extensions (with leading dot) that are never collected.
pub const EXCLUDED_EXTENSIONS: &[&str] = &[
    ".pyc", ".exe", ".dll", ".so", ".dylib", ".woff", ".woff2", ".png", ".jpg", ".jpeg", ".gif",
    ".bmp", ".mp3", ".mp4", ".avi", ".mkv", ".pdf", ".zip", ".tar", ".gz", ".rar", ".7z", ".bin",
    ".iso",
];

/// Exact file names that are never collected.
pub const EXCLUDED_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "thumbs.db",
    "desktop.ini",
    "folder_structure.txt",
];

/// Immutable exclusion configuration shared by the walker and the filter.
///
/// Directory names match exactly. Extensions and file names are stored
/// lowercased and matched case-insensitively; extensions always carry a
/// leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylists {
    dirs: BTreeSet<String>,
    extensions: BTreeSet<String>,
    files: BTreeSet<String>,
}

impl Default for Denylists {
    fn default() -> Self {
        Self::new(EXCLUDED_DIRS, EXCLUDED_EXTENSIONS, EXCLUDED_FILES)
    }
}

impl Denylists {
    pub fn new<D, E, F>(dirs: D, extensions: E, files: F) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            dirs: dirs.into_iter().map(|d| d.as_ref().to_string()).collect(),
            extensions: extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
            files: files
                .into_iter()
                .map(|f| f.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True if a directory with this name must be pruned.
    pub fn excludes_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// True if the extension is denied. Accepts `png`, `.png` or `.PNG`.
    pub fn excludes_extension(&self, extension: &str) -> bool {
        self.extensions.contains(&normalize_extension(extension))
    }

    pub fn excludes_file_name(&self, name: &str) -> bool {
        self.files.contains(&name.to_lowercase())
    }
}

fn normalize_extension(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
