//! Shared value types for the collect pipeline.

use std::fmt;
use std::path::PathBuf;

/// Reason a candidate file was left out of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Extension,
    FileName,
    Binary,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Exclusion::Extension => "extension",
            Exclusion::FileName => "file name",
            Exclusion::Binary => "binary",
        };
        f.write_str(label)
    }
}

/// An accepted file whose contents could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    /// Path relative to the snapshot root.
    pub path: PathBuf,
    pub error: String,
}
