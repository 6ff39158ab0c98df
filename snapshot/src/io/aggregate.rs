//! Appends collected files to the snapshot output stream.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::core::render::{decode_text, header, read_failure_line};
use crate::core::types::ReadFailure;

/// Outcome of an aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    /// Relative paths in the order their headers were written.
    pub written: Vec<PathBuf>,
    pub read_failures: Vec<ReadFailure>,
}

/// Writes a header and the decoded contents of each appended file.
///
/// Owns the output writer for the whole run. Unreadable inputs get a
/// placeholder line; failures writing the output are returned as errors.
pub struct Aggregator<W: Write> {
    root: PathBuf,
    out: W,
    report: AggregateReport,
}

impl<W: Write> Aggregator<W> {
    pub fn new(root: impl Into<PathBuf>, out: W) -> Self {
        Self {
            root: root.into(),
            out,
            report: AggregateReport::default(),
        }
    }

    /// Append one file. Paths outside the root are written as given.
    pub fn append(&mut self, path: &Path) -> Result<()> {
        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
        self.out
            .write_all(header(&relative).as_bytes())
            .context("write header")?;

        match fs::read(path) {
            Ok(bytes) => {
                debug!(path = %relative.display(), bytes = bytes.len(), "appending file");
                self.out
                    .write_all(decode_text(&bytes).as_bytes())
                    .with_context(|| format!("write contents of {}", relative.display()))?;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read file");
                self.out
                    .write_all(read_failure_line(&err).as_bytes())
                    .context("write read failure placeholder")?;
                self.report.read_failures.push(ReadFailure {
                    path: relative.clone(),
                    error: err.to_string(),
                });
            }
        }

        self.report.written.push(relative);
        Ok(())
    }

    /// Flush the output and return what was written.
    pub fn finish(mut self) -> Result<AggregateReport> {
        self.out.flush().context("flush output")?;
        Ok(self.report)
    }
}
