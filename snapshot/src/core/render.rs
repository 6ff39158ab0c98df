//! Text fragments written to the snapshot output.

use std::fmt::Display;
use std::path::Path;

const RULE: &str = "====================";

/// Header that precedes each collected file.
///
/// Format: `\n==================== <relative_path> ====================\n`.
pub fn header(relative: &Path) -> String {
    format!("\n{RULE} {} {RULE}\n", relative.display())
}

/// Placeholder written in place of contents that could not be read.
pub fn read_failure_line(err: impl Display) -> String {
    format!("Could not read file: {err}\n")
}

/// Decode bytes as UTF-8 text.
///
/// Invalid sequences are dropped. `\r\n` and lone `\r` line endings are
/// translated to `\n`.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    if text.contains('\r') {
        text = text.replace("\r\n", "\n").replace('\r', "\n");
    }
    text
}
