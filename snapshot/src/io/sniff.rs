//! Binary detection over the first bytes of a file on disk.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::core::sniff::{SNIFF_LEN, is_binary_prefix};

/// Classify the file at `path` as binary from its first [`SNIFF_LEN`] bytes.
///
/// Any failure to open or read the file counts as binary.
pub fn is_binary_file(path: &Path) -> bool {
    match read_prefix(path) {
        Ok(prefix) => is_binary_prefix(&prefix),
        Err(_) => true,
    }
}

fn read_prefix(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut prefix = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut prefix)?;
    Ok(prefix)
}
