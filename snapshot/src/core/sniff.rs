//! Byte-class heuristic for telling binary content from text.

/// Number of leading bytes inspected when sniffing a file.
pub const SNIFF_LEN: usize = 1024;

/// Classify a byte prefix as binary.
///
/// - Any NUL byte makes the prefix binary.
/// - Otherwise it is binary if it contains a control byte outside
///   BEL, BS, TAB, LF, FF, CR and ESC.
///
/// Bytes `0x80..=0xFF` are always accepted, so non-UTF-8 data without low
/// control bytes is classified as text. An empty prefix is text.
pub fn is_binary_prefix(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return true;
    }
    !prefix.iter().copied().all(is_text_byte)
}

fn is_text_byte(byte: u8) -> bool {
    matches!(byte, 7 | 8 | 9 | 10 | 12 | 13 | 27 | 0x20..=0xFF)
}
