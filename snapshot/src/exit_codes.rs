//! Stable exit codes for the snapshot CLI.

/// Snapshot written. Individual unreadable files do not change this.
pub const OK: i32 = 0;
/// Root could not be resolved, or the output could not be opened or written.
pub const FAILURE: i32 = 1;
