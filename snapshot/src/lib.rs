//! Flatten a project tree into a single text snapshot.
//!
//! Every text file under a root directory is appended to one output file,
//! preceded by a header naming its relative path. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (denylists, binary sniffing,
//!   header rendering). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (directory walk, file reads,
//!   output writing).
//!
//! [`collect`] coordinates the two to implement the CLI.

pub mod collect;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
