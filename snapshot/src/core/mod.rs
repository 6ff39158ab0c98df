//! Deterministic, pure logic for building a snapshot.
//!
//! Core modules must be free of I/O side effects. They operate on byte
//! slices, names and paths and return deterministic outputs suitable for tests.

pub mod denylist;
pub mod render;
pub mod sniff;
pub mod types;
