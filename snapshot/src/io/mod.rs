//! I/O helpers for the collect pipeline.

pub mod aggregate;
pub mod filter;
pub mod sniff;
pub mod walker;
