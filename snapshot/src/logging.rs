//! Diagnostic tracing for the snapshot CLI.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Per-entry decisions (pruned directories,
//!   excluded files, skipped walk errors) and the run summary, filtered by
//!   `RUST_LOG` and written to stderr.
//!
//! - **Operator output (`main`)**: The completion message on stdout and one
//!   `warning:` line per unreadable file on stderr. Always printed,
//!   unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber used by the `snapshot` binary.
///
/// The filter comes from `RUST_LOG`; without it only warnings are shown, so
/// walk errors surface while per-file decisions stay quiet.
///
/// # Example
/// ```bash
/// RUST_LOG=snapshot=debug snapshot -d . -o out.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
