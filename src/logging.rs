//! Tracing setup for the command line tool.
//!
//! The subscriber is only installed when `IMPORTSCOPE_LOG` (or `RUST_LOG`) is
//! set, using the same filter syntax as `RUST_LOG`:
//!
//! ```bash
//! IMPORTSCOPE_LOG=debug importscope check src
//! IMPORTSCOPE_LOG="importscope::check=trace" importscope check src
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "IMPORTSCOPE_LOG";

/// Build an `EnvFilter` from `IMPORTSCOPE_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(val) = std::env::var(LOG_ENV) {
        return Some(EnvFilter::builder().parse_lossy(val));
    }
    std::env::var("RUST_LOG")
        .ok()
        .map(|_| EnvFilter::from_default_env())
}

/// Initialise the global tracing subscriber.
///
/// All output goes to stderr so it never mixes with reports on stdout.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    // A subscriber may already be installed when embedded in another tool.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
