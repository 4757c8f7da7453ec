//! Test logging setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a tracing subscriber that prints through libtest's captured output.
///
/// Uses the `RUST_LOG` environment variable for filtering, defaulting to
/// "warn". Only the first call in a process installs anything; later calls
/// are no-ops.
pub fn init() {
    let fmt_layer = fmt::layer()
        .with_test_writer()
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
