//! Tracing initialization.

use std::io;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs a stderr subscriber filtered by `LEXSIM_LOG`
/// (e.g. `LEXSIM_LOG=rust_lexsim=debug`).
///
/// Falls back to `warn`, or `debug` when `verbose` is set. Stdout is left to
/// command output. Calling this more than once is harmless.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose { "debug" } else { "warn" };
        let filter =
            EnvFilter::try_from_env("LEXSIM_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        // A subscriber may already be installed by an embedding program
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(filter)
            .try_init();
    });
}
