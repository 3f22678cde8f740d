//! Tracing setup for the command-line front end.
//!
//! `RUST_LOG` wins when set. Otherwise `--debug` or `FOLIO_DEBUG=1` selects
//! `trace`, `--verbose` selects `debug`, and the default is `warn`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable enabling trace output.
pub const DEBUG_ENV: &str = "FOLIO_DEBUG";

pub fn is_debug_enabled() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Default level directive for the given flags.
pub fn default_directive(verbose: bool, debug: bool) -> &'static str {
    if debug || is_debug_enabled() {
        "trace"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

pub fn init_logging(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, debug)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init();
}
