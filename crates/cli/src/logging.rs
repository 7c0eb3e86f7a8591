// crates/cli/src/logging.rs
//! Tracing initialization for the binary.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g.
/// `CHANGED_FILES_LOG=changed_files_infra=debug`.
pub const LOG_ENV: &str = "CHANGED_FILES_LOG";

static INIT: Once = Once::new();

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

/// Install a stderr fmt subscriber. Stdout is reserved for results.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing(verbose: u8, quiet: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0, false), "warn");
        assert_eq!(default_directive(1, false), "info");
        assert_eq!(default_directive(2, false), "debug");
        assert_eq!(default_directive(7, false), "trace");
        assert_eq!(default_directive(0, true), "error");
    }
}
