//! Diagnostic logging to stderr.
//!
//! Log output is controlled by the `DEV_CLEANER_LOG` environment variable using
//! [`EnvFilter`] directives (`debug`, `dev_cleaner_status=trace`, ...). Without it only
//! warnings are shown, such as an unreadable history file.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "DEV_CLEANER_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global stderr subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
