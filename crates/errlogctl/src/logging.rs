//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the level comes from --verbose/--quiet.
//! Output goes to stdout, which is where skipped-file diagnostics belong.

use tracing_subscriber::EnvFilter;

pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: tests may install a subscriber first
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
