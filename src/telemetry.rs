//! Process-level logging setup.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a JSON `tracing` subscriber filtered by `filter`.
///
/// `RUST_LOG` takes precedence over `filter` when set. Installing twice is
/// harmless: the second attempt is logged and ignored.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    if let Err(e) = fmt().with_env_filter(env_filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}
