//! Log subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for terminals).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Install the global subscriber.
///
/// Logs go to stderr so stdout stays clean for command output. `RUST_LOG`
/// overrides the level picked from `verbose`.
pub fn init(verbose: bool, format: LogFormat) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Human => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    // Already installed (e.g., by a test harness)
    if result.is_err() {
        tracing::debug!("log subscriber already set");
    }
}
