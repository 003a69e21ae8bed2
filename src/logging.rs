//! Tracing setup for pipelines embedding git-flow.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "GIT_FLOW_LOG";

/// Initialize tracing with the GIT_FLOW_LOG environment variable.
///
/// Defaults to "info" level if GIT_FLOW_LOG is not set. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
