//! Tracing initialization for hosts and tests.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with an env-derived filter.
///
/// JSON output when `LOG_FORMAT=json`, human-readable otherwise. Repeated
/// calls after the first are no-ops, so tests can call this freely.
pub fn init() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("vboost=info".parse().expect("valid log directive"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .try_init()
            .ok();
    }
}
