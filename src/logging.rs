// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! Events are written to stderr. The filter comes from the `TEE_STUDIO_LOG`
//! environment variable when set, otherwise from `general.log_level` in the
//! config file.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable overriding the configured log filter.
pub const ENV_LOG_FILTER: &str = "TEE_STUDIO_LOG";

/// Builds the filter from the environment or the configured level.
///
/// An unparsable directive falls back to `info`.
fn build_filter(configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER)
        .or_else(|_| EnvFilter::try_new(configured_level))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL))
}

fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(writer),
        )
}

/// Installs the global subscriber.
///
/// Idempotent: only the first call takes effect.
pub fn init(configured_level: &str) {
    let _ = build_subscriber(build_filter(configured_level), std::io::stderr).try_init();
}
