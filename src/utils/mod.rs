pub mod build_info;

use std::env;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};

/// Installs the global tracing subscriber described by `logging`.
pub fn init_tracing(logging: &LoggingConfig) {
    let env_directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(logging, env_directives.as_deref());

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(logging.with_target)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Filter built from the configured directive with `env_directives`
/// (usually `RUST_LOG`) layered on top.
///
/// An environment directive replaces the configured one for the same target.
/// An unparsable configured filter falls back to `budget_insights=info`.
pub fn env_filter(logging: &LoggingConfig, env_directives: Option<&str>) -> EnvFilter {
    let mut filter = EnvFilter::try_new(&logging.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let overrides = env_directives
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .filter_map(|raw| raw.parse::<Directive>().ok());
    for directive in overrides {
        filter = filter.add_directive(directive);
    }
    filter
}
