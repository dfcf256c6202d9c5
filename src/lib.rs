#![doc(test(attr(deny(warnings))))]

//! Budget Insights folds YNAB transaction streams into per-category and
//! per-month usage summaries, derives spending percentages, and forecasts
//! end-of-month balances from partial-month activity.

pub mod amounts;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

use crate::config::LoggingConfig;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing with the default logging configuration.
pub fn init() {
    init_with(&LoggingConfig::default());
}

/// Initializes global tracing from an explicit logging configuration.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_with(logging: &LoggingConfig) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(logging);
        tracing::info!("Budget Insights tracing initialized.");
    });
}
