//! Aggregation, mapping, and forecasting services plus their small helpers.

pub mod clock;
pub mod services;
pub mod status;
pub mod utils;
