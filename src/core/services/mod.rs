pub mod category_service;
pub mod forecast_service;
pub mod history_service;
pub mod overview_service;
pub mod pattern_service;
pub mod payee_service;
pub mod summary_service;
pub mod usage_service;

pub use category_service::{category_usage_mapper, CategoryService};
pub use forecast_service::ForecastService;
pub use history_service::HistoryService;
pub use overview_service::OverviewService;
pub use pattern_service::PatternService;
pub use payee_service::PayeeService;
pub use summary_service::{MonthAccumulator, SummaryService};
pub use usage_service::{UsageAccumulator, UsageService};

use crate::errors::InsightError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] InsightError),
}

#[cfg(test)]
mod tests;
