use serde::{Deserialize, Serialize};

use crate::domain::{
    category::Category,
    forecast::MonthlyForecast,
    month::{MonthSummary, MonthTotal},
};

/// Everything the budget page needs for one budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetOverview {
    /// Share of the current month already elapsed, 0..=100.
    pub month_percentage: f64,
    pub month_summaries: Vec<MonthSummary>,
    pub categories: Vec<Category>,
    pub month_total: MonthTotal,
    pub forecast: MonthlyForecast,
}

impl BudgetOverview {
    pub fn current_month(&self) -> Option<&MonthSummary> {
        self.month_summaries
            .iter()
            .find(|summary| summary.is_current_month)
    }
}
