use chrono::NaiveDate;

use crate::amounts::month_percentage;
use crate::domain::{BudgetOverview, Category, ForecastSettings, Transaction};

use super::{
    category_service::category_sorter, CategoryService, ForecastService, PatternService,
    ServiceResult, SummaryService,
};

/// Assembles the budget page data from raw transactions and stored categories.
pub struct OverviewService;

impl OverviewService {
    pub fn build(
        transactions: Vec<Transaction>,
        categories: &[Category],
        today: NaiveDate,
        settings: &ForecastSettings,
    ) -> ServiceResult<BudgetOverview> {
        let month_summaries = SummaryService::summarize(transactions, today)?;
        let category_data = PatternService::category_data(categories, &month_summaries)?;
        let forecast = ForecastService::forecast_month(&category_data, today, settings);
        let month_total = CategoryService::calculate_totals(categories);

        let mut sorted = categories.to_vec();
        sorted.sort_by(category_sorter);

        tracing::info!(
            months = month_summaries.len(),
            categories = sorted.len(),
            forecast_categories = category_data.len(),
            "built budget overview"
        );

        Ok(BudgetOverview {
            month_percentage: month_percentage(today),
            month_summaries,
            categories: sorted,
            month_total,
            forecast,
        })
    }
}
