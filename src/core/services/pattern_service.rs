//! Learns historical averages and intramonth spending patterns.

use std::collections::{HashMap, HashSet};

use chrono::Datelike;

use crate::domain::{
    days_in_month, Category, CategoryData, MonthKey, MonthSummary, SpendingPattern, Transaction,
};

use super::ServiceResult;

pub struct PatternService;

impl PatternService {
    /// Forecast inputs for every category with spending history.
    ///
    /// History comes from the completed months only: the current month is
    /// still partial and would drag the average down. Categories without
    /// history and inflow categories are dropped.
    pub fn category_data(
        categories: &[Category],
        summaries: &[MonthSummary],
    ) -> ServiceResult<Vec<CategoryData>> {
        let history: Vec<&MonthSummary> = summaries
            .iter()
            .filter(|summary| !summary.is_current_month)
            .collect();

        let mut data = Vec::new();
        for category in categories.iter().filter(|category| !category.is_inflow()) {
            let historical_average = Self::historical_average(&history, &category.uuid);
            if historical_average <= 0 {
                continue;
            }
            let transactions = history
                .iter()
                .filter_map(|summary| summary.usage_by_uuid(&category.uuid))
                .flat_map(|usage| usage.transactions.iter());
            data.push(CategoryData {
                id: category.uuid.clone(),
                name: category.name.clone(),
                budgeted: category.budgeted.abs(),
                spent: category.spent(),
                balance: category.balance,
                typical_spending_pattern: Self::typical_spending_pattern(transactions)?,
                historical_average,
            });
        }
        tracing::debug!(
            categories = categories.len(),
            with_history = data.len(),
            "derived forecast inputs"
        );
        Ok(data)
    }

    /// Mean absolute monthly usage of `uuid`; months without it count as zero.
    pub fn historical_average(summaries: &[&MonthSummary], uuid: &str) -> i64 {
        if summaries.is_empty() {
            return 0;
        }
        let total: i64 = summaries
            .iter()
            .filter_map(|summary| summary.usage_by_uuid(uuid))
            .map(|usage| usage.amount.abs())
            .sum();
        (total as f64 / summaries.len() as f64).round() as i64
    }

    /// Spend-weighted mean of `day / days_in_month` over `transactions`.
    ///
    /// Returns 0 when nothing was spent.
    pub fn typical_spending_pattern<'a, I>(transactions: I) -> ServiceResult<f64>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut weighted = 0.0;
        let mut total = 0.0;
        for transaction in transactions {
            let date = transaction.calendar_date()?;
            let position = date.day() as f64 / days_in_month(date) as f64;
            let amount = transaction.amount.abs() as f64;
            weighted += amount * position;
            total += amount;
        }
        if total == 0.0 {
            return Ok(0.0);
        }
        Ok(weighted / total)
    }

    /// Patterns per category id straight from transactions, in first-seen
    /// order. The average divides by the number of distinct months in which
    /// the category had activity; transactions without a category are skipped.
    pub fn spending_patterns(transactions: &[Transaction]) -> ServiceResult<Vec<SpendingPattern>> {
        let mut order: Vec<&str> = Vec::new();
        let mut grouped: HashMap<&str, Vec<&Transaction>> = HashMap::new();
        for transaction in transactions {
            let Some(category_id) = transaction
                .category_id
                .as_deref()
                .filter(|id| !id.is_empty())
            else {
                continue;
            };
            grouped
                .entry(category_id)
                .or_insert_with(|| {
                    order.push(category_id);
                    Vec::new()
                })
                .push(transaction);
        }

        let mut patterns = Vec::with_capacity(order.len());
        for category_id in order {
            let group = grouped.get(category_id).map(Vec::as_slice).unwrap_or_default();
            let months = group
                .iter()
                .map(|txn| txn.month_key())
                .collect::<Result<HashSet<MonthKey>, _>>()?;
            let total: i64 = group.iter().map(|txn| txn.amount.abs()).sum();
            let historical_average = if months.is_empty() {
                0
            } else {
                (total as f64 / months.len() as f64).round() as i64
            };
            patterns.push(SpendingPattern {
                category_id: category_id.to_string(),
                historical_average,
                typical_spending_pattern: Self::typical_spending_pattern(group.iter().copied())?,
            });
        }
        Ok(patterns)
    }
}
