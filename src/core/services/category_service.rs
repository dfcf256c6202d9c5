//! Maps usages back into categories and derives month totals from categories.

use std::cmp::Ordering;

use crate::amounts::percentage_spent;
use crate::domain::{Category, CategoryUsage, MonthTotal, Transaction};

use super::UsageService;

/// Builds a mapper turning a usage into a category of budget `budget_id`.
///
/// A usage carries no month-boundary certainty, so its amount becomes both
/// activity and balance while budgeted and target stay zero.
pub fn category_usage_mapper(budget_id: impl ToString) -> impl Fn(&CategoryUsage) -> Category {
    let budget_id = budget_id.to_string();
    move |usage| CategoryService::from_usage(&budget_id, usage)
}

pub struct CategoryService;

impl CategoryService {
    pub fn from_usage(budget_id: &str, usage: &CategoryUsage) -> Category {
        Category {
            id: None,
            name: usage.name.clone().unwrap_or_default(),
            uuid: usage.uuid.clone().unwrap_or_default(),
            balance: usage.amount,
            budgeted: 0,
            activity: usage.amount,
            target_amount: 0,
            budget_id: budget_id.to_string(),
            goal: None,
            typical_spending_pattern: None,
            historical_average: None,
        }
    }

    /// Reduces transactions into usages, maps them, and sorts by name.
    pub fn categories_from_transactions<I>(budget_id: &str, transactions: I) -> Vec<Category>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mapper = category_usage_mapper(budget_id);
        let mut categories: Vec<Category> = UsageService::aggregate(transactions)
            .iter()
            .map(mapper)
            .collect();
        categories.sort_by(category_sorter);
        categories
    }

    /// Sums non-inflow categories. Only negative activity counts as spent.
    pub fn calculate_totals(categories: &[Category]) -> MonthTotal {
        Self::without_inflow(categories).fold(MonthTotal::default(), |mut total, category| {
            if category.activity < 0 {
                total.total_spent += category.activity;
            }
            total.total_budgeted += category.budgeted;
            total.total_balance += category.balance;
            total
        })
    }

    pub fn without_inflow(categories: &[Category]) -> impl Iterator<Item = &Category> {
        categories.iter().filter(|category| !category.is_inflow())
    }

    /// Budgeted categories, least used first.
    pub fn budgeted_by_usage(categories: &[Category]) -> Vec<&Category> {
        let mut budgeted: Vec<&Category> = categories
            .iter()
            .filter(|category| category.budgeted > 0)
            .collect();
        budgeted.sort_by(|a, b| {
            percentage_spent(a)
                .partial_cmp(&percentage_spent(b))
                .unwrap_or(Ordering::Equal)
        });
        budgeted
    }

    /// Categories referenced by at least one transaction's category id.
    pub fn with_transactions<'a>(
        categories: &'a [Category],
        transactions: &[Transaction],
    ) -> Vec<&'a Category> {
        categories
            .iter()
            .filter(|category| {
                transactions
                    .iter()
                    .any(|txn| txn.category_id.as_deref() == Some(category.uuid.as_str()))
            })
            .collect()
    }
}

/// Case-insensitive name order, exact name as tie-breaker.
pub fn category_sorter(a: &Category, b: &Category) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
