//! Groups transactions by `YYYY-MM` month and nests category usages per month.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{MonthKey, MonthSummary, Transaction};

use super::{usage_service::UsageAccumulator, ServiceResult, UsageService};

pub struct SummaryService;

impl SummaryService {
    /// One reducer step. `today` decides which month is current; every
    /// summary's flag is refreshed against it.
    pub fn reduce(
        mut summaries: Vec<MonthSummary>,
        transaction: Transaction,
        today: NaiveDate,
    ) -> ServiceResult<Vec<MonthSummary>> {
        let month = transaction.month_key()?;
        let current = MonthKey::from_date(today);

        match summaries.iter_mut().find(|summary| summary.month == month) {
            Some(summary) => {
                let usages = std::mem::take(&mut summary.category_usages);
                summary.category_usages = UsageService::reduce(usages, transaction.clone());
                summary.overall_transactions.push(transaction);
            }
            None => summaries.push(MonthSummary {
                month,
                is_current_month: month == current,
                category_usages: UsageService::reduce(Vec::new(), transaction.clone()),
                overall_transactions: vec![transaction],
            }),
        }

        for summary in summaries.iter_mut() {
            summary.is_current_month = summary.month == current;
        }
        Ok(summaries)
    }

    /// Reduces a whole transaction list into month summaries in first-seen
    /// month order. Fails on the first transaction with a malformed date.
    pub fn summarize<I>(transactions: I, today: NaiveDate) -> ServiceResult<Vec<MonthSummary>>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut accumulator = MonthAccumulator::new(today);
        let mut count = 0usize;
        for transaction in transactions {
            if let Err(err) = accumulator.absorb(transaction) {
                tracing::warn!(error = %err, "aborting month summary reduction");
                return Err(err);
            }
            count += 1;
        }
        let summaries = accumulator.into_summaries();
        tracing::debug!(
            transactions = count,
            months = summaries.len(),
            "summarized transactions by month"
        );
        Ok(summaries)
    }

    /// Sorts summaries oldest month first.
    pub fn sort_chronologically(summaries: &mut [MonthSummary]) {
        summaries.sort_by_key(|summary| summary.month);
    }

    pub fn current_month(summaries: &[MonthSummary]) -> Option<&MonthSummary> {
        summaries.iter().find(|summary| summary.is_current_month)
    }

    /// Every summary except the current month, in their existing order.
    pub fn previous_months(summaries: &[MonthSummary]) -> Vec<&MonthSummary> {
        summaries
            .iter()
            .filter(|summary| !summary.is_current_month)
            .collect()
    }
}

struct MonthBucket {
    month: MonthKey,
    usages: UsageAccumulator,
    transactions: Vec<Transaction>,
}

/// Month buckets indexed by key; the bulk counterpart of [`SummaryService::reduce`].
pub struct MonthAccumulator {
    current: MonthKey,
    buckets: Vec<MonthBucket>,
    index: HashMap<MonthKey, usize>,
}

impl MonthAccumulator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current: MonthKey::from_date(today),
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn absorb(&mut self, transaction: Transaction) -> ServiceResult<()> {
        let month = transaction.month_key()?;
        let position = match self.index.get(&month) {
            Some(&position) => position,
            None => {
                self.index.insert(month, self.buckets.len());
                self.buckets.push(MonthBucket {
                    month,
                    usages: UsageAccumulator::default(),
                    transactions: Vec::new(),
                });
                self.buckets.len() - 1
            }
        };
        let bucket = &mut self.buckets[position];
        bucket.usages.absorb(transaction.clone());
        bucket.transactions.push(transaction);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn into_summaries(self) -> Vec<MonthSummary> {
        let current = self.current;
        self.buckets
            .into_iter()
            .map(|bucket| MonthSummary {
                month: bucket.month,
                is_current_month: bucket.month == current,
                category_usages: bucket.usages.into_usages(),
                overall_transactions: bucket.transactions,
            })
            .collect()
    }
}
