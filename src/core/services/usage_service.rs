//! Folds transactions into per-category usage buckets keyed by category name.
//!
//! Transactions without a category name share a single uncategorized bucket
//! (`name == None`). Reducers take their accumulator by value, so a caller
//! never observes a half-updated sequence.

use std::collections::HashMap;

use crate::domain::{CategoryUsage, Transaction};

pub struct UsageService;

impl UsageService {
    /// One reducer step: adds `transaction` to the usage with the same
    /// category name, or appends a new usage seeded from it.
    pub fn reduce(mut usages: Vec<CategoryUsage>, transaction: Transaction) -> Vec<CategoryUsage> {
        match usages
            .iter_mut()
            .find(|usage| usage.name == transaction.category_name)
        {
            Some(usage) => usage.absorb(transaction),
            None => usages.push(CategoryUsage::seeded(transaction)),
        }
        usages
    }

    /// Reduces a whole transaction list, keeping first-seen category order.
    pub fn aggregate<I>(transactions: I) -> Vec<CategoryUsage>
    where
        I: IntoIterator<Item = Transaction>,
    {
        transactions
            .into_iter()
            .fold(UsageAccumulator::default(), UsageAccumulator::push)
            .into_usages()
    }
}

/// Usage buckets with a name index for constant-time lookup.
///
/// Produces exactly what repeated [`UsageService::reduce`] calls produce.
#[derive(Debug, Default, Clone)]
pub struct UsageAccumulator {
    usages: Vec<CategoryUsage>,
    index: HashMap<Option<String>, usize>,
}

impl UsageAccumulator {
    pub fn from_usages(usages: Vec<CategoryUsage>) -> Self {
        let mut index = HashMap::with_capacity(usages.len());
        for (position, usage) in usages.iter().enumerate() {
            index.entry(usage.name.clone()).or_insert(position);
        }
        Self { usages, index }
    }

    pub fn push(mut self, transaction: Transaction) -> Self {
        self.absorb(transaction);
        self
    }

    pub fn absorb(&mut self, transaction: Transaction) {
        match self.index.get(&transaction.category_name) {
            Some(&position) => self.usages[position].absorb(transaction),
            None => {
                self.index
                    .insert(transaction.category_name.clone(), self.usages.len());
                self.usages.push(CategoryUsage::seeded(transaction));
            }
        }
    }

    pub fn usages(&self) -> &[CategoryUsage] {
        &self.usages
    }

    pub fn into_usages(self) -> Vec<CategoryUsage> {
        self.usages
    }
}
