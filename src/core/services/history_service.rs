use std::collections::HashMap;

use crate::domain::{CategoryHistory, MonthKey, Transaction};

use super::ServiceResult;

/// Rolls transactions up into one activity record per category id and month.
pub struct HistoryService;

impl HistoryService {
    /// One reducer step. Transactions without a category id are keyed by `""`.
    pub fn reduce(
        mut histories: Vec<CategoryHistory>,
        transaction: &Transaction,
        budget_id: &str,
    ) -> ServiceResult<Vec<CategoryHistory>> {
        let month = transaction.month_key()?;
        let category_id = transaction.category_id.as_deref().unwrap_or_default();
        match histories
            .iter_mut()
            .find(|history| history.category_id == category_id && history.month == month)
        {
            Some(history) => history.activity += transaction.amount,
            None => histories.push(CategoryHistory {
                category_id: category_id.to_string(),
                month,
                budget_id: budget_id.to_string(),
                activity: transaction.amount,
            }),
        }
        Ok(histories)
    }

    /// Builds every history record of `transactions` in first-seen order.
    pub fn build(
        budget_id: &str,
        transactions: &[Transaction],
    ) -> ServiceResult<Vec<CategoryHistory>> {
        let mut histories: Vec<CategoryHistory> = Vec::new();
        let mut index: HashMap<(String, MonthKey), usize> = HashMap::new();
        for transaction in transactions {
            let month = transaction.month_key()?;
            let category_id = transaction.category_id.clone().unwrap_or_default();
            match index.get(&(category_id.clone(), month)) {
                Some(&position) => histories[position].activity += transaction.amount,
                None => {
                    index.insert((category_id.clone(), month), histories.len());
                    histories.push(CategoryHistory {
                        category_id,
                        month,
                        budget_id: budget_id.to_string(),
                        activity: transaction.amount,
                    });
                }
            }
        }
        Ok(histories)
    }

    /// Histories of one calendar year, e.g. before replacing them in storage.
    pub fn for_year(histories: &[CategoryHistory], year: i32) -> Vec<&CategoryHistory> {
        histories
            .iter()
            .filter(|history| history.month.year() == year)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(category_id: &str, month: &str, activity: i64) -> CategoryHistory {
        CategoryHistory {
            category_id: category_id.into(),
            month: month.parse().unwrap(),
            budget_id: "1".into(),
            activity,
        }
    }

    #[test]
    fn updates_existing_history() {
        let histories = vec![history("1", "2021-01", -500), history("2", "2021-01", -300)];
        let txn = Transaction::new("t", "2021-01-15", -200).with_category("1", "Food");
        let result = HistoryService::reduce(histories, &txn, "1").unwrap();
        assert_eq!(
            result,
            vec![history("1", "2021-01", -700), history("2", "2021-01", -300)]
        );
    }

    #[test]
    fn adds_history_for_new_category() {
        let histories = vec![history("1", "2021-01", -500)];
        let txn = Transaction::new("t", "2021-01-15", -200).with_category("2", "Rent");
        let result = HistoryService::reduce(histories, &txn, "1").unwrap();
        assert_eq!(
            result,
            vec![history("1", "2021-01", -500), history("2", "2021-01", -200)]
        );
    }

    #[test]
    fn build_matches_step_reducer() {
        let transactions = vec![
            Transaction::new("a", "2021-01-02", -100).with_category("1", "Food"),
            Transaction::new("b", "2021-02-02", -50).with_category("1", "Food"),
            Transaction::new("c", "2021-01-20", -25).with_category("1", "Food"),
            Transaction::new("d", "2020-12-31", 10),
        ];
        let stepped = transactions
            .iter()
            .try_fold(Vec::new(), |acc, txn| HistoryService::reduce(acc, txn, "1"))
            .unwrap();
        let built = HistoryService::build("1", &transactions).unwrap();
        assert_eq!(stepped, built);
        assert_eq!(built[0].activity, -125);
        assert_eq!(built[2].category_id, "");
        assert_eq!(HistoryService::for_year(&built, 2021).len(), 2);
    }
}
