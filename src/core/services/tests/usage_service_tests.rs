use crate::core::services::{UsageAccumulator, UsageService};
use crate::domain::CategoryUsage;

use super::txn;

#[test]
fn single_transaction_creates_one_usage() {
    let transaction = txn("123", "2021-01-01", 100, Some(("123", "Groceries")));
    let result = UsageService::reduce(Vec::new(), transaction.clone());
    assert_eq!(
        result,
        vec![CategoryUsage {
            name: Some("Groceries".into()),
            uuid: Some("123".into()),
            amount: 100,
            transactions: vec![transaction],
        }]
    );
}

#[test]
fn matching_name_increments_amount_and_appends() {
    let transaction = txn("123", "2021-01-01", 100, Some(("123", "Groceries")));
    let existing = vec![CategoryUsage::seeded(transaction.clone())];
    let result = UsageService::reduce(existing, transaction.clone());
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].amount, 200);
    assert_eq!(result[0].transactions, vec![transaction.clone(), transaction]);
}

#[test]
fn different_name_appends_new_usage_even_with_same_id() {
    let rent = txn("123", "2021-01-01", 100, Some(("123", "Rent")));
    let groceries = txn("123", "2021-01-01", 100, Some(("123", "Groceries")));
    let result = UsageService::reduce(vec![CategoryUsage::seeded(rent)], groceries);
    let names: Vec<Option<&str>> = result.iter().map(|u| u.name.as_deref()).collect();
    assert_eq!(names, [Some("Rent"), Some("Groceries")]);
    assert!(result.iter().all(|u| u.amount == 100));
}

#[test]
fn uncategorized_transactions_share_one_bucket() {
    let transactions = vec![
        txn("1", "2021-01-01", -10, None),
        txn("2", "2021-01-02", -20, Some(("c", "Fuel"))),
        txn("3", "2021-01-03", -30, None),
    ];
    let usages = UsageService::aggregate(transactions);
    assert_eq!(usages.len(), 2);
    assert!(usages[0].is_uncategorized());
    assert_eq!(usages[0].amount, -40);
    assert_eq!(usages[0].uuid, None);
}

#[test]
fn accumulator_matches_step_reducer() {
    let transactions = vec![
        txn("1", "2021-01-01", 100, Some(("a", "Groceries"))),
        txn("2", "2021-01-01", -250, Some(("b", "Rent"))),
        txn("3", "2021-01-04", 75, Some(("a", "Groceries"))),
        txn("4", "2021-01-09", -5, None),
        txn("5", "2021-01-12", -1, Some(("b", "Rent"))),
    ];
    let stepped = transactions
        .iter()
        .cloned()
        .fold(Vec::new(), UsageService::reduce);
    assert_eq!(UsageService::aggregate(transactions.clone()), stepped);

    let resumed = UsageAccumulator::from_usages(stepped[..1].to_vec())
        .push(transactions[1].clone())
        .push(transactions[3].clone());
    assert_eq!(resumed.usages().len(), 3);
}

#[test]
fn usage_amount_equals_sum_of_its_transactions() {
    let transactions: Vec<_> = (0..60)
        .map(|i| {
            let name = ["Groceries", "Rent", "Fuel"][i % 3];
            let amount = if i % 4 == 0 { 1_000 } else { -(i as i64) * 37 };
            txn(&i.to_string(), "2022-03-05", amount, Some((name, name)))
        })
        .collect();
    let total: i64 = transactions.iter().map(|t| t.amount).sum();
    let usages = UsageService::aggregate(transactions);
    for usage in &usages {
        assert_eq!(usage.amount, usage.transactions_total());
    }
    assert_eq!(usages.iter().map(|u| u.amount).sum::<i64>(), total);
}
