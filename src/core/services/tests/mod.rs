mod usage_service_tests;

use crate::domain::Transaction;

/// Transaction fixture mirroring the sync layer's shape.
pub(super) fn txn(
    id: &str,
    date: &str,
    amount: i64,
    category: Option<(&str, &str)>,
) -> Transaction {
    let base = Transaction::new(id, date, amount)
        .with_account("Checking")
        .with_payee("Walmart")
        .with_memo("Groceries");
    match category {
        Some((category_id, name)) => base.with_category(category_id, name),
        None => base,
    }
}
