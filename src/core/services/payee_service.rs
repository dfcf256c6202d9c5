use std::collections::HashMap;

use crate::domain::{PayeeActivity, Transaction};

/// Totals outflows per cleaned payee name; inflows are ignored.
pub struct PayeeService;

impl PayeeService {
    pub fn reduce(mut payees: Vec<PayeeActivity>, transaction: &Transaction) -> Vec<PayeeActivity> {
        if !transaction.is_outflow() {
            return payees;
        }
        let payee_name = transaction.payee();
        match payees.iter_mut().find(|payee| payee.payee_name == payee_name) {
            Some(payee) => payee.activity += transaction.amount,
            None => payees.push(PayeeActivity {
                payee_name: payee_name.to_string(),
                activity: transaction.amount,
            }),
        }
        payees
    }

    pub fn aggregate(transactions: &[Transaction]) -> Vec<PayeeActivity> {
        let mut payees: Vec<PayeeActivity> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for transaction in transactions.iter().filter(|txn| txn.is_outflow()) {
            let payee_name = transaction.payee();
            match index.get(payee_name) {
                Some(&position) => payees[position].activity += transaction.amount,
                None => {
                    index.insert(payee_name.to_string(), payees.len());
                    payees.push(PayeeActivity {
                        payee_name: payee_name.to_string(),
                        activity: transaction.amount,
                    });
                }
            }
        }
        payees
    }

    /// The `limit` payees with the largest outflow, biggest first.
    pub fn top_payees(transactions: &[Transaction], limit: usize) -> Vec<PayeeActivity> {
        let mut payees = Self::aggregate(transactions);
        payees.sort_by(|a, b| {
            a.activity
                .cmp(&b.activity)
                .then_with(|| a.payee_name.cmp(&b.payee_name))
        });
        payees.truncate(limit);
        payees
    }
}
