//! Transaction records as handed over by the sync layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{Displayable, UNCATEGORIZED_LABEL},
    month::{parse_date_prefix, MonthKey},
};
use crate::errors::Result;

/// A single financial movement. `amount` is in milliunits, negative for outflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub account_name: String,
    pub amount: i64,
    /// ISO-8601 date, `YYYY-MM-DD` optionally followed by a time part.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub payee_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clean_payee_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl Transaction {
    pub fn new(id: impl Into<String>, date: impl Into<String>, amount: i64) -> Self {
        Self {
            id: id.into(),
            account_name: String::new(),
            amount,
            date: date.into(),
            category_id: None,
            category_name: None,
            payee_name: String::new(),
            clean_payee_name: None,
            memo: None,
        }
    }

    pub fn with_category(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self.category_name = Some(name.into());
        self
    }

    pub fn with_account(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = account_name.into();
        self
    }

    pub fn with_payee(mut self, payee_name: impl Into<String>) -> Self {
        self.payee_name = payee_name.into();
        self
    }

    pub fn with_clean_payee(mut self, clean_payee_name: impl Into<String>) -> Self {
        self.clean_payee_name = Some(clean_payee_name.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Month bucket of the transaction, taken from the `YYYY-MM` date prefix.
    pub fn month_key(&self) -> Result<MonthKey> {
        MonthKey::from_date_str(&self.date)
    }

    /// Calendar date of the transaction, ignoring any time component.
    pub fn calendar_date(&self) -> Result<NaiveDate> {
        parse_date_prefix(&self.date)
    }

    /// Cleaned payee name when available, raw payee name otherwise.
    pub fn payee(&self) -> &str {
        self.clean_payee_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.payee_name)
    }

    pub fn is_outflow(&self) -> bool {
        self.amount < 0
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        let category = self
            .category_name
            .as_deref()
            .unwrap_or(UNCATEGORIZED_LABEL);
        format!("{} | {} | {}", self.date, self.payee(), category)
    }
}
