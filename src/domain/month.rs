//! Month keys, per-month summaries, and month totals.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{category::CategoryUsage, transaction::Transaction};
use crate::errors::{InsightError, Result};

/// A calendar month rendered as `YYYY-MM`.
///
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(InsightError::InvalidInput(format!(
                "month {year:04}-{month:02} is out of range"
            )));
        }
        Ok(Self { year, month })
    }

    /// Month of the `YYYY-MM-DD` prefix of an ISO-8601 date or datetime.
    pub fn from_date_str(date: &str) -> Result<Self> {
        parse_date_prefix(date).map(Self::from_date)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.first_day().map(days_in_month).unwrap_or(31)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = InsightError;

    /// Parses a bare `YYYY-MM` key.
    fn from_str(key: &str) -> Result<Self> {
        let invalid = || InsightError::InvalidDateFormat(key.to_string());
        let bytes = key.as_bytes();
        if bytes.len() != 7
            || bytes[4] != b'-'
            || !all_digits(&bytes[..4])
            || !all_digits(&bytes[5..])
        {
            return Err(invalid());
        }
        let year = key[..4].parse().map_err(|_| invalid())?;
        let month = key[5..].parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MonthKey {
    type Error = InsightError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MonthKey> for String {
    fn from(value: MonthKey) -> Self {
        value.to_string()
    }
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

/// Calendar date of the `YYYY-MM-DD` prefix of `date`; any time part is ignored.
///
/// Transactions are grouped and pattern-weighted through this one rule, so a
/// date that cannot name its day is rejected everywhere.
pub fn parse_date_prefix(date: &str) -> Result<NaiveDate> {
    let invalid = || InsightError::InvalidDateFormat(date.to_string());
    let bytes = date.as_bytes();
    if bytes.len() < 10
        || bytes[4] != b'-'
        || bytes[7] != b'-'
        || !all_digits(&bytes[..4])
        || !all_digits(&bytes[5..7])
        || !all_digits(&bytes[8..10])
    {
        return Err(invalid());
    }
    let field = |range: std::ops::Range<usize>| {
        date[range].parse::<u32>().map_err(|_| invalid())
    };
    let year = i32::try_from(field(0..4)?).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, field(5..7)?, field(8..10)?).ok_or_else(invalid)
}

/// Number of days in the month containing `date` (leap-year aware).
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// All category usages of one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub month: MonthKey,
    pub is_current_month: bool,
    pub category_usages: Vec<CategoryUsage>,
    #[serde(default)]
    pub overall_transactions: Vec<Transaction>,
}

impl MonthSummary {
    /// Net milliunit total across every usage of the month.
    pub fn total_amount(&self) -> i64 {
        self.category_usages.iter().map(|usage| usage.amount).sum()
    }

    /// Sum of outflows only, as a negative milliunit amount.
    pub fn total_outflow(&self) -> i64 {
        self.overall_transactions
            .iter()
            .filter(|txn| txn.is_outflow())
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn usage_by_uuid(&self, uuid: &str) -> Option<&CategoryUsage> {
        self.category_usages
            .iter()
            .find(|usage| usage.uuid.as_deref() == Some(uuid))
    }
}

/// Scalar rollup of all (non-inflow) categories for a month.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotal {
    pub total_spent: i64,
    pub total_budgeted: i64,
    pub total_balance: i64,
}
