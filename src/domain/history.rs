//! Rollups persisted or displayed next to the month summaries.

use serde::{Deserialize, Serialize};

use crate::domain::month::MonthKey;

/// Net activity of one category during one month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryHistory {
    pub category_id: String,
    pub month: MonthKey,
    pub budget_id: String,
    pub activity: i64,
}

/// Total outflow attributed to one payee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PayeeActivity {
    pub payee_name: String,
    pub activity: i64,
}
