//! Budget categories and the usage accumulators built from transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{Displayable, NamedEntity, UNCATEGORIZED_LABEL},
    transaction::Transaction,
};

const INFLOW_PREFIX: &str = "Inflow";

/// A budget envelope. Money fields are milliunits and follow the YNAB
/// convention `balance = budgeted + activity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub uuid: String,
    pub balance: i64,
    pub budgeted: i64,
    pub activity: i64,
    #[serde(default)]
    pub target_amount: i64,
    #[serde(default)]
    pub budget_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<CategoryGoal>,
    /// Weight from 0 (spend early in the month) to 1 (spend late in the month).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_spending_pattern: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_average: Option<i64>,
}

impl Category {
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        budget_id: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            uuid: uuid.into(),
            balance: 0,
            budgeted: 0,
            activity: 0,
            target_amount: 0,
            budget_id: budget_id.into(),
            goal: None,
            typical_spending_pattern: None,
            historical_average: None,
        }
    }

    /// Sets budgeted and activity, deriving the balance from both.
    pub fn with_amounts(mut self, budgeted: i64, activity: i64) -> Self {
        self.budgeted = budgeted;
        self.activity = activity;
        self.balance = budgeted + activity;
        self
    }

    pub fn with_target(mut self, target_amount: i64) -> Self {
        self.target_amount = target_amount;
        self
    }

    pub fn with_history(mut self, typical_spending_pattern: f64, historical_average: i64) -> Self {
        self.typical_spending_pattern = Some(typical_spending_pattern);
        self.historical_average = Some(historical_average);
        self
    }

    /// YNAB's "Inflow: Ready to Assign" style categories.
    pub fn is_inflow(&self) -> bool {
        self.name.starts_with(INFLOW_PREFIX)
    }

    /// Activity as a positive spent amount; inflows count as nothing spent.
    ///
    /// Saturates at `i64::MAX` for an `i64::MIN` activity.
    pub fn spent(&self) -> i64 {
        self.activity.min(0).saturating_neg()
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        match &self.goal {
            Some(goal) => format!("{} ({})", self.name, goal),
            None => self.name.clone(),
        }
    }
}

/// YNAB target metadata attached to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGoal {
    pub goal_type: GoalType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_complete: Option<u8>,
}

impl fmt::Display for CategoryGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.goal_type)?;
        if let Some(percentage) = self.percentage_complete {
            write!(f, ", {percentage}% funded")?;
        }
        Ok(())
    }
}

/// YNAB goal types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalType {
    #[serde(rename = "TB")]
    TargetBalance,
    #[serde(rename = "TBD")]
    TargetBalanceByDate,
    #[serde(rename = "MF")]
    MonthlyFunding,
    #[serde(rename = "NEED")]
    PlanYourSpending,
    #[serde(rename = "DEBT")]
    Debt,
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalType::TargetBalance => "Target balance",
            GoalType::TargetBalanceByDate => "Target balance by date",
            GoalType::MonthlyFunding => "Monthly funding",
            GoalType::PlanYourSpending => "Plan your spending",
            GoalType::Debt => "Debt payoff",
        };
        f.write_str(label)
    }
}

/// Running total of the transactions that share one category.
///
/// `amount` always equals the sum of `transactions[].amount`; the only way to
/// grow a usage is [`CategoryUsage::absorb`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    /// `None` is the uncategorized bucket.
    pub name: Option<String>,
    pub uuid: Option<String>,
    pub amount: i64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl CategoryUsage {
    /// Starts a usage from its first transaction.
    pub fn seeded(transaction: Transaction) -> Self {
        Self {
            name: transaction.category_name.clone(),
            uuid: transaction.category_id.clone(),
            amount: transaction.amount,
            transactions: vec![transaction],
        }
    }

    pub fn absorb(&mut self, transaction: Transaction) {
        self.amount += transaction.amount;
        self.transactions.push(transaction);
    }

    pub fn is_uncategorized(&self) -> bool {
        self.name.is_none()
    }

    pub fn transactions_total(&self) -> i64 {
        self.transactions.iter().map(|txn| txn.amount).sum()
    }
}

impl NamedEntity for CategoryUsage {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNCATEGORIZED_LABEL)
    }
}
