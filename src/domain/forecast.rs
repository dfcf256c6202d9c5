//! Inputs and outputs of the end-of-month forecasts.

use serde::{Deserialize, Serialize};

/// Forecast-ready view of a category, in milliunits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryData {
    pub id: String,
    pub name: String,
    pub budgeted: i64,
    /// Absolute outflow so far this month.
    pub spent: i64,
    pub balance: i64,
    /// Weight from 0 (spend early in the month) to 1 (spend late in the month).
    pub typical_spending_pattern: f64,
    pub historical_average: i64,
}

/// Per-category forecast input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryForecastInput {
    pub budgeted: i64,
    /// Signed net activity of the month; negative is spending.
    pub activity: i64,
    pub available: i64,
    pub typical_spending_pattern: Option<f64>,
    pub historical_average: Option<i64>,
}

/// Predicted end-of-month outcome. Money fields are rounded milliunits.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    pub total_spent_so_far: i64,
    pub predicted_spending_end_of_month: i64,
    pub predicted_remaining_per_day: i64,
    pub actual_remaining_per_day: i64,
    /// Budgeted minus predicted spending; negative when heading over budget.
    pub predicted_remaining_amount: i64,
    pub remaining_days: u32,
    pub available: i64,
    /// Suggested top-up, never negative.
    pub extra_amount_needed: i64,
}

/// Spending pattern learned from a category's transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingPattern {
    pub category_id: String,
    pub historical_average: i64,
    pub typical_spending_pattern: f64,
}

/// Tunables for both forecast models.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ForecastSettings {
    /// Smoothing factor between the current-month trend (1.0) and history (0.0).
    pub alpha: f64,
    /// Scales how far a late-month spending pattern pulls the per-category
    /// prediction toward the historical average.
    pub history_weight: f64,
    /// A category whose spend reached this share of its historical average is
    /// considered closed for the month.
    pub closed_ratio: f64,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            history_weight: 1.0,
            closed_ratio: 0.9,
        }
    }
}
