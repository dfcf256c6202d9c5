//! End-of-month forecasts for a single category and for a whole month.
//!
//! Both models take `today` explicitly and never read the system clock.

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    days_in_month, Category, CategoryData, CategoryForecastInput, ForecastSettings,
    MonthlyForecast,
};

pub struct ForecastService;

impl ForecastService {
    /// Projects one category to the end of the month.
    ///
    /// The prediction blends a linear extrapolation of the spend so far with
    /// the historical average. The historical share is the spending-pattern
    /// weight scaled by `settings.history_weight`, so late spenders lean on
    /// history and early spenders on the current month. The result always lies
    /// between the two projections.
    pub fn forecast_category(
        input: &CategoryForecastInput,
        today: NaiveDate,
        settings: &ForecastSettings,
    ) -> MonthlyForecast {
        let calendar = MonthCalendar::for_day(today);
        let spent = input.activity.min(0).unsigned_abs() as f64;
        let linear = spent * calendar.days_in_month as f64 / calendar.elapsed as f64;

        let predicted = match input.historical_average.filter(|average| *average > 0) {
            Some(average) => {
                let historical = (average as f64).max(spent);
                let weight = unit_weight(input.typical_spending_pattern.unwrap_or(0.0))
                    * unit_weight(settings.history_weight);
                linear * (1.0 - weight) + historical * weight
            }
            None => linear,
        };

        settle(
            &calendar,
            input.budgeted as f64,
            spent,
            input.available as f64,
            predicted,
        )
    }

    /// Forecasts every budgeted, non-inflow category. A category without its
    /// own history borrows the one derived for its uuid in `history`.
    pub fn forecast_categories<'a>(
        categories: &'a [Category],
        history: &[CategoryData],
        today: NaiveDate,
        settings: &ForecastSettings,
    ) -> Vec<(&'a Category, MonthlyForecast)> {
        categories
            .iter()
            .filter(|category| !category.is_inflow() && category.budgeted > 0)
            .map(|category| {
                let mut input = CategoryForecastInput::from(category);
                if let Some(data) = history.iter().find(|data| data.id == category.uuid) {
                    input.typical_spending_pattern = input
                        .typical_spending_pattern
                        .or(Some(data.typical_spending_pattern));
                    input.historical_average =
                        input.historical_average.or(Some(data.historical_average));
                }
                (category, Self::forecast_category(&input, today, settings))
            })
            .collect()
    }

    /// Forecasts the whole month with exponential smoothing.
    ///
    /// Categories that already spent `settings.closed_ratio` of their
    /// historical average are treated as closed: their spend is final and they
    /// do not contribute to the trend. For the others, the current daily trend
    /// and the historical daily trend are weighted by each category's spending
    /// pattern and blended with `settings.alpha`.
    pub fn forecast_month(
        categories: &[CategoryData],
        today: NaiveDate,
        settings: &ForecastSettings,
    ) -> MonthlyForecast {
        let calendar = MonthCalendar::for_day(today);
        let days = calendar.days_in_month as f64;
        let elapsed = calendar.elapsed as f64;
        let alpha = unit_weight(settings.alpha);

        let is_open = |category: &&CategoryData| {
            (category.spent as f64) < settings.closed_ratio * category.historical_average as f64
        };

        let total_spent: f64 = categories.iter().map(|c| c.spent as f64).sum();
        let total_available: f64 = categories.iter().map(|c| c.balance as f64).sum();
        let total_budgeted: f64 = categories.iter().map(|c| c.budgeted as f64).sum();

        let (open_spent, historical_trend, current_trend) = categories.iter().filter(is_open).fold(
            (0.0, 0.0, 0.0),
            |(spent, historical, current), category| {
                let pattern = unit_weight(category.typical_spending_pattern);
                (
                    spent + category.spent as f64,
                    historical + category.historical_average as f64 / days * pattern,
                    current + category.spent as f64 / elapsed * pattern,
                )
            },
        );

        let daily = alpha * current_trend + (1.0 - alpha) * historical_trend;
        let predicted = (total_spent - open_spent + daily * days).max(total_spent);

        tracing::debug!(
            categories = categories.len(),
            predicted,
            remaining_days = calendar.remaining,
            "forecasted month"
        );

        settle(&calendar, total_budgeted, total_spent, total_available, predicted)
    }
}

impl From<&Category> for CategoryForecastInput {
    fn from(category: &Category) -> Self {
        Self {
            budgeted: category.budgeted,
            activity: category.activity,
            available: category.balance,
            typical_spending_pattern: category.typical_spending_pattern,
            historical_average: category.historical_average,
        }
    }
}

struct MonthCalendar {
    days_in_month: u32,
    /// Days elapsed including today; at least 1.
    elapsed: u32,
    remaining: u32,
}

impl MonthCalendar {
    fn for_day(today: NaiveDate) -> Self {
        let days_in_month = days_in_month(today);
        let elapsed = today.day().clamp(1, days_in_month);
        Self {
            days_in_month,
            elapsed,
            remaining: days_in_month - elapsed,
        }
    }
}

fn settle(
    calendar: &MonthCalendar,
    budgeted: f64,
    spent: f64,
    available: f64,
    predicted: f64,
) -> MonthlyForecast {
    MonthlyForecast {
        total_spent_so_far: to_milliunits(spent),
        predicted_spending_end_of_month: to_milliunits(predicted),
        predicted_remaining_per_day: to_milliunits(per_day(budgeted - spent, calendar.remaining)),
        actual_remaining_per_day: to_milliunits(per_day(available, calendar.remaining)),
        predicted_remaining_amount: to_milliunits(budgeted - predicted),
        remaining_days: calendar.remaining,
        available: to_milliunits(available),
        extra_amount_needed: to_milliunits((predicted - budgeted).max(0.0)),
    }
}

/// Spreads `amount` over the remaining days. On the last day the whole
/// amount is due at once and a deficit reads as zero.
fn per_day(amount: f64, remaining_days: u32) -> f64 {
    if remaining_days == 0 {
        amount.max(0.0)
    } else {
        amount / remaining_days as f64
    }
}

fn unit_weight(weight: f64) -> f64 {
    if weight.is_finite() {
        weight.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn to_milliunits(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
