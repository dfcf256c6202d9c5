//! Plain-text reports printed by the CLI. Rendering is pure so reports can be
//! snapshot tested; colouring happens in [`super::output`].

use crate::amounts::{
    format_currency_value, format_percentage, percentage_spent, total_percentage_spent,
};
use crate::config::Config;
use crate::core::status::StatusClass;
use crate::domain::{
    BudgetOverview, Category, Displayable, MonthSummary, MonthTotal, MonthlyForecast,
    NamedEntity, PayeeActivity, UNCATEGORIZED_LABEL,
};

pub fn money(amount: i64, config: &Config) -> String {
    format_currency_value(amount, &config.currency, &config.locale, &config.format)
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// One block per month with its category usages underneath.
pub fn months(summaries: &[MonthSummary], config: &Config) -> String {
    if summaries.is_empty() {
        return "No transactions.".into();
    }
    let mut lines = Vec::new();
    for summary in summaries {
        let marker = if summary.is_current_month { " (current)" } else { "" };
        lines.push(format!(
            "{}{}: {}, net {}",
            summary.month,
            marker,
            count(summary.overall_transactions.len(), "transaction"),
            money(summary.total_amount(), config)
        ));
        for usage in &summary.category_usages {
            lines.push(format!(
                "  {}: {} ({})",
                usage.name(),
                money(usage.amount, config),
                count(usage.transactions.len(), "transaction")
            ));
        }
    }
    lines.join("\n")
}

pub fn categories(categories: &[Category], total: &MonthTotal, config: &Config) -> String {
    let thresholds = &config.thresholds;
    let mut lines: Vec<String> = categories
        .iter()
        .map(|category| {
            let percentage = percentage_spent(category);
            let name = if category.name.is_empty() {
                UNCATEGORIZED_LABEL.to_string()
            } else {
                category.display_label()
            };
            format!(
                "{}: activity {}, budgeted {}, balance {}, {} used [{}]",
                name,
                money(category.activity, config),
                money(category.budgeted, config),
                money(category.balance, config),
                format_percentage(percentage),
                thresholds.classify(percentage)
            )
        })
        .collect();
    let percentage = total_percentage_spent(total);
    lines.push(format!(
        "Total: spent {}, budgeted {}, balance {}, {} used [{}]",
        money(total.total_spent, config),
        money(total.total_budgeted, config),
        money(total.total_balance, config),
        format_percentage(percentage),
        thresholds.classify(percentage)
    ));
    lines.join("\n")
}

pub fn forecast(
    overview: &BudgetOverview,
    per_category: &[(&Category, MonthlyForecast)],
    config: &Config,
) -> String {
    let forecast = &overview.forecast;
    let mut lines = vec![
        format!(
            "Month: {} elapsed, {} left",
            format_percentage(overview.month_percentage),
            count(forecast.remaining_days as usize, "day")
        ),
        format!("Spent so far: {}", money(forecast.total_spent_so_far, config)),
        format!(
            "Predicted spending: {}",
            money(forecast.predicted_spending_end_of_month, config)
        ),
        format!(
            "Predicted remaining: {}",
            money(forecast.predicted_remaining_amount, config)
        ),
        format!(
            "Per day: {} predicted, {} available",
            money(forecast.predicted_remaining_per_day, config),
            money(forecast.actual_remaining_per_day, config)
        ),
        format!("Available: {}", money(forecast.available, config)),
        format!("Extra needed: {}", money(forecast.extra_amount_needed, config)),
    ];
    if !per_category.is_empty() {
        lines.push("Categories:".into());
        for (category, forecast) in per_category {
            lines.push(format!(
                "  {}: predicted {} of {}, extra {}",
                category.name,
                money(forecast.predicted_spending_end_of_month, config),
                money(category.budgeted, config),
                money(forecast.extra_amount_needed, config)
            ));
        }
    }
    lines.join("\n")
}

pub fn payees(payees: &[PayeeActivity], config: &Config) -> String {
    if payees.is_empty() {
        return "No outflows.".into();
    }
    payees
        .iter()
        .enumerate()
        .map(|(rank, payee)| {
            format!("{}. {}: {}", rank + 1, payee.payee_name, money(payee.activity, config))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status(percentage: f64, class: StatusClass) -> String {
    format!("{} -> {}", format_percentage(percentage), class)
}
