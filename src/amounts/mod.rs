//! Milliunit conversions, percentage math, and money formatting.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{days_in_month, Category, MonthTotal};

/// YNAB stores money as integer thousandths of the currency unit.
pub const MILLIUNITS_PER_UNIT: i64 = 1000;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Separators used when rendering numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

/// Converts milliunits to display units.
pub fn milliunits_to_units(amount: i64) -> f64 {
    amount as f64 / MILLIUNITS_PER_UNIT as f64
}

pub fn absolute_units(amount: i64) -> f64 {
    milliunits_to_units(amount).abs()
}

/// Renders display units with two decimals and a trailing euro sign.
pub fn format_basic_amount(amount: f64, absolute: bool) -> String {
    let value = if absolute { amount.abs() } else { amount };
    format!("{value:.2}€")
}

/// Renders a milliunit amount, see [`format_basic_amount`].
pub fn format_amount(amount: i64, absolute: bool) -> String {
    format_basic_amount(milliunits_to_units(amount), absolute)
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

/// `amount / total × 100`, or 100 when there is nothing to divide by.
pub fn calculate_percentage(amount: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() || !amount.is_finite() {
        return 100.0;
    }
    amount / total * 100.0
}

/// Share of the category budget already spent. Unbudgeted categories report 100.
pub fn percentage_spent(category: &Category) -> f64 {
    spent_against(category.activity, category.budgeted)
}

/// Share of the month's total budget already spent. A zero budget reports 100.
pub fn total_percentage_spent(total: &MonthTotal) -> f64 {
    spent_against(total.total_spent, total.total_budgeted)
}

fn spent_against(activity: i64, budgeted: i64) -> f64 {
    let spent = absolute_units(activity);
    let budget = absolute_units(budgeted);
    if budget == 0.0 {
        return 100.0;
    }
    calculate_percentage(spent, budget)
}

/// Share of the month elapsed on `today`, counting today as elapsed.
pub fn month_percentage(today: NaiveDate) -> f64 {
    calculate_percentage(today.day() as f64, days_in_month(today) as f64)
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, fraction) = match body.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (body.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    let mut rendered = format!("{sign}{}", group_digits(digits, locale.grouping_separator));
    if let Some(fraction) = fraction {
        rendered.push(locale.decimal_separator);
        rendered.push_str(fraction);
    }
    rendered
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Locale-aware rendering of a milliunit amount in the given currency.
pub fn format_currency_value(
    amount: i64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = minor_units_for(code.as_str());
    let units = milliunits_to_units(amount);
    let number = format_number(locale, units.abs(), precision);
    // Sign follows the rounded figure so `-1` milliunit never shows as `-€0.00`.
    let rounds_to_zero = !number.bytes().any(|digit| (b'1'..=b'9').contains(&digit));
    let body = match options.currency_display {
        CurrencyDisplay::Symbol => format!("{}{}", symbol_for(code.as_str()), number),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), number),
    };
    if amount >= 0 || rounds_to_zero {
        return body;
    }
    match options.negative_style {
        NegativeStyle::Sign => format!("-{body}"),
        NegativeStyle::Parentheses => format!("({body})"),
    }
}
