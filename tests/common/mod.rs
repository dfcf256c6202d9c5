#![allow(dead_code)]

use std::sync::Mutex;

use budget_insights::config::ConfigManager;
use budget_insights::domain::{Category, Transaction};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager backed by a unique directory.
pub fn setup_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

pub fn mid_june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Two months of activity: groceries in May and June, a paycheck and an
/// uncategorized purchase in June.
pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction::new("t1", "2024-05-03", -30_000)
            .with_category("g", "Groceries")
            .with_payee("Walmart"),
        Transaction::new("t2", "2024-05-20", -10_000)
            .with_category("g", "Groceries")
            .with_payee("Aldi"),
        Transaction::new("t3", "2024-06-02", -10_000)
            .with_category("g", "Groceries")
            .with_payee("Walmart"),
        Transaction::new("t4", "2024-06-01", 250_000)
            .with_category("i", "Inflow: Ready to Assign")
            .with_payee("Employer"),
        Transaction::new("t5", "2024-06-05", -5_000).with_payee("Kiosk"),
    ]
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category::new("g", "Groceries", "b").with_amounts(40_000, -10_000),
        Category::new("i", "Inflow: Ready to Assign", "b").with_amounts(0, 250_000),
    ]
}

pub fn sample_transactions_json() -> String {
    serde_json::to_string_pretty(&sample_transactions()).expect("serialize transactions")
}

pub fn sample_categories_json() -> String {
    serde_json::to_string_pretty(&sample_categories()).expect("serialize categories")
}
