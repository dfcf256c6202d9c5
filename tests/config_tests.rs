mod common;

use budget_insights::amounts::{CurrencyCode, CurrencyDisplay, NegativeStyle};
use budget_insights::cli::render;
use budget_insights::config::Config;
use budget_insights::errors::InsightError;

use common::setup_config_manager;

#[test]
fn defaults_until_saved() {
    let manager = setup_config_manager();
    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.currency.as_str(), "EUR");
    assert_eq!(config.logging.filter, "budget_insights=info");
}

#[test]
fn saved_preferences_drive_rendering() {
    let manager = setup_config_manager();
    let mut config = Config::default();
    config.currency = CurrencyCode::new("usd");
    config.format.currency_display = CurrencyDisplay::Code;
    config.format.negative_style = NegativeStyle::Parentheses;
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(render::money(-1_234_500, &loaded), "(USD 1,234.50)");
    assert_eq!(render::money(2_000, &loaded), "USD 2.00");
}

#[test]
fn invalid_forecast_settings_are_not_saved() {
    let manager = setup_config_manager();
    let mut config = Config::default();
    config.forecast.alpha = 1.5;
    assert!(matches!(manager.save(&config), Err(InsightError::Config(_))));
    assert!(!manager.path().exists());
}

#[test]
fn stored_json_uses_readable_keys() {
    let manager = setup_config_manager();
    manager.save(&Config::default()).unwrap();
    let raw = std::fs::read_to_string(manager.path()).unwrap();
    assert!(raw.contains("\"historyWeight\""));
    assert!(raw.contains("\"warningAbove\""));
}
