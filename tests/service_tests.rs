mod common;

use budget_insights::core::services::{
    CategoryService, HistoryService, OverviewService, PatternService, PayeeService,
    SummaryService, UsageService,
};
use budget_insights::core::status::{classify, StatusClass};
use budget_insights::domain::{ForecastSettings, MonthlyForecast, Transaction};
use budget_insights::errors::InsightError;
use budget_insights::core::services::ServiceError;

use common::{mid_june, sample_categories, sample_transactions};

#[test]
fn overview_forecasts_the_running_month() {
    let overview = OverviewService::build(
        sample_transactions(),
        &sample_categories(),
        mid_june(),
        &ForecastSettings::default(),
    )
    .unwrap();

    assert_eq!(overview.month_percentage, 50.0);
    assert_eq!(overview.month_total.total_spent, -10_000);
    assert_eq!(overview.month_total.total_budgeted, 40_000);
    assert_eq!(overview.month_total.total_balance, 30_000);
    assert_eq!(
        overview.forecast,
        MonthlyForecast {
            total_spent_so_far: 10_000,
            predicted_spending_end_of_month: 10_000,
            predicted_remaining_per_day: 2_000,
            actual_remaining_per_day: 2_000,
            predicted_remaining_amount: 30_000,
            remaining_days: 15,
            available: 30_000,
            extra_amount_needed: 0,
        }
    );
    let names: Vec<&str> = overview.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Groceries", "Inflow: Ready to Assign"]);
}

#[test]
fn history_comes_from_completed_months_only() {
    let summaries = SummaryService::summarize(sample_transactions(), mid_june()).unwrap();
    let data = PatternService::category_data(&sample_categories(), &summaries).unwrap();

    assert_eq!(data.len(), 1);
    let groceries = &data[0];
    assert_eq!(groceries.id, "g");
    assert_eq!(groceries.historical_average, 40_000);
    assert_eq!(groceries.spent, 10_000);
    // (30 × 3/31 + 10 × 20/31) / 40
    assert!((groceries.typical_spending_pattern - 290.0 / 1240.0).abs() < 1e-12);
}

#[test]
fn usages_and_months_agree_on_totals() {
    let transactions = sample_transactions();
    let expected: i64 = transactions.iter().map(|t| t.amount).sum();

    let usages = UsageService::aggregate(transactions.clone());
    assert_eq!(usages.iter().map(|u| u.amount).sum::<i64>(), expected);
    assert_eq!(usages.len(), 3);
    assert!(usages[2].is_uncategorized());

    let summaries = SummaryService::summarize(transactions, mid_june()).unwrap();
    assert_eq!(summaries.iter().map(|s| s.total_amount()).sum::<i64>(), expected);
}

#[test]
fn categories_from_transactions_feed_totals() {
    let categories = CategoryService::categories_from_transactions("b", sample_transactions());
    let total = CategoryService::calculate_totals(&categories);
    assert_eq!(total.total_spent, -55_000);
    assert_eq!(total.total_budgeted, 0);
    assert_eq!(
        classify(budget_insights::amounts::total_percentage_spent(&total)),
        StatusClass::Error
    );
}

#[test]
fn history_records_are_keyed_by_category_and_month() {
    let histories = HistoryService::build("b", &sample_transactions()).unwrap();
    let rows: Vec<(String, String, i64)> = histories
        .iter()
        .map(|h| (h.category_id.clone(), h.month.to_string(), h.activity))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("g".to_string(), "2024-05".to_string(), -40_000),
            ("g".to_string(), "2024-06".to_string(), -10_000),
            ("i".to_string(), "2024-06".to_string(), 250_000),
            ("".to_string(), "2024-06".to_string(), -5_000),
        ]
    );
    assert_eq!(HistoryService::for_year(&histories, 2023).len(), 0);
}

#[test]
fn top_payees_rank_by_outflow() {
    let payees = PayeeService::top_payees(&sample_transactions(), 2);
    let ranked: Vec<(&str, i64)> = payees
        .iter()
        .map(|p| (p.payee_name.as_str(), p.activity))
        .collect();
    assert_eq!(ranked, [("Walmart", -40_000), ("Aldi", -10_000)]);
}

#[test]
fn sync_payload_deserializes_and_ignores_unknown_fields() {
    let payload = r#"[
        {
            "id": "abc",
            "accountName": "Checking",
            "amount": -12340,
            "date": "2024-06-03T10:00:00.000Z",
            "categoryId": "g",
            "categoryName": "Groceries",
            "payeeName": "LIDL 1234",
            "cleanPayeeName": "Lidl",
            "memo": null,
            "cleared": "cleared",
            "approved": true
        }
    ]"#;
    let transactions: Vec<Transaction> = serde_json::from_str(payload).unwrap();
    assert_eq!(transactions[0].payee(), "Lidl");
    let summaries = SummaryService::summarize(transactions, mid_june()).unwrap();
    assert!(summaries[0].is_current_month);
    assert_eq!(summaries[0].total_outflow(), -12_340);
}

#[test]
fn malformed_dates_surface_from_the_overview() {
    let mut transactions = sample_transactions();
    transactions.push(Transaction::new("bad", "2024/06/07", -1));
    let result = OverviewService::build(
        transactions,
        &sample_categories(),
        mid_june(),
        &ForecastSettings::default(),
    );
    assert_eq!(
        result.map(|_| ()),
        Err(ServiceError::Core(InsightError::InvalidDateFormat("2024/06/07".into())))
    );
}

#[test]
fn month_only_dates_are_rejected_by_every_service() {
    let dated = |date: &str| {
        let mut transactions = sample_transactions();
        transactions.push(Transaction::new("bare", date, -7_000).with_category("g", "Groceries"));
        transactions
    };
    let expected = || ServiceError::Core(InsightError::InvalidDateFormat("2024-05".into()));

    assert_eq!(
        SummaryService::summarize(dated("2024-05"), mid_june()).map(|_| ()),
        Err(expected())
    );
    assert_eq!(
        OverviewService::build(
            dated("2024-05"),
            &sample_categories(),
            mid_june(),
            &ForecastSettings::default(),
        )
        .map(|_| ()),
        Err(expected())
    );

    let overview = OverviewService::build(
        dated("2024-05-31"),
        &sample_categories(),
        mid_june(),
        &ForecastSettings::default(),
    )
    .unwrap();
    assert_eq!(overview.month_summaries.len(), 2);
}
