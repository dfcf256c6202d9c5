mod common;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;

use common::{sample_categories_json, sample_transactions_json};

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        dir.child("transactions.json")
            .write_str(&sample_transactions_json())
            .unwrap();
        dir.child("categories.json")
            .write_str(&sample_categories_json())
            .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.child(name).path().display().to_string()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("budget_insights_cli").unwrap();
        cmd.env("BUDGET_INSIGHTS_HOME", self.dir.child("home").path())
            .env_remove("BUDGET_INSIGHTS_CLI_SCRIPT")
            .env("NO_COLOR", "1");
        cmd
    }
}

#[test]
fn months_command_lists_each_month() {
    let ws = Workspace::new();
    ws.command()
        .args(["months", &ws.path("transactions.json"), "--date", "2024-06-15"])
        .assert()
        .success()
        .stdout(contains("2024-05: 2 transactions, net -€40.00"))
        .stdout(contains("2024-06 (current): 3 transactions"))
        .stdout(contains("Uncategorized: -€5.00"));
}

#[test]
fn forecast_command_reports_the_month() {
    let ws = Workspace::new();
    ws.command()
        .args([
            "forecast",
            &ws.path("transactions.json"),
            &ws.path("categories.json"),
            "--date=2024-06-15",
        ])
        .assert()
        .success()
        .stdout(contains("Forecast for 2024-06"))
        .stdout(contains("Month: 50.00% elapsed, 15 days left"))
        .stdout(contains("Groceries: predicted €24.68 of €40.00"))
        .stdout(contains("Budget usage: 25.00% -> info"));
}

#[test]
fn payees_command_honours_the_limit() {
    let ws = Workspace::new();
    ws.command()
        .args(["payees", &ws.path("transactions.json"), "1"])
        .assert()
        .success()
        .stdout(contains("1. Walmart: -€40.00"))
        .stdout(contains("Aldi").not());
}

#[test]
fn status_command_classifies() {
    let ws = Workspace::new();
    ws.command()
        .args(["status", "86"])
        .assert()
        .success()
        .stdout(contains("86.00% -> error"));
}

#[test]
fn unknown_command_suggests_the_closest() {
    let ws = Workspace::new();
    ws.command()
        .arg("forcast")
        .assert()
        .failure()
        .stderr(contains("Suggestion: `forecast`?"))
        .stderr(contains("unknown command `forcast`"));
}

#[test]
fn missing_file_is_an_input_error() {
    let ws = Workspace::new();
    ws.command()
        .args(["months", &ws.path("nope.json")])
        .assert()
        .failure()
        .stderr(contains("Invalid input: cannot read"));
}

#[test]
fn malformed_dates_fail_the_command() {
    let ws = Workspace::new();
    ws.dir
        .child("bad.json")
        .write_str(r#"[{"id": "x", "amount": -1, "date": "06/03/2024"}]"#)
        .unwrap();
    ws.command()
        .args(["months", &ws.path("bad.json")])
        .assert()
        .failure()
        .stderr(contains("Invalid date format: `06/03/2024`"));
}

#[test]
fn script_mode_runs_each_line() {
    let ws = Workspace::new();
    let input = format!(
        "status 40\nbogus\nmonths \"{}\" --date 2024-06-15\nexit\nstatus 99\n",
        ws.path("transactions.json")
    );
    ws.command()
        .env("BUDGET_INSIGHTS_CLI_SCRIPT", "1")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("40.00% -> info"))
        .stdout(contains("2024-05: 2 transactions"))
        .stdout(contains("99.00%").not())
        .stderr(contains("unknown command `bogus`"));
}

#[test]
fn no_arguments_prints_help() {
    let ws = Workspace::new();
    ws.command()
        .assert()
        .success()
        .stdout(contains("=== Commands ==="))
        .stdout(contains("forecast"));
}

#[test]
fn stored_config_changes_the_currency() {
    let ws = Workspace::new();
    ws.dir
        .child("home/config.json")
        .write_str(r#"{ "currency": "USD" }"#)
        .unwrap();
    ws.command()
        .args(["payees", &ws.path("transactions.json")])
        .assert()
        .success()
        .stdout(contains("1. Walmart: -$40.00"));
}

#[test]
fn version_command_prints_build_summary() {
    let ws = Workspace::new();
    ws.command()
        .arg("version")
        .assert()
        .success()
        .stdout(contains(format!("budget_insights {}", env!("CARGO_PKG_VERSION"))));
}
