use std::{collections::HashMap, fs, path::Path};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::{
    amounts::total_percentage_spent,
    core::services::{
        CategoryService, ForecastService, OverviewService, PatternService, PayeeService,
        SummaryService,
    },
    domain::{Category, Transaction},
    errors::CliError,
    utils::build_info,
};

use super::{output, render, shell::ShellContext};

const DEFAULT_BUDGET_ID: &str = "local";
const DEFAULT_PAYEE_LIMIT: usize = 10;
const DATE_FLAG: &str = "--date";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<LoopControl, CliError>;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "months",
            "Summarize transactions by month",
            "months <transactions.json> [--date YYYY-MM-DD]",
            cmd_months,
        ),
        CommandDefinition::new(
            "categories",
            "Aggregate transactions into categories",
            "categories <transactions.json> [budget-id]",
            cmd_categories,
        ),
        CommandDefinition::new(
            "forecast",
            "Forecast spending until the end of the month",
            "forecast <transactions.json> <categories.json> [--date YYYY-MM-DD]",
            cmd_forecast,
        ),
        CommandDefinition::new(
            "payees",
            "List the payees with the largest outflow",
            "payees <transactions.json> [limit]",
            cmd_payees,
        ),
        CommandDefinition::new(
            "status",
            "Classify a spent percentage",
            "status <percentage>",
            cmd_status,
        ),
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new("exit", "Stop reading script input", "exit", cmd_exit),
    ]
}

fn cmd_months(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, date) = split_date_option(args)?;
    let [path] = positional.as_slice() else {
        return Err(usage_error(context, "months"));
    };
    let today = date.unwrap_or_else(|| context.today());
    let transactions: Vec<Transaction> = load_records(path)?;
    let mut summaries = SummaryService::summarize(transactions, today)?;
    SummaryService::sort_chronologically(&mut summaries);
    tracing::info!(command = "months", months = summaries.len(), "rendering month summaries");
    output::info(render::months(&summaries, &context.config));
    Ok(LoopControl::Continue)
}

fn cmd_categories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (path, budget_id) = match args {
        [path] => (*path, DEFAULT_BUDGET_ID),
        [path, budget_id] => (*path, *budget_id),
        _ => return Err(usage_error(context, "categories")),
    };
    let transactions: Vec<Transaction> = load_records(path)?;
    let categories = CategoryService::categories_from_transactions(budget_id, transactions);
    let total = CategoryService::calculate_totals(&categories);
    tracing::info!(command = "categories", categories = categories.len(), "rendering categories");
    output::info(render::categories(&categories, &total, &context.config));
    Ok(LoopControl::Continue)
}

fn cmd_forecast(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, date) = split_date_option(args)?;
    let [transactions_path, categories_path] = positional.as_slice() else {
        return Err(usage_error(context, "forecast"));
    };
    let today = date.unwrap_or_else(|| context.today());
    let transactions: Vec<Transaction> = load_records(transactions_path)?;
    let categories: Vec<Category> = load_records(categories_path)?;
    let settings = context.config.forecast;

    let overview = OverviewService::build(transactions, &categories, today, &settings)?;
    let history = PatternService::category_data(&overview.categories, &overview.month_summaries)?;
    let per_category = ForecastService::forecast_categories(
        &overview.categories,
        &history,
        today,
        &settings,
    );

    tracing::info!(
        command = "forecast",
        date = %today,
        categories = per_category.len(),
        "rendering forecast"
    );
    output::section(format!("Forecast for {}", today.format("%Y-%m")));
    output::info(render::forecast(&overview, &per_category, &context.config));
    let percentage = total_percentage_spent(&overview.month_total);
    let class = context.config.thresholds.classify(percentage);
    output::status(class, format!("Budget usage: {}", render::status(percentage, class)));
    Ok(LoopControl::Continue)
}

fn cmd_payees(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (path, limit) = match args {
        [path] => (*path, DEFAULT_PAYEE_LIMIT),
        [path, limit] => {
            let limit = limit
                .parse::<usize>()
                .map_err(|_| CliError::Input(format!("`{limit}` is not a valid limit")))?;
            (*path, limit)
        }
        _ => return Err(usage_error(context, "payees")),
    };
    let transactions: Vec<Transaction> = load_records(path)?;
    let payees = PayeeService::top_payees(&transactions, limit);
    output::info(render::payees(&payees, &context.config));
    Ok(LoopControl::Continue)
}

fn cmd_status(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(usage_error(context, "status"));
    };
    let percentage = raw
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CliError::Input(format!("`{raw}` is not a percentage")))?;
    let class = context.config.thresholds.classify(percentage);
    output::status(class, render::status(percentage, class));
    Ok(LoopControl::Continue)
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(meta.summary());
    output::info(format!("  Build hash   : {} ({})", meta.git_hash, meta.git_status));
    output::info(format!("  Built at     : {}", meta.timestamp));
    output::info(format!("  Profile      : {}", meta.profile));
    output::info(format!("  Rustc        : {}", meta.rustc));
    Ok(LoopControl::Continue)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let lowered = name.to_lowercase();
        match context.registry.get(&lowered) {
            Some(command) => {
                output::info(format!("{} - {}", command.name, command.description));
                output::info(format!("Usage: {}", command.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(LoopControl::Continue);
    }

    output::section("Commands");
    for command in context.registry.iter() {
        output::info(format!("  {:<11}{}", command.name, command.description));
    }
    Ok(LoopControl::Continue)
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Ok(LoopControl::Exit)
}

fn usage_error(context: &ShellContext, name: &str) -> CliError {
    let usage = context
        .registry
        .get(name)
        .map(|command| command.usage)
        .unwrap_or(name);
    CliError::Input(format!("usage: {usage}"))
}

/// Pulls `--date YYYY-MM-DD` (or `--date=YYYY-MM-DD`) out of `args`.
fn split_date_option<'a>(args: &[&'a str]) -> Result<(Vec<&'a str>, Option<NaiveDate>), CliError> {
    let mut positional = Vec::new();
    let mut date = None;
    let mut iter = args.iter().copied();
    while let Some(arg) = iter.next() {
        let value = if arg == DATE_FLAG {
            iter.next()
                .ok_or_else(|| CliError::Input(format!("{DATE_FLAG} needs a YYYY-MM-DD value")))?
        } else if let Some(value) = arg.strip_prefix("--date=") {
            value
        } else {
            positional.push(arg);
            continue;
        };
        let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|_| CliError::Input(format!("`{value}` is not a YYYY-MM-DD date")))?;
        date = Some(parsed);
    }
    Ok((positional, date))
}

fn load_records<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, CliError> {
    let data = fs::read_to_string(Path::new(path))
        .map_err(|err| CliError::Input(format!("cannot read `{path}`: {err}")))?;
    serde_json::from_str(&data)
        .map_err(|err| CliError::Input(format!("`{path}` is not a valid record list: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_option_is_extracted_in_both_forms() {
        let (positional, date) =
            split_date_option(&["a.json", "--date", "2024-02-29", "b.json"]).unwrap();
        assert_eq!(positional, ["a.json", "b.json"]);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29));

        let (positional, date) = split_date_option(&["--date=2024-06-15", "a.json"]).unwrap();
        assert_eq!(positional, ["a.json"]);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 15));
    }

    #[test]
    fn bad_date_option_is_rejected() {
        assert!(matches!(split_date_option(&["--date"]), Err(CliError::Input(_))));
        assert!(matches!(
            split_date_option(&["--date", "15/06/2024"]),
            Err(CliError::Input(_))
        ));
    }

    #[test]
    fn registry_keeps_definition_order() {
        let registry = CommandRegistry::new(all_definitions());
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.first(), Some(&"months"));
        assert_eq!(names.last(), Some(&"exit"));
        assert!(registry.get("forecast").is_some());
    }
}
