use std::{
    env,
    io::{self, BufRead},
};

use chrono::NaiveDate;
use shell_words::split;
use strsim::levenshtein;

use crate::{
    config::Config,
    core::clock::{Clock, SystemClock},
    errors::CliError,
};

use super::{
    commands::{all_definitions, CommandRegistry, LoopControl},
    output,
};

/// Reading commands from stdin instead of the process arguments.
pub const SCRIPT_ENV: &str = "BUDGET_INSIGHTS_CLI_SCRIPT";

const MAX_SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// One command taken from the process arguments.
    Command,
    /// One command per stdin line; failures are reported and skipped.
    Script,
}

pub struct ShellContext {
    pub config: Config,
    pub(crate) registry: CommandRegistry,
    clock: Box<dyn Clock>,
}

impl ShellContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            registry: CommandRegistry::new(all_definitions()),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Runs one tokenized command line.
    pub fn dispatch(&mut self, tokens: &[String]) -> Result<LoopControl, CliError> {
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        let Some(handler) = self.registry.get(&command).map(|definition| definition.handler) else {
            self.suggest_command(raw);
            return Err(CliError::Command(format!("unknown command `{raw}`")));
        };
        tracing::debug!(command = %command, args = args.len(), "dispatching command");
        handler(self, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let lowered = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &lowered), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= MAX_SUGGESTION_DISTANCE {
                output::warning(format!("Suggestion: `{}`?", best));
            }
        }
    }
}

/// Entry point of the `budget_insights_cli` binary.
pub fn run_cli(config: Config) -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mode = if args.is_empty() && env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Command
    };

    let mut context = ShellContext::new(config);
    match mode {
        CliMode::Command => run_command(&mut context, &args),
        CliMode::Script => run_script(&mut context, io::stdin().lock()),
    }
}

fn run_command(context: &mut ShellContext, args: &[String]) -> Result<(), CliError> {
    if args.is_empty() {
        context.dispatch(&["help".to_string()])?;
        return Ok(());
    }
    context.dispatch(args).map(|_| ())
}

/// Executes every line of `reader` until EOF or `exit`.
pub fn run_script<R: BufRead>(context: &mut ShellContext, reader: R) -> Result<(), CliError> {
    for line in reader.lines() {
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    let tokens = match split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(err);
            return Ok(LoopControl::Continue);
        }
    };
    context.dispatch(&tokens)
}
