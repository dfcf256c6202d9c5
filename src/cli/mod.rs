//! Non-interactive front end over the aggregation and forecast services.

pub mod commands;
pub mod output;
pub mod render;
mod shell;

pub use crate::errors::CliError;
pub use shell::{run_cli, run_script, CliMode, ShellContext, SCRIPT_ENV};
