use colored::Colorize;
use std::fmt;

use crate::core::status::StatusClass;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Section,
}

fn apply_style(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Info => text,
        MessageKind::Warning => format!("WARNING: {text}").bright_yellow().to_string(),
        MessageKind::Error => format!("ERROR: {text}").bright_red().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message);
    match kind {
        MessageKind::Warning | MessageKind::Error => eprintln!("{formatted}"),
        MessageKind::Info | MessageKind::Section => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints `message` in the colour of its status class.
pub fn status(class: StatusClass, message: impl fmt::Display) {
    let text = message.to_string();
    let styled = match class {
        StatusClass::Info => text.bright_green(),
        StatusClass::Warning => text.bright_yellow(),
        StatusClass::Error => text.bright_red(),
    };
    println!("{styled}");
}
