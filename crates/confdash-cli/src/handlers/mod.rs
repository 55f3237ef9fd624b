pub mod affiliation;
pub mod conferences;
pub mod init;
pub mod instance;
pub mod sessions;
pub mod stats;
pub mod years;

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Section title, bold when stdout is a terminal.
pub(crate) fn print_heading(text: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", text.bold());
    } else {
        println!("{}", text);
    }
}

/// Notice for an empty result, dimmed when stdout is a terminal.
pub(crate) fn print_empty(text: &str) {
    if std::io::stdout().is_terminal() {
        println!("{}", text.dimmed());
    } else {
        println!("{}", text);
    }
}

pub(crate) fn print_field(label: &str, value: Option<impl std::fmt::Display>) {
    if let Some(value) = value {
        println!("{:<12} {}", format!("{}:", label), value);
    }
}
