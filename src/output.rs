use std::io::Write;

use anyhow::Result;
use colored::*;

use crate::registry::Registry;

/// Status message category; the terminal decides how each one looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warn,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warn,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn paint(&self) -> ColoredString {
        match self.kind {
            MessageKind::Info => self.text.cyan(),
            MessageKind::Warn => self.text.yellow(),
            MessageKind::Success => self.text.green(),
        }
    }
}

pub const NO_ANIMALS: &str = "No animals yet.";
pub const NO_FLYERS: &str = "No flyers here.";
pub const LISTING_HEADER: &str = "#  Type  Name                Age  Extra";

/// Either the lines to print or a status message explaining why there are none
pub type Report = std::result::Result<Vec<String>, Message>;

// Print a status message in its color
pub fn write_message<W: Write>(out: &mut W, message: &Message) -> Result<()> {
    writeln!(out, "{}", message.paint())?;
    Ok(())
}

// Print a report: a blank line then its lines, or just the message
pub fn write_report<W: Write>(out: &mut W, report: Report) -> Result<()> {
    match report {
        Ok(lines) => {
            writeln!(out)?;
            for line in lines {
                if line == LISTING_HEADER {
                    writeln!(out, "{}", line.bold())?;
                } else {
                    writeln!(out, "{}", line)?;
                }
            }
        }
        Err(message) => write_message(out, &message)?,
    }
    Ok(())
}

// Numbered table of every animal
pub fn listing(registry: &Registry) -> Report {
    if registry.is_empty() {
        return Err(Message::info(NO_ANIMALS));
    }

    let mut lines = vec![LISTING_HEADER.to_string(), "-".repeat(46)];
    for (i, animal) in registry.all().iter().enumerate() {
        lines.push(format!(
            "{:>2}  {:<5} {:<18} {:>3}  {}",
            i + 1,
            animal.kind().as_str(),
            animal.name(),
            animal.age(),
            animal.extra()
        ));
    }
    Ok(lines)
}

pub fn speeches(registry: &Registry) -> Report {
    if registry.is_empty() {
        return Err(Message::info(NO_ANIMALS));
    }

    Ok(registry
        .all()
        .iter()
        .map(|a| format!("{} the {}: {}", a.name(), a.kind(), a.speak()))
        .collect())
}

pub fn movements(registry: &Registry) -> Report {
    if registry.is_empty() {
        return Err(Message::info(NO_ANIMALS));
    }

    Ok(registry
        .all()
        .iter()
        .map(|a| format!("{} -> {}", a.name(), a.moves()))
        .collect())
}

pub fn flights(registry: &Registry) -> Report {
    let flyers = registry.flyers();
    if flyers.is_empty() {
        return Err(Message::info(NO_FLYERS));
    }

    Ok(flyers.iter().map(|f| f.fly()).collect())
}

// Output the registry as JSON
pub fn output_json<W: Write>(out: &mut W, registry: &Registry) -> Result<()> {
    let json = serde_json::to_string_pretty(registry)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
