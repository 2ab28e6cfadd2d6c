//! Menu-driven read-eval-print loop over the registry

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::*;
use tracing::{debug, info};

use crate::input::{InputError, Prompter};
use crate::output::{self, Message};
use crate::registry::Registry;
use crate::types::Animal;

/// What the loop should do after a menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    registry: Registry,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: Registry, input: R, output: W) -> Self {
        Self {
            registry,
            prompter: Prompter::new(input, output),
        }
    }

    /// Give back the registry and the output sink
    #[cfg(test)]
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.prompter.into_output())
    }

    /// Run until the exit command or the end of input
    pub fn run(&mut self) -> Result<()> {
        info!(animals = self.registry.len(), "menu started");
        loop {
            self.show_menu()?;
            let flow = match self.prompter.read_line() {
                Ok(choice) => self.handle_choice(choice.trim()),
                Err(InputError::Closed) => Ok(Flow::Exit),
                Err(e) => Err(e.into()),
            };
            match flow {
                Ok(Flow::Continue) => continue,
                Ok(Flow::Exit) => break,
                Err(e) => match e.downcast_ref::<InputError>() {
                    Some(InputError::Closed) => break,
                    _ => return Err(e),
                },
            }
        }

        self.say(Message::info("Bye 👋"))?;
        info!(animals = self.registry.len(), "menu finished");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", "=== Animal Hierarchy ===".bold())?;
        writeln!(out, "1) Add animal")?;
        writeln!(out, "2) List animals")?;
        writeln!(out, "3) Make all speak")?;
        writeln!(out, "4) Show movements")?;
        writeln!(out, "5) Show flyers")?;
        writeln!(out, "6) Export as JSON")?;
        writeln!(out, "0) Exit")?;
        write!(out, "Choose: ")?;
        Ok(())
    }

    /// Dispatch a single menu choice
    pub fn handle_choice(&mut self, choice: &str) -> Result<Flow> {
        debug!(choice, "menu choice");
        match choice {
            "1" => self.add_animal()?,
            "2" => self.report(output::listing(&self.registry))?,
            "3" => self.report(output::speeches(&self.registry))?,
            "4" => self.report(output::movements(&self.registry))?,
            "5" => self.report(output::flights(&self.registry))?,
            "6" => output::output_json(self.prompter.output(), &self.registry)?,
            "0" => return Ok(Flow::Exit),
            _ => self.say(Message::warn("Invalid choice."))?,
        }
        Ok(Flow::Continue)
    }

    fn add_animal(&mut self) -> Result<()> {
        writeln!(self.prompter.output())?;
        let kind = self.prompter.ask("Choose type: 1) Dog  2) Cat  3) Bird: ")?;
        if !matches!(kind.as_str(), "1" | "2" | "3") {
            return self.say(Message::warn("Unknown type. Aborted."));
        }

        let name = self.prompter.read_non_empty("Name: ")?;
        let age = self.prompter.read_in_range::<u8>("Age (years): ", 0..=100)?;

        let animal = match kind.as_str() {
            "1" => Animal::dog(name, age, self.prompter.read_optional("Breed (optional): ")?),
            "2" => Animal::cat(name, age, self.prompter.read_yes_no("Indoor cat? (y/n): ")?),
            _ => Animal::bird(
                name,
                age,
                self.prompter.read_in_range::<u16>("Wingspan (cm): ", 5..=300)?,
            ),
        };

        self.registry.add(animal);
        self.say(Message::success("Added ✅"))
    }

    fn report(&mut self, report: output::Report) -> Result<()> {
        output::write_report(self.prompter.output(), report)
    }

    fn say(&mut self, message: Message) -> Result<()> {
        output::write_message(self.prompter.output(), &message)
    }
}
