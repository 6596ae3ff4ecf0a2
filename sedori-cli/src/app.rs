//! Interactive command loop.
//!
//! Reads commands from any [`BufRead`] and writes prompts and results to any
//! [`Write`], so the same loop drives a terminal or a scripted test.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use sedori_core::{ExportFormat, ProfitCalculator, WriterRegistry};
use tracing::{error, info, warn};

use crate::config::{FormDefaults, Settings};
use crate::display::{render_ledger, render_result};
use crate::form::{FormField, TransactionForm};
use crate::state::AppState;

const HELP: &str = "\
Commands:
  add                  enter a transaction, show its profit and save it
  list                 show every saved entry
  export [csv|xlsx]    save the entries as a spreadsheet
  help                 show this help
  quit                 leave (saved entries are discarded)
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add,
    List,
    Export(Option<String>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Command::Empty;
    };
    match name.to_ascii_lowercase().as_str() {
        "a" | "add" => Command::Add,
        "l" | "ls" | "list" => Command::List,
        "e" | "export" => Command::Export(words.next().map(str::to_string)),
        "h" | "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

/// The interactive calculator: one session, one ledger.
pub struct App<R, W> {
    input: R,
    output: W,
    state: AppState,
    writers: WriterRegistry,
    defaults: FormDefaults,
    clock: fn() -> NaiveDateTime,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(
        input: R,
        output: W,
        settings: &Settings,
    ) -> Self {
        Self {
            input,
            output,
            state: AppState::new(settings.export.clone()),
            writers: WriterRegistry::with_defaults(),
            defaults: settings.defaults.clone(),
            clock: || Local::now().naive_local(),
        }
    }

    /// Replaces the wall clock used to stamp new entries.
    pub fn with_clock(
        mut self,
        clock: fn() -> NaiveDateTime,
    ) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Sedori profit calculator. Type 'help' for commands."
        )?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match parse_command(&line) {
                Command::Add => {
                    if !self.add()? {
                        break;
                    }
                }
                Command::List => self.list()?,
                Command::Export(format) => self.export(format.as_deref())?,
                Command::Help => write!(self.output, "{HELP}")?,
                Command::Quit => break,
                Command::Empty => {}
                Command::Unknown(name) => {
                    writeln!(self.output, "Unknown command '{name}'. Type 'help'.")?
                }
            }
        }

        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    /// `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts every field, then computes, shows and saves the entry.
    /// Returns `false` if input ended part-way through.
    fn add(&mut self) -> Result<bool> {
        let mut form = TransactionForm::new(self.defaults.clone());

        for &field in FormField::all() {
            loop {
                let default = form.default_text(field);
                if default.is_empty() {
                    write!(self.output, "{}: ", field.label())?;
                } else {
                    write!(self.output, "{} [{default}]: ", field.label())?;
                }
                self.output.flush()?;

                let Some(line) = self.read_line()? else {
                    writeln!(self.output)?;
                    return Ok(false);
                };
                match form.set(field, &line) {
                    Ok(()) => break,
                    Err(reason) => writeln!(self.output, "  {reason}")?,
                }
            }
        }

        let input = match form.validate() {
            Ok(input) => input,
            Err(errors) => {
                for reason in errors {
                    writeln!(self.output, "  {reason}")?;
                }
                return Ok(true);
            }
        };

        let result = ProfitCalculator::compute(&input);
        write!(self.output, "\nResult\n{}", render_result(&result))?;

        let item = input.item_name.clone();
        let count = self.state.record(input, result, (self.clock)())?;
        info!(session = %self.state.session(), %item, entries = count, "entry saved");
        writeln!(self.output, "Saved ({count} entries).")?;

        Ok(true)
    }

    fn list(&mut self) -> Result<()> {
        let text = render_ledger(self.state.ledger()?.entries());
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// Exports the current ledger. Failures are reported, not propagated:
    /// the session and its entries carry on.
    fn export(
        &mut self,
        format: Option<&str>,
    ) -> Result<()> {
        let format = match format {
            Some(name) => match name.parse::<ExportFormat>() {
                Ok(format) => format,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    return Ok(());
                }
            },
            None => self.state.export_format,
        };

        let ledger = self.state.ledger()?;
        if ledger.is_empty() {
            writeln!(self.output, "Nothing to export yet. Use 'add' first.")?;
            return Ok(());
        }
        let entries = ledger.len();
        let table = ledger.export_table();

        let saved = self
            .writers
            .export(format, &table, &self.state.base_name)
            .and_then(|artifact| {
                let path = artifact.save_in(&self.state.output_dir)?;
                Ok((path, artifact.mime_type))
            });

        match saved {
            Ok((path, mime_type)) => writeln!(
                self.output,
                "Exported {entries} entries to {} ({mime_type}).",
                path.display()
            )?,
            Err(e) => {
                error!(%format, error = %e, "export failed");
                writeln!(self.output, "Export failed: {e}")?;
            }
        }
        Ok(())
    }
}

impl<R, W> Drop for App<R, W> {
    fn drop(&mut self) {
        match self.state.close() {
            Ok(ledger) if !ledger.is_empty() => {
                warn!(entries = ledger.len(), "session closed; unsaved entries discarded")
            }
            _ => {}
        }
    }
}
