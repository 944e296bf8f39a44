//! Interactive shell over a [`QuoteStore`].
//!
//! The shell keeps the store and the active search query. The home view is
//! always derived from both, so clearing the search simply shows the whole
//! collection again.
use std::io::{BufRead, Write};

use log::{debug, info, warn};
use quote_store::{Category, QuoteError, QuoteFields, QuoteStore, Result};

use crate::command::{FieldsPatch, ParsedLine, ShellCommand, parse_line};
use crate::view;

/// Whether the shell should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the shell.
    Quit,
}

/// Shell state: the quote store plus the active search query.
#[derive(Debug)]
pub struct Shell {
    store: QuoteStore,
    query: Option<String>,
}

impl Shell {
    /// Create a shell over `store` with no active search.
    pub fn new(store: QuoteStore) -> Self {
        Self { store, query: None }
    }

    /// The underlying store.
    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// The active search query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Read lines from `input` until EOF or `quit`, writing responses to `out`.
    ///
    /// Command failures are reported to `out` and do not stop the shell; only
    /// I/O errors on `input` or `out` are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line_result in input.lines() {
            let line = line_result?;
            if self.handle_line(&line, out)? == Flow::Quit {
                info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    /// Parse and run a single line.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let command = match parse_line(line) {
            Ok(ParsedLine::Command(command)) => command,
            Ok(ParsedLine::Empty) => return Ok(Flow::Continue),
            Ok(ParsedLine::Usage(message)) => {
                write!(out, "{}", message)?;
                return Ok(Flow::Continue);
            }
            Err(e) => {
                report(out, &e)?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command, out) {
            Ok(flow) => Ok(flow),
            Err(QuoteError::Io(e)) => Err(QuoteError::Io(e)),
            Err(e) => {
                report(out, &e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run a parsed command.
    pub fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<Flow> {
        debug!("Executing {:?}", command);
        match command {
            ShellCommand::List => self.write_home(out)?,
            ShellCommand::Add {
                text,
                author,
                category,
            } => {
                let fields = QuoteFields {
                    text: text.join(" "),
                    author,
                    category: category.map(canonical_category),
                };
                let quote = self.store.add(fields)?;
                notify(out, &format!("Quote added successfully! (#{})", quote.id))?;
            }
            ShellCommand::Edit {
                id,
                text,
                author,
                category,
            } => {
                let current = self
                    .store
                    .get(id)
                    .map(|quote| quote.fields())
                    .unwrap_or_default();
                let patch = FieldsPatch {
                    text,
                    author,
                    category: category.map(canonical_category),
                };
                let quote = self.store.update(id, patch.overlay(current))?;
                notify(out, &format!("Quote updated successfully! (#{})", quote.id))?;
            }
            ShellCommand::Delete { id } => {
                if self.store.delete(id).is_none() {
                    debug!("Quote {} was already gone", id);
                }
                notify(out, "Quote deleted successfully!")?;
            }
            ShellCommand::Show { id } => {
                let quote = self.store.get(id).ok_or(QuoteError::NotFound(id))?;
                view::write_card(out, quote)?;
            }
            ShellCommand::Search { query } => {
                let query = query.join(" ");
                self.query = if query.is_empty() { None } else { Some(query) };
                self.write_home(out)?;
            }
            ShellCommand::Categories => view::write_categories(out)?,
            ShellCommand::Export => writeln!(out, "{}", self.store.to_json()?)?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn write_home<W: Write>(&self, out: &mut W) -> Result<()> {
        let quotes = self.store.search(self.query());
        view::write_dashboard(out, &quotes, self.query())?;
        Ok(())
    }
}

/// Known categories take their listed spelling; anything else is kept as typed.
fn canonical_category(label: String) -> String {
    match Category::from_label(&label) {
        Some(category) => category.to_string(),
        None => label,
    }
}

fn notify<W: Write>(out: &mut W, message: &str) -> Result<()> {
    debug!("{}", message);
    writeln!(out, "{}", message)?;
    Ok(())
}

fn report<W: Write>(out: &mut W, error: &QuoteError) -> Result<()> {
    warn!("Command failed: {}", error);
    writeln!(out, "error: {}", error)?;
    Ok(())
}
