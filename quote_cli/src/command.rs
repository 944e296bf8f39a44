//! Shell commands and the line parser that produces them.
//!
//! A line is split into words (double quotes group words, `\` escapes the next
//! character) and the words are handed to `clap` as if they were a command line.
//! Quoted or escaped words are always values, even when they start with `-`.
use clap::{Parser, Subcommand};
use quote_store::{QuoteError, QuoteFields, QuoteId, Result};

/// One parsed input line.
#[derive(Debug, Parser)]
#[command(name = "quotes", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    /// The command to run.
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Show the quotes matching the active search (all quotes when none is set).
    #[command(visible_alias = "ls")]
    List,

    /// Add a new quote.
    Add {
        /// Quote text; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Author's name.
        #[arg(short, long)]
        author: Option<String>,
        /// Category, e.g. Motivation, Life or Happiness (any spelling of these is accepted).
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Edit a quote. Fields that are not given keep their current value.
    Edit {
        /// Id of the quote to edit.
        id: QuoteId,
        /// New quote text.
        #[arg(short, long)]
        text: Option<String>,
        /// New author.
        #[arg(short, long)]
        author: Option<String>,
        /// New category.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete a quote.
    #[command(visible_alias = "rm")]
    Delete {
        /// Id of the quote to delete.
        id: QuoteId,
    },

    /// Show a single quote.
    Show {
        /// Id of the quote to show.
        id: QuoteId,
    },

    /// Filter the list by text or author; without a query the filter is cleared.
    Search {
        /// Words to look for, ignoring case.
        #[arg(allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// List the known categories.
    Categories,

    /// Print the whole collection as JSON.
    Export,

    /// Leave the shell.
    #[command(visible_alias = "exit")]
    Quit,
}

impl ShellCommand {
    /// Strip the literal marker from every text value.
    fn unmark(self) -> Self {
        match self {
            ShellCommand::Add {
                text,
                author,
                category,
            } => ShellCommand::Add {
                text: text.into_iter().map(unmark).collect(),
                author: author.map(unmark),
                category: category.map(unmark),
            },
            ShellCommand::Edit {
                id,
                text,
                author,
                category,
            } => ShellCommand::Edit {
                id,
                text: text.map(unmark),
                author: author.map(unmark),
                category: category.map(unmark),
            },
            ShellCommand::Search { query } => ShellCommand::Search {
                query: query.into_iter().map(unmark).collect(),
            },
            other => other,
        }
    }
}

/// Prefix that hides a leading `-` of a literal word from `clap`.
const LITERAL_MARK: char = '\u{1}';

fn unmark(value: String) -> String {
    match value.strip_prefix(LITERAL_MARK) {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

/// Partial quote edit, overlaid on the current fields of a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldsPatch {
    /// Replacement text.
    pub text: Option<String>,
    /// Replacement author.
    pub author: Option<String>,
    /// Replacement category.
    pub category: Option<String>,
}

impl FieldsPatch {
    /// Apply the given fields on top of `current`.
    pub fn overlay(self, mut current: QuoteFields) -> QuoteFields {
        if let Some(text) = self.text {
            current.text = text;
        }
        if self.author.is_some() {
            current.author = self.author;
        }
        if self.category.is_some() {
            current.category = self.category;
        }
        current
    }
}

/// Outcome of parsing an input line.
#[derive(Debug)]
pub enum ParsedLine {
    /// Blank line or comment.
    Empty,
    /// A command to run.
    Command(ShellCommand),
    /// `clap` rejected the words, or help was requested; the message is ready to print.
    Usage(String),
}

/// Parse a single input line.
///
/// # Errors
/// Returns [`QuoteError::Format`] when a double quote is left open.
pub fn parse_line(line: &str) -> Result<ParsedLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Empty);
    }
    let args = split_words(trimmed)?.into_iter().map(Word::into_arg);
    match ShellLine::try_parse_from(args) {
        Ok(parsed) => Ok(ParsedLine::Command(parsed.command.unmark())),
        Err(e) => Ok(ParsedLine::Usage(e.render().to_string())),
    }
}

/// One word of an input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// The word with quotes and escapes resolved.
    pub text: String,
    /// Whether any part of the word was quoted or escaped.
    pub literal: bool,
}

impl Word {
    /// Argument handed to `clap`. Literal words starting with `-` are marked
    /// so they cannot be taken for flags.
    fn into_arg(self) -> String {
        if self.literal && self.text.starts_with('-') {
            format!("{}{}", LITERAL_MARK, self.text)
        } else {
            self.text
        }
    }
}

/// Split a line into words. Double quotes group words and may produce an
/// empty word; a backslash takes the next character literally.
pub fn split_words(line: &str) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut literal = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| QuoteError::Format("dangling escape at end of line".into()))?;
                current.push(escaped);
                in_word = true;
                literal = true;
            }
            '"' => {
                in_quotes = !in_quotes;
                in_word = true;
                literal = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_word {
                    words.push(Word {
                        text: std::mem::take(&mut current),
                        literal,
                    });
                    in_word = false;
                    literal = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quotes {
        return Err(QuoteError::Format("unterminated double quote".into()));
    }
    if in_word {
        words.push(Word {
            text: current,
            literal,
        });
    }
    Ok(words)
}
