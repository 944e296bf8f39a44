//! Quote shell: a line-oriented front end for an in-memory quote collection.
//!
//! The shell starts with the built-in starter quotes (or a JSON seed file, or
//! nothing), then reads commands line by line from stdin or a script file:
//! add, edit, delete, show, search, list, categories, export and quit.
//! Everything lives in memory and is gone when the process exits.
//!
//! Usage example (CLI):
//! ```bash
//! quote_cli --seed ./quotes.json
//! echo 'add "Stay hungry, stay foolish." --author "Steve Jobs"' | quote_cli
//! ```
//!
//! The seed file is a JSON array of `{ "text": ..., "author": ..., "category": ... }`
//! objects; `author` and `category` may be omitted. Set `RUST_LOG=debug` to see
//! every store operation.
#![warn(missing_docs)]
mod args;
mod command;
mod shell;
mod view;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use log::info;
use quote_store::{QuoteError, QuoteStore, Result};

use crate::args::Args;
use crate::shell::Shell;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let store = build_store(&args)?;
    info!("Quote store ready with {} quotes", store.len());
    let mut shell = Shell::new(store);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.script_path() {
        Some(path) => {
            info!("Running commands from {}", path.display());
            let file = File::open(&path)?;
            shell.run(BufReader::new(file), &mut out)?;
        }
        None => {
            info!("Reading commands from stdin. Type `help` for a list of commands.");
            shell.run(io::stdin().lock(), &mut out)?;
        }
    }

    info!("Shell stopped with {} quotes", shell.store().len());
    Ok(())
}

fn build_store(args: &Args) -> Result<QuoteStore> {
    if args.empty {
        return Ok(QuoteStore::new());
    }
    match args.seed_path() {
        Some(path) => {
            info!("Loading seed quotes from {}", path.display());
            let file = File::open(&path)?;
            QuoteStore::load_seed(BufReader::new(file))
        }
        None => Ok(QuoteStore::with_defaults()),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
