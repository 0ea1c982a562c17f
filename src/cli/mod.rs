// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Saved passwords file (overrides SAVED_PASSWORDS_FILE)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Wordlist file, one word per line (overrides WORDLIST_FILE)
    #[arg(long, global = true)]
    pub wordlist: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,
}
