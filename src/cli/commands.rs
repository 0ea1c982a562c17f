// src/cli/commands.rs
use std::path::PathBuf;

use clap::Subcommand;

use crate::models::CredentialKind;
use crate::store::ExportFormat;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Password {
        /// Password length (8-64)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out A-Z
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out a-z
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out 0-9
        #[arg(long)]
        no_digits: bool,

        /// Include !@#$%^&*
        #[arg(long, conflicts_with = "no_symbols")]
        symbols: bool,

        /// Leave out symbols even if enabled by default
        #[arg(long)]
        no_symbols: bool,

        /// Word embedded verbatim at a random position
        #[arg(long, short, default_value = "")]
        keyword: String,

        /// Save the result under this name
        #[arg(long)]
        save: Option<String>,
    },

    /// Generate a multi-word passphrase
    Passphrase {
        /// Number of words (4-8)
        #[arg(long, short)]
        words: Option<usize>,

        /// Single separator character
        #[arg(long, short)]
        separator: Option<char>,

        /// Do not append a two-digit number
        #[arg(long)]
        no_number: bool,

        /// Save the result under this name
        #[arg(long)]
        save: Option<String>,
    },

    /// Score an existing password
    Analyze {
        #[arg(required = true)]
        text: String,
    },

    /// Save a password under a name
    Save {
        #[arg(required = true)]
        name: String,

        #[arg(required = true)]
        secret: String,

        /// password or passphrase; inferred when omitted
        #[arg(long)]
        kind: Option<CredentialKind>,
    },

    /// List saved passwords
    List,

    /// Delete one saved password by index
    Delete {
        #[arg(required = true)]
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete all saved passwords
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Export saved passwords to JSON or CSV
    Export {
        #[arg(required = true)]
        path: PathBuf,

        /// json or csv; inferred from the file name when omitted
        #[arg(long)]
        format: Option<ExportFormat>,
    },
}
