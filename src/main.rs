use std::path::Path;

use anyhow::Result;
use clap::Parser;

use passcraft::cli::{handlers, Args, CliCommand};
use passcraft::core::Config;
use passcraft::generators::Wordlist;
use passcraft::logging;

fn main() -> Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(store) = &args.store {
        config.store_file = store.clone();
    }
    if let Some(wordlist) = &args.wordlist {
        config.wordlist_file = wordlist.clone();
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("Logging disabled: {}", e);
        for warning in &config.warnings {
            eprintln!("Warning: {}", warning);
        }
    } else {
        config.log_warnings();
    }
    log::debug!("Loaded config: {:?}", config);

    let store_path = config.store_file.as_path();

    match args.command {
        CliCommand::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            symbols,
            no_symbols,
            keyword,
            save,
        } => {
            let mut options = config.password_options();
            if let Some(length) = length {
                options.length = length;
            }
            options.classes = handlers::resolve_classes(
                options.classes,
                no_uppercase,
                no_lowercase,
                no_digits,
                symbols,
                no_symbols,
            );
            options.keyword = keyword;
            handlers::handle_generate_password(&options, save.as_deref(), store_path, args.json)
        }
        CliCommand::Passphrase { words, separator, no_number, save } => {
            let mut options = config.passphrase_options();
            if let Some(words) = words {
                options.word_count = words;
            }
            if let Some(separator) = separator {
                options.separator = separator;
            }
            if no_number {
                options.include_number = false;
            }
            let wordlist = Wordlist::load(&config.wordlist_file);
            handlers::handle_generate_passphrase(wordlist, &options, save.as_deref(), store_path, args.json)
        }
        CliCommand::Analyze { text } => handlers::handle_analyze(&text, args.json),
        CliCommand::Save { name, secret, kind } => handlers::handle_save(store_path, &name, &secret, kind),
        CliCommand::List => handlers::handle_list(store_path, args.json),
        CliCommand::Delete { index, yes } => handlers::handle_delete(store_path, index, yes),
        CliCommand::Clear { yes } => handlers::handle_clear(store_path, yes),
        CliCommand::Export { path, format } => handlers::handle_export(store_path, &path, format),
    }
}
