// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{CharacterClasses, PassphraseOptions, PasswordGenerationOptions, DEFAULT_SEPARATOR};

// Configuration for the generator and the saved-password store
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: PathBuf,
    pub store_file: PathBuf,
    pub wordlist_file: PathBuf,

    // Password Generation
    pub default_password_length: usize,
    pub default_include_symbols: bool,

    // Passphrase Generation
    pub default_word_count: usize,
    pub default_separator: char,
    pub default_include_number: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_data_dir(PathBuf::from("."))
    }
}

impl Config {
    fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            store_file: data_dir.join("saved_passwords.json"),
            wordlist_file: data_dir.join("wordlist.txt"),
            data_dir,

            default_password_length: 16,
            default_include_symbols: false,

            default_word_count: 4,
            default_separator: DEFAULT_SEPARATOR,
            default_include_number: true,

            log_level: LevelFilter::Info,
            log_file: None,

            warnings: Vec::new(),
        }
    }

    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();
        let data_dir = match lookup("PASSCRAFT_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => crate::utils::app_data_dir().unwrap_or_else(|| {
                warnings.push("Could not determine data directory, using the current directory".to_string());
                PathBuf::from(".")
            }),
        };
        let mut config = Config::with_data_dir(data_dir);
        config.warnings = warnings;

        // Storage
        if let Some(file) = lookup("SAVED_PASSWORDS_FILE") {
            config.store_file = PathBuf::from(file);
        }

        if let Some(file) = lookup("WORDLIST_FILE") {
            config.wordlist_file = PathBuf::from(file);
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => config.warnings.push(format!("Ignoring invalid DEFAULT_PASSWORD_LENGTH '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_SYMBOLS") {
            match val.parse() {
                Ok(include) => config.default_include_symbols = include,
                Err(_) => config.warnings.push(format!("Ignoring invalid DEFAULT_INCLUDE_SYMBOLS '{}'", val)),
            }
        }

        // Passphrase Generation
        if let Some(val) = lookup("DEFAULT_WORD_COUNT") {
            match val.parse() {
                Ok(count) => config.default_word_count = count,
                Err(_) => config.warnings.push(format!("Ignoring invalid DEFAULT_WORD_COUNT '{}'", val)),
            }
        }

        if let Some(val) = lookup("DEFAULT_SEPARATOR") {
            if let Some(separator) = val.chars().next() {
                config.default_separator = separator;
            }
        }

        if let Some(val) = lookup("DEFAULT_INCLUDE_NUMBER") {
            match val.parse() {
                Ok(include) => config.default_include_number = include,
                Err(_) => config.warnings.push(format!("Ignoring invalid DEFAULT_INCLUDE_NUMBER '{}'", val)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {
                    let warning = format!("Unknown log level '{}', keeping {}", level, config.log_level);
                    config.warnings.push(warning);
                }
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// Emit the warnings collected by [`Config::load_from`]. Call after the
    /// logger is installed.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    pub fn password_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.default_password_length,
            classes: CharacterClasses {
                symbols: self.default_include_symbols,
                ..CharacterClasses::default()
            },
            keyword: String::new(),
        }
    }

    pub fn passphrase_options(&self) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.default_word_count,
            separator: self.default_separator,
            include_number: self.default_include_number,
        }
    }
}
