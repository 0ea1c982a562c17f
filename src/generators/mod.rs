// src/generators/mod.rs
use thiserror::Error;

use crate::crypto::CryptoError;

pub mod passphrase;
pub mod password;
pub mod wordlist;

pub use passphrase::PassphraseGenerator;
pub use password::PasswordGenerator;
pub use wordlist::Wordlist;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;
pub const MIN_WORD_COUNT: usize = 4;
pub const MAX_WORD_COUNT: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Random source error: {0}")]
    Random(#[from] CryptoError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
