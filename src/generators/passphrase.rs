// src/generators/passphrase.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::{GeneratorError, Result, Wordlist, MAX_WORD_COUNT, MIN_WORD_COUNT};
use crate::crypto::RandomSource;
use crate::models::{GeneratedCredential, PassphraseOptions};
use crate::utils::capitalize;

pub struct PassphraseGenerator<R = OsRng> {
    wordlist: Wordlist,
    random: RandomSource<R>,
}

impl PassphraseGenerator<OsRng> {
    pub fn new(wordlist: Wordlist) -> Self {
        Self {
            wordlist,
            random: RandomSource::new(),
        }
    }
}

impl<R: RngCore + CryptoRng> PassphraseGenerator<R> {
    pub fn with_random(wordlist: Wordlist, random: RandomSource<R>) -> Self {
        Self { wordlist, random }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Capitalized words drawn with replacement, optionally followed by a
    /// number in `[10, 99]`, joined by the separator.
    pub fn generate_passphrase(&mut self, options: &PassphraseOptions) -> Result<GeneratedCredential> {
        if self.wordlist.is_empty() {
            return Err(GeneratorError::InvalidArgument("Wordlist is empty".to_string()));
        }

        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&options.word_count) {
            return Err(GeneratorError::InvalidArgument(format!(
                "Word count must be between {} and {}",
                MIN_WORD_COUNT, MAX_WORD_COUNT
            )));
        }

        log::debug!(
            "Generating passphrase: words={}, corpus={}, number={}",
            options.word_count,
            self.wordlist.len(),
            options.include_number
        );

        let mut tokens = Vec::with_capacity(options.word_count + 1);
        for _ in 0..options.word_count {
            let word = self.random.choose_one(self.wordlist.words())?;
            tokens.push(capitalize(word));
        }

        if options.include_number {
            let number = self.random.int_below(90)? + 10;
            tokens.push(number.to_string());
        }

        let separator = options.separator.to_string();
        Ok(GeneratedCredential::passphrase(tokens.join(separator.as_str())))
    }
}
