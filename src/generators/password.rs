// src/generators/password.rs
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use super::{GeneratorError, Result, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::crypto::RandomSource;
use crate::models::{GeneratedCredential, PasswordGenerationOptions};

pub struct PasswordGenerator<R = OsRng> {
    random: RandomSource<R>,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        Self { random: RandomSource::new() }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_random(random: RandomSource<R>) -> Self {
        Self { random }
    }

    /// Random characters from the enabled classes with the keyword spliced in
    /// at a uniformly random offset.
    pub fn generate_password(&mut self, options: &PasswordGenerationOptions) -> Result<GeneratedCredential> {
        validate(options)?;

        let alphabet = options.classes.alphabet();
        let keyword_len = options.keyword.chars().count();
        let random_len = options.length - keyword_len;

        log::debug!(
            "Generating password: length={}, alphabet={}, keyword_len={}",
            options.length,
            alphabet.len(),
            keyword_len
        );

        let mut random_part = Vec::with_capacity(random_len);
        for _ in 0..random_len {
            random_part.push(*self.random.choose_one(&alphabet)?);
        }
        self.random.shuffle(&mut random_part);

        let insert_at = self.random.int_below(random_len + 1)?;
        let mut password = String::with_capacity(options.length * 4);
        password.extend(&random_part[..insert_at]);
        password.push_str(&options.keyword);
        password.extend(&random_part[insert_at..]);

        Ok(GeneratedCredential::password(password))
    }
}

fn validate(options: &PasswordGenerationOptions) -> Result<()> {
    if options.classes.is_empty() {
        return Err(GeneratorError::InvalidArgument(
            "At least one character type must be included".to_string(),
        ));
    }

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&options.length) {
        return Err(GeneratorError::InvalidArgument(format!(
            "Password length must be between {} and {} characters",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )));
    }

    let keyword_len = options.keyword.chars().count();
    if keyword_len > options.length {
        return Err(GeneratorError::InvalidArgument(format!(
            "Keyword ({} characters) is longer than the password length {}",
            keyword_len, options.length
        )));
    }

    Ok(())
}
