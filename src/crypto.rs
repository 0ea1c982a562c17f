// src/crypto.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, RngCore};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Secure random primitives shared by the generators.
///
/// Backed by the operating system CSPRNG by default. Any other generator must
/// implement `CryptoRng`, so a plain seeded PRNG cannot be plugged in by accident.
pub struct RandomSource<R = OsRng> {
    rng: R,
}

impl RandomSource<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for RandomSource<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> RandomSource<R> {
    /// Wrap a caller-supplied cryptographic generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// `gen_range` rejects and resamples out-of-zone values, so there is no
    /// modulo bias.
    pub fn int_below(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(CryptoError::InvalidArgument(
                "Upper bound must be greater than zero".to_string(),
            ));
        }
        Ok(self.rng.gen_range(0..bound))
    }

    /// Pick one element uniformly.
    pub fn choose_one<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T> {
        if items.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "Cannot choose from an empty alphabet".to_string(),
            ));
        }
        let index = self.int_below(items.len())?;
        Ok(&items[index])
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
