// src/strength.rs
use crate::models::{CrackTime, StrengthCategory, StrengthReport};

/// Guesses per second assumed for the offline attacker.
pub const GUESSES_PER_SECOND: f64 = 1e9;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;

pub struct StrengthAnalyzer;

impl StrengthAnalyzer {
    pub fn new() -> Self {
        StrengthAnalyzer
    }

    pub fn analyze(&self, text: &str) -> StrengthReport {
        analyze_password_strength(text)
    }
}

impl Default for StrengthAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// Analyze password strength
//
// Empty input yields a zeroed report rather than an error.
pub fn analyze_password_strength(text: &str) -> StrengthReport {
    if text.is_empty() {
        return StrengthReport::empty();
    }

    let length = text.chars().count();
    let pool = pool_size(text);
    let entropy = entropy_bits(pool, length);
    let score = score(length, entropy);

    StrengthReport {
        length,
        pool_size: pool,
        entropy_bits: entropy,
        score,
        category: StrengthCategory::from_score(score),
        crack_time: crack_time(pool, length),
    }
}

/// Alphabet size inferred from the classes actually present in `text`.
pub fn pool_size(text: &str) -> u32 {
    let mut pool = 0;
    if text.chars().any(char::is_uppercase) {
        pool += 26;
    }
    if text.chars().any(char::is_lowercase) {
        pool += 26;
    }
    if text.chars().any(char::is_numeric) {
        pool += 10;
    }
    if text.chars().any(|c| !c.is_alphanumeric()) {
        pool += 32;
    }
    pool
}

/// `log2(pool^length)`, computed as `length * log2(pool)` to stay finite.
pub fn entropy_bits(pool: u32, length: usize) -> f64 {
    if pool == 0 {
        return 0.0;
    }
    length as f64 * f64::from(pool).log2()
}

pub fn score(length: usize, entropy_bits: f64) -> u8 {
    let length_bonus = length.saturating_mul(2).min(40) as f64;
    let complexity_bonus = (entropy_bits * 1.5).min(60.0);
    (length_bonus + complexity_bonus).clamp(0.0, 100.0) as u8
}

pub fn crack_time(pool: u32, length: usize) -> CrackTime {
    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    let combinations = f64::from(pool).powi(exponent);
    let seconds = combinations / GUESSES_PER_SECOND;

    if seconds < 1.0 {
        CrackTime::Instant
    } else if seconds < MINUTE {
        CrackTime::Seconds(seconds as u64)
    } else if seconds < HOUR {
        CrackTime::Minutes((seconds / MINUTE) as u64)
    } else if seconds < DAY {
        CrackTime::Hours((seconds / HOUR) as u64)
    } else if seconds < YEAR {
        CrackTime::Days((seconds / DAY) as u64)
    } else if seconds < CENTURY {
        CrackTime::Years((seconds / YEAR) as u64)
    } else {
        CrackTime::Centuries
    }
}
