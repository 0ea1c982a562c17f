// src/models.rs
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*";

pub const DEFAULT_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Which character classes a generated password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn enabled(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.lowercase {
            classes.push(CharacterClass::Lowercase);
        }
        if self.digits {
            classes.push(CharacterClass::Digits);
        }
        if self.symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Concatenated alphabets in a fixed class order.
    pub fn alphabet(&self) -> Vec<char> {
        self.enabled()
            .into_iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }

    pub fn allows(&self, c: char) -> bool {
        self.enabled().into_iter().any(|class| class.contains(c))
    }
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: false,
        }
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub classes: CharacterClasses,
    pub keyword: String,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            classes: CharacterClasses::default(),
            keyword: String::new(),
        }
    }
}

// Passphrase generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassphraseOptions {
    pub word_count: usize,
    pub separator: char,
    pub include_number: bool,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: DEFAULT_SEPARATOR,
            include_number: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    Password,
    Passphrase,
}

impl CredentialKind {
    /// Anything containing a space or the default separator is treated as a passphrase.
    pub fn infer(secret: &str) -> Self {
        if secret.contains(' ') || secret.contains(DEFAULT_SEPARATOR) {
            CredentialKind::Passphrase
        } else {
            CredentialKind::Password
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::Password => "password",
            CredentialKind::Passphrase => "passphrase",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CredentialKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "password" => Ok(CredentialKind::Password),
            "passphrase" => Ok(CredentialKind::Passphrase),
            other => Err(format!("Unknown credential type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCredential {
    pub text: String,
    pub kind: CredentialKind,
}

impl GeneratedCredential {
    pub fn password(text: String) -> Self {
        Self { text, kind: CredentialKind::Password }
    }

    pub fn passphrase(text: String) -> Self {
        Self { text, kind: CredentialKind::Passphrase }
    }
}

/// A named credential persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub name: String,
    #[serde(rename = "password")]
    pub secret: String,
    #[serde(rename = "type")]
    pub kind: CredentialKind,
    #[serde(rename = "date", with = "minute_timestamp")]
    pub created_at: NaiveDateTime,
}

impl SavedRecord {
    pub fn date_string(&self) -> String {
        self.created_at.format(minute_timestamp::FORMAT).to_string()
    }
}

/// `YYYY-MM-DD HH:MM` (de)serialization for record dates.
pub mod minute_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(raw, FORMAT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthCategory {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
    ExtremelyStrong,
}

impl StrengthCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s < 20 => StrengthCategory::VeryWeak,
            s if s < 40 => StrengthCategory::Weak,
            s if s < 60 => StrengthCategory::Moderate,
            s if s < 80 => StrengthCategory::Strong,
            s if s < 95 => StrengthCategory::VeryStrong,
            _ => StrengthCategory::ExtremelyStrong,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthCategory::VeryWeak => "Very Weak",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Moderate => "Moderate",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
            StrengthCategory::ExtremelyStrong => "Extremely Strong",
        };
        f.write_str(label)
    }
}

/// Bucketed brute-force estimate. Counts are floored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackTime {
    Instant,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    Centuries,
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackTime::Instant => write!(f, "Instant"),
            CrackTime::Seconds(n) => write!(f, "{} seconds", n),
            CrackTime::Minutes(n) => write!(f, "{} minutes", n),
            CrackTime::Hours(n) => write!(f, "{} hours", n),
            CrackTime::Days(n) => write!(f, "{} days", n),
            CrackTime::Years(n) => write!(f, "{} years", n),
            CrackTime::Centuries => write!(f, "Centuries"),
        }
    }
}

impl Serialize for CrackTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub length: usize,
    pub pool_size: u32,
    pub entropy_bits: f64,
    pub score: u8,
    pub category: StrengthCategory,
    pub crack_time: CrackTime,
}

impl StrengthReport {
    pub fn empty() -> Self {
        Self {
            length: 0,
            pool_size: 0,
            entropy_bits: 0.0,
            score: 0,
            category: StrengthCategory::VeryWeak,
            crack_time: CrackTime::Instant,
        }
    }
}
