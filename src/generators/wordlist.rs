// src/generators/wordlist.rs
use std::fs;
use std::path::Path;

pub const BUILTIN_WORDS: [&str; 26] = [
    "apple", "banana", "cherry", "dragon", "elephant", "falcon",
    "giraffe", "hunter", "island", "jungle", "knight", "lizard",
    "mountain", "ninja", "octopus", "penguin", "queen", "rocket",
    "sunset", "tiger", "unicorn", "viking", "wizard", "xylophone",
    "yacht", "zebra",
];

/// Immutable word corpus for passphrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Trimmed, lowercased, non-empty entries. May end up empty.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Load from a one-word-per-line file, falling back to the built-in list.
    ///
    /// A missing, unreadable or blank file is never an error.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            log::debug!("No wordlist at {}, using built-in words", path.display());
            return Self::builtin();
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                let wordlist = Self::from_words(content.lines());
                if wordlist.is_empty() {
                    log::warn!("Wordlist {} has no usable words, using built-in words", path.display());
                    Self::builtin()
                } else {
                    log::info!("Loaded {} words from {}", wordlist.len(), path.display());
                    wordlist
                }
            }
            Err(e) => {
                log::warn!("Failed to read wordlist {}: {}, using built-in words", path.display(), e);
                Self::builtin()
            }
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::builtin()
    }
}
