//! Classifier configuration.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::char_class::{AsciiLetters, LatinCyrillicLetters, UnicodeLetters};
use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::error::Result;

/// Which characters count as letters when tokenizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterSet {
    /// Unicode alphabetic characters.
    #[default]
    Unicode,
    /// ASCII letters only.
    Ascii,
    /// Basic Latin plus the Russian Cyrillic alphabet.
    LatinCyrillic,
}

impl LetterSet {
    /// Build the letter tokenizer for this set.
    pub fn tokenizer(self) -> Arc<dyn Tokenizer> {
        match self {
            LetterSet::Unicode => Arc::new(LetterTokenizer::with_char_class(UnicodeLetters::new())),
            LetterSet::Ascii => Arc::new(LetterTokenizer::with_char_class(AsciiLetters::new())),
            LetterSet::LatinCyrillic => {
                Arc::new(LetterTokenizer::with_char_class(LatinCyrillicLetters::new()))
            }
        }
    }
}

/// Configuration for building a classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Letter classification used by the tokenizer.
    pub letters: LetterSet,
}

impl ClassifierConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
