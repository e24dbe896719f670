//! Character classification for tokenization.
//!
//! A [`CharClass`] decides which characters belong to words and how a word
//! character is case-folded. The same instance is used for both questions, so
//! a tokenizer can never fold a character it would not also keep.
//!
//! # Available Classes
//!
//! - [`UnicodeLetters`] - Any Unicode alphabetic character (the default)
//! - [`AsciiLetters`] - `A-Z` and `a-z` only
//! - [`LatinCyrillicLetters`] - Basic Latin plus the Russian Cyrillic alphabet
//! - [`PredicateLetters`] - Any caller-supplied predicate
//!
//! # Examples
//!
//! ```
//! use bayes_text::analysis::char_class::{CharClass, LatinCyrillicLetters};
//!
//! let letters = LatinCyrillicLetters::new();
//! assert!(letters.is_word_char('Ж'));
//! assert_eq!(letters.normalize('Ж'), 'ж');
//! assert!(!letters.is_word_char('é'));
//! ```

use std::fmt;

/// Trait for the word-character predicate and case folding used by tokenizers.
pub trait CharClass: Send + Sync {
    /// Whether `ch` is part of a word. Every other character is a delimiter.
    fn is_word_char(&self, ch: char) -> bool;

    /// Case-fold a word character to its lowercase form.
    ///
    /// Only called for characters accepted by [`is_word_char`](Self::is_word_char).
    fn normalize(&self, ch: char) -> char;

    /// Get the name of this character class (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Lowercase `ch` when Unicode maps it to exactly one character.
///
/// Characters with multi-character lowercase forms (e.g. `İ`) are kept as is
/// so that one input character always yields one output character.
fn unicode_lowercase(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}

/// Unicode letters: every character with the `Alphabetic` property.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeLetters;

impl UnicodeLetters {
    /// Create a new Unicode letter class.
    pub fn new() -> Self {
        UnicodeLetters
    }
}

impl CharClass for UnicodeLetters {
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphabetic()
    }

    fn normalize(&self, ch: char) -> char {
        unicode_lowercase(ch)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

/// ASCII letters only. Digits, accents and other scripts are delimiters.
#[derive(Clone, Copy, Debug, Default)]
pub struct AsciiLetters;

impl AsciiLetters {
    /// Create a new ASCII letter class.
    pub fn new() -> Self {
        AsciiLetters
    }
}

impl CharClass for AsciiLetters {
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    fn normalize(&self, ch: char) -> char {
        ch.to_ascii_lowercase()
    }

    fn name(&self) -> &'static str {
        "ascii"
    }
}

fn is_cyrillic_upper(ch: char) -> bool {
    matches!(ch, '\u{0410}'..='\u{042F}')
}

fn is_cyrillic_lower(ch: char) -> bool {
    matches!(ch, '\u{0430}'..='\u{044F}')
}

/// Basic Latin letters plus the 64 Cyrillic letters `А..я` (U+0410..U+044F).
///
/// This is the two-range alphabet of legacy single-byte Russian text
/// (windows-1251) expressed over Unicode. `Ё`/`ё` sit outside both ranges
/// and are delimiters, exactly as they were in the 8-bit table.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatinCyrillicLetters;

impl LatinCyrillicLetters {
    /// Create a new Latin/Cyrillic letter class.
    pub fn new() -> Self {
        LatinCyrillicLetters
    }
}

impl CharClass for LatinCyrillicLetters {
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || is_cyrillic_upper(ch) || is_cyrillic_lower(ch)
    }

    fn normalize(&self, ch: char) -> char {
        if is_cyrillic_upper(ch) {
            // Upper and lower halves are 0x20 apart.
            return char::from_u32(ch as u32 + 0x20).unwrap_or(ch);
        }
        ch.to_ascii_lowercase()
    }

    fn name(&self) -> &'static str {
        "latin_cyrillic"
    }
}

/// A character class built from an arbitrary predicate.
///
/// Case folding follows the Unicode single-character lowercase mapping.
#[derive(Clone)]
pub struct PredicateLetters<F> {
    predicate: F,
}

impl<F> PredicateLetters<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    /// Create a character class from `predicate`.
    pub fn new(predicate: F) -> Self {
        PredicateLetters { predicate }
    }
}

impl<F> CharClass for PredicateLetters<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_word_char(&self, ch: char) -> bool {
        (self.predicate)(ch)
    }

    fn normalize(&self, ch: char) -> char {
        unicode_lowercase(ch)
    }

    fn name(&self) -> &'static str {
        "predicate"
    }
}

impl<F> fmt::Debug for PredicateLetters<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateLetters").finish_non_exhaustive()
    }
}
