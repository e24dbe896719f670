//! Letter tokenizer implementation.
//!
//! A token is a maximal run of consecutive word characters, as decided by the
//! tokenizer's [`CharClass`]; every other character is a delimiter. Tokens are
//! case-folded with the same character class.
//!
//! # Examples
//!
//! ```
//! use bayes_text::analysis::char_class::AsciiLetters;
//! use bayes_text::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::with_char_class(AsciiLetters::new());
//! let tokens: Vec<_> = tokenizer.tokens("let's  have DINNER").collect();
//!
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[0].text, "let");
//! assert_eq!(tokens[1].text, "s");
//! assert_eq!(tokens[3].text, "dinner");
//! assert_eq!(tokens[3].start_offset, 12);
//! ```

use std::iter::FusedIterator;

use crate::analysis::char_class::{CharClass, UnicodeLetters};
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text into runs of letters.
#[derive(Clone, Debug, Default)]
pub struct LetterTokenizer<C = UnicodeLetters> {
    char_class: C,
}

impl LetterTokenizer<UnicodeLetters> {
    /// Create a new letter tokenizer using Unicode letter classification.
    pub fn new() -> Self {
        LetterTokenizer {
            char_class: UnicodeLetters,
        }
    }
}

impl<C: CharClass> LetterTokenizer<C> {
    /// Create a new letter tokenizer with a custom character class.
    pub fn with_char_class(char_class: C) -> Self {
        LetterTokenizer { char_class }
    }

    /// Get the character class used by this tokenizer.
    pub fn char_class(&self) -> &C {
        &self.char_class
    }

    /// Iterate over the tokens of `text`.
    ///
    /// The iterator is lazy and cheap to clone; a clone restarts from the
    /// point where it was taken.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a, C> {
        Tokens {
            text,
            char_class: &self.char_class,
            cursor: 0,
            position: 0,
        }
    }
}

impl<C: CharClass> Tokenizer for LetterTokenizer<C> {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(self.tokens(text))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}

/// Lazy iterator over the tokens of one text.
///
/// Scans the input once, left to right.
#[derive(Debug)]
pub struct Tokens<'a, C> {
    text: &'a str,
    char_class: &'a C,
    cursor: usize,
    position: usize,
}

// Derived Clone would require `C: Clone`.
impl<C> Clone for Tokens<'_, C> {
    fn clone(&self) -> Self {
        Tokens {
            text: self.text,
            char_class: self.char_class,
            cursor: self.cursor,
            position: self.position,
        }
    }
}

impl<C: CharClass> Iterator for Tokens<'_, C> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let text = self.text;
        let Some((skip, _)) = text[self.cursor..]
            .char_indices()
            .find(|&(_, ch)| self.char_class.is_word_char(ch))
        else {
            self.cursor = text.len();
            return None;
        };

        let start = self.cursor + skip;
        let end = text[start..]
            .char_indices()
            .find(|&(_, ch)| !self.char_class.is_word_char(ch))
            .map_or(text.len(), |(offset, _)| start + offset);

        let word: String = text[start..end]
            .chars()
            .map(|ch| self.char_class.normalize(ch))
            .collect();

        let token = Token::with_offsets(word, self.position, start, end);
        self.cursor = end;
        self.position += 1;
        Some(token)
    }
}

impl<C: CharClass> FusedIterator for Tokens<'_, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_class::{AsciiLetters, LatinCyrillicLetters};

    #[test]
    fn test_letter_tokenizer() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokens("Hello, World!").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 5);

        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 12);
    }

    #[test]
    fn test_degenerate_input() {
        let tokenizer = LetterTokenizer::new();
        assert_eq!(tokenizer.tokens("").count(), 0);
        assert_eq!(tokenizer.tokens("  ,.;!? 123 --").count(), 0);
    }

    #[test]
    fn test_digits_and_apostrophes_are_delimiters() {
        let tokenizer = LetterTokenizer::new();
        assert_eq!(
            tokenizer.words("let's meet at 7pm"),
            vec!["let", "s", "meet", "at", "pm"]
        );
    }

    #[test]
    fn test_unicode_offsets() {
        let tokenizer = LetterTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokens("Надо купить").collect();

        assert_eq!(tokens[0].text, "надо");
        assert_eq!(tokens[0].end_offset, "Надо".len());
        assert_eq!(tokens[1].text, "купить");
        assert_eq!(tokens[1].start_offset, "Надо ".len());
    }

    #[test]
    fn test_char_class_decides_boundaries() {
        let ascii = LetterTokenizer::with_char_class(AsciiLetters::new());
        assert_eq!(ascii.words("café au lait"), vec!["caf", "au", "lait"]);

        let legacy = LetterTokenizer::with_char_class(LatinCyrillicLetters::new());
        assert_eq!(
            legacy.words("Спешите купить iPhone"),
            vec!["спешите", "купить", "iphone"]
        );
        // Ё lies outside the legacy alphabet.
        assert_eq!(legacy.words("ЕЁЖ"), vec!["е", "ж"]);
    }

    #[test]
    fn test_tokens_are_restartable() {
        let tokenizer = LetterTokenizer::new();
        let mut tokens = tokenizer.tokens("one two three");
        assert_eq!(tokens.next().map(|t| t.text), Some("one".to_string()));

        let rest: Vec<String> = tokens.clone().map(|t| t.text).collect();
        assert_eq!(rest, vec!["two", "three"]);
        assert_eq!(tokens.count(), 2);
        assert_eq!(tokenizer.tokens("one two three").count(), 3);
    }

    #[test]
    fn test_normalization_is_a_fixed_point() {
        let tokenizer = LetterTokenizer::new();
        for text in [
            "Buy CHEAP watches!!",
            "Предоставляю услуги бухгалтера",
            "Straße, ÉCOLE & İstanbul",
        ] {
            let once = tokenizer.words(text);
            let twice = tokenizer.words(&once.join(" "));
            assert_eq!(once, twice, "re-tokenizing changed {text:?}");
        }
    }

    #[test]
    fn test_word_set_collapses_duplicates() {
        let tokenizer = LetterTokenizer::new();
        let set = tokenizer.word_set("now Now NOW later");
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["later", "now"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(LetterTokenizer::new().name(), "letter");
    }
}
