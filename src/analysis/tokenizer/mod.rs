//! Tokenizer implementations for text analysis.
//!
//! Tokenizers turn raw text into a stream of normalized word tokens. The same
//! tokenizer must be used when training a classifier and when querying it;
//! any divergence between the two corrupts the probability model.
//!
//! # Available Tokenizers
//!
//! - [`letter::LetterTokenizer`] - Maximal runs of letters, case-folded
//!
//! # Examples
//!
//! ```
//! use bayes_text::analysis::tokenizer::{self, Tokenizer};
//! use bayes_text::analysis::tokenizer::letter::LetterTokenizer;
//!
//! let tokenizer = LetterTokenizer::new();
//! let words = tokenizer.words("Hello, World!");
//! assert_eq!(words, vec!["hello", "world"]);
//!
//! // The free functions use the default Unicode letter tokenizer.
//! let set = tokenizer::to_word_set("b a b");
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
//! ```

use std::collections::BTreeSet;

use crate::analysis::token::{Token, TokenStream};

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a trained classifier holding a
/// tokenizer can be shared across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a lazy stream of normalized tokens.
    ///
    /// Tokenization never fails: empty or delimiter-only input yields an
    /// empty stream.
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Collect the token texts in order of appearance, duplicates included.
    fn words(&self, text: &str) -> Vec<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }

    /// Collect the distinct token texts.
    ///
    /// The set iterates in sorted order, which gives scoring a fixed,
    /// reproducible summation order.
    fn word_set(&self, text: &str) -> BTreeSet<String> {
        self.tokenize(text).map(|token| token.text).collect()
    }
}

pub mod letter;

pub use letter::{LetterTokenizer, Tokens};

/// Tokenize `text` with the default Unicode letter tokenizer.
pub fn tokenize(text: &str) -> Vec<Token> {
    LetterTokenizer::new().tokens(text).collect()
}

/// The distinct tokens of `text` under the default Unicode letter tokenizer.
pub fn to_word_set(text: &str) -> BTreeSet<String> {
    LetterTokenizer::new().word_set(text)
}
