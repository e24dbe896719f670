//! Text analysis module for bayes-text.
//!
//! This module turns raw text into the normalized word tokens the classifier
//! counts at training time and scores at query time.

pub mod char_class;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use char_class::*;
pub use token::*;
pub use tokenizer::*;
