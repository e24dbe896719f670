//! # bayes-text
//!
//! A multinomial Naive Bayes text classifier with Laplace smoothing.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable letter classification for tokenization (Unicode, ASCII, Latin/Cyrillic)
//! - Deterministic base-10 log-probability scoring
//! - Thread-safe sharing of trained models
//! - JSON training sets and a command line driver
//!
//! ## Example
//!
//! ```
//! use bayes_text::prelude::*;
//!
//! let mut classifier = NaiveBayesClassifier::new(["Spam", "Ham"]);
//! classifier.train(vec![
//!     TrainingSample::new("buy cheap watches", 0),
//!     TrainingSample::new("free money now", 0),
//!     TrainingSample::new("let's have dinner", 1),
//! ]);
//!
//! assert_eq!(classifier.class_of("what's for dinner")?, 1);
//! # Ok::<(), ClassifierError>(())
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::{CharClass, LetterTokenizer, Token, Tokenizer};
    pub use crate::classifier::{
        ClassScore, ClassifierConfig, NaiveBayesClassifier, SharedClassifier, TextClassifier,
        TrainingSample, TrainingSet,
    };
    pub use crate::error::{ClassifierError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
