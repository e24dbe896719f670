//! Naive Bayes text classification.
//!
//! This module provides a multinomial Naive Bayes classifier with Laplace
//! (add-one) smoothing over the word tokens produced by [`crate::analysis`].
//!
//! # Architecture
//!
//! - `TextClassifier` trait: Common interface for trained classifiers
//! - `NaiveBayesClassifier`: The model, its training and its estimation logic
//! - `SharedClassifier`: Lock-guarded handle for train-once, read-many use
//! - `TrainingSet`: Training data loaded from JSON, labelled by class name
//! - `ClassifierConfig`: Tokenizer selection
//!
//! # Example
//!
//! ```
//! use bayes_text::classifier::{NaiveBayesClassifier, TrainingSample};
//!
//! let mut classifier = NaiveBayesClassifier::new(["Spam", "Ham"]);
//! classifier.train(vec![
//!     TrainingSample::new("buy cheap watches", 0),
//!     TrainingSample::new("free money now", 0),
//!     TrainingSample::new("let's have dinner", 1),
//! ]);
//!
//! assert_eq!(classifier.classify("buy dinner now").unwrap(), "Spam");
//! ```

mod classifier;
mod config;
mod dataset;
mod naive_bayes;
mod shared;
mod types;

// Public exports
pub use classifier::TextClassifier;
pub use config::{ClassifierConfig, LetterSet};
pub use dataset::{LabeledText, TrainingSet};
pub use naive_bayes::NaiveBayesClassifier;
pub use shared::SharedClassifier;
pub use types::{ALPHA, ClassLabel, ClassScore, TrainingSample, WordFrequencyTable};
