//! Error types for the bayes-text library.
//!
//! All recoverable failures are represented by the [`ClassifierError`] enum.
//! Misuse of the core API (an out-of-range class index, an empty label set)
//! is a programming error and panics instead of producing one of these.
//!
//! # Examples
//!
//! ```
//! use bayes_text::classifier::NaiveBayesClassifier;
//! use bayes_text::error::ClassifierError;
//!
//! let classifier = NaiveBayesClassifier::new(vec!["Spam", "Ham"]);
//!
//! match classifier.classify("free money") {
//!     Err(ClassifierError::NotTrained) => println!("train first"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for bayes-text operations.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A read operation was called before `train`.
    #[error("Model not trained: call train before classifying")]
    NotTrained,

    /// I/O errors (reading training sets and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Training set content errors (unknown labels, empty label lists, ...)
    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result type alias for operations that may fail with ClassifierError.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Dataset(msg.into())
    }

    /// Check whether this error means the model has to be trained first.
    pub fn is_not_trained(&self) -> bool {
        matches!(self, ClassifierError::NotTrained)
    }
}
