//! Common types for text classification.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Laplace smoothing constant added to every word occurrence count.
pub const ALPHA: f64 = 1.0;

/// A class label: a dense 0-based index with a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassLabel {
    /// Position of the label in the classifier's label sequence.
    pub index: usize,
    /// Label name.
    pub name: String,
}

/// Training sample: a text and the index of the class it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Sample text.
    pub text: String,
    /// Class index into the classifier's labels.
    pub class_index: usize,
}

impl TrainingSample {
    /// Create a new training sample.
    pub fn new<S: Into<String>>(text: S, class_index: usize) -> Self {
        TrainingSample {
            text: text.into(),
            class_index,
        }
    }
}

/// Occurrence counts of normalized words within one class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: AHashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }
    }

    /// Number of occurrences of `word`, zero when never seen.
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of word occurrences.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// The log10 score of one class for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassScore {
    /// Class index.
    pub index: usize,
    /// Class label name.
    pub label: String,
    /// Prior plus smoothed log-likelihoods. Negative infinity for a class
    /// with no training samples.
    pub log_score: f64,
}
