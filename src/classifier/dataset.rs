//! Training sets loaded from JSON files.
//!
//! A training set names its classes and labels every sample by class name:
//!
//! ```json
//! {
//!   "labels": ["Spam", "Ham"],
//!   "samples": [
//!     { "text": "buy cheap watches", "label": "Spam" },
//!     { "text": "let's have dinner", "label": "Ham" }
//!   ]
//! }
//! ```
//!
//! File content is untrusted input, so unknown labels and malformed label
//! lists are reported as [`ClassifierError::Dataset`] instead of the panics
//! the in-process API uses for the same mistakes.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::config::ClassifierConfig;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::types::TrainingSample;
use crate::error::{ClassifierError, Result};

/// A sample labelled by class name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    /// Sample text.
    pub text: String,
    /// Class label name.
    pub label: String,
}

/// A complete training set: class labels plus labelled samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSet {
    /// Class label names, in class index order.
    pub labels: Vec<String>,
    /// Labelled samples.
    pub samples: Vec<LabeledText>,
}

impl TrainingSet {
    /// Load a training set from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a training set from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let set: TrainingSet = serde_json::from_str(content)?;
        Ok(set)
    }

    /// The spam/ham demonstration set together with its query text.
    pub fn demo() -> (Self, &'static str) {
        let sample = |text: &str, label: &str| LabeledText {
            text: text.to_string(),
            label: label.to_string(),
        };

        let set = TrainingSet {
            labels: vec!["Spam".to_string(), "Ham".to_string()],
            samples: vec![
                sample("Предоставляю услуги бухгалтера", "Spam"),
                sample("Спешите купить iPhone", "Spam"),
                sample("Надо купить молоко", "Ham"),
            ],
        };
        (set, "надо купить услуги iPhone")
    }

    /// Check the label list: non-empty and free of duplicates.
    pub fn validate_labels(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(ClassifierError::dataset("training set has no labels"));
        }

        let mut seen = AHashMap::with_capacity(self.labels.len());
        for (index, label) in self.labels.iter().enumerate() {
            if let Some(first) = seen.insert(label.as_str(), index) {
                return Err(ClassifierError::dataset(format!(
                    "label {label:?} appears twice (positions {first} and {index})"
                )));
            }
        }
        Ok(())
    }

    /// Resolve sample label names to class indices.
    pub fn to_samples(&self) -> Result<Vec<TrainingSample>> {
        self.validate_labels()?;

        let indices: AHashMap<&str, usize> = self
            .labels
            .iter()
            .enumerate()
            .map(|(index, label)| (label.as_str(), index))
            .collect();

        self.samples
            .iter()
            .enumerate()
            .map(|(position, sample)| match indices.get(sample.label.as_str()) {
                Some(&class_index) => Ok(TrainingSample::new(sample.text.clone(), class_index)),
                None => Err(ClassifierError::dataset(format!(
                    "sample {position} has unknown label {:?}",
                    sample.label
                ))),
            })
            .collect()
    }

    /// Build a classifier for these labels and train it on these samples.
    pub fn train(&self, config: &ClassifierConfig) -> Result<NaiveBayesClassifier> {
        let samples = self.to_samples()?;
        let mut classifier = NaiveBayesClassifier::from_config(self.labels.iter().cloned(), config);
        classifier.train(samples);
        Ok(classifier)
    }
}
