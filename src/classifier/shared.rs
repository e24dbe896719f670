//! A classifier handle that can be shared between threads.
//!
//! Training takes the write lock and every read takes the read lock, so a
//! model can be trained once and then classified against from many threads
//! without callers arranging their own mutual exclusion.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::classifier::classifier::TextClassifier;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::types::{ClassScore, TrainingSample};
use crate::error::Result;

/// Cloneable, thread-safe handle to a [`NaiveBayesClassifier`].
#[derive(Debug, Clone)]
pub struct SharedClassifier {
    inner: Arc<RwLock<NaiveBayesClassifier>>,
}

impl SharedClassifier {
    /// Wrap a classifier.
    pub fn new(classifier: NaiveBayesClassifier) -> Self {
        SharedClassifier {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }

    /// Re-train the model. Blocks until in-flight reads have finished.
    pub fn train(&self, samples: Vec<TrainingSample>) {
        self.inner.write().train(samples);
    }

    /// Per-class scores for `text`.
    pub fn scores(&self, text: &str) -> Result<Vec<ClassScore>> {
        self.inner.read().scores(text)
    }

    /// Whether the model has been trained.
    pub fn is_trained(&self) -> bool {
        self.inner.read().is_trained()
    }

    /// Run `f` with shared access to the classifier.
    pub fn with_classifier<R>(&self, f: impl FnOnce(&NaiveBayesClassifier) -> R) -> R {
        f(&self.inner.read())
    }
}

impl TextClassifier for SharedClassifier {
    fn class_of(&self, text: &str) -> Result<usize> {
        self.inner.read().class_of(text)
    }

    fn classify(&self, text: &str) -> Result<String> {
        self.inner.read().classify(text)
    }

    fn name(&self) -> &str {
        "shared_naive_bayes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_classifier_across_threads() {
        let shared = SharedClassifier::new(NaiveBayesClassifier::new(["Spam", "Ham"]));
        assert!(shared.classify("free money").unwrap_err().is_not_trained());

        shared.train(vec![
            TrainingSample::new("buy cheap watches", 0),
            TrainingSample::new("free money now", 0),
            TrainingSample::new("let's have dinner", 1),
        ]);
        assert!(shared.is_trained());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let query = if i % 2 == 0 { "cheap money" } else { "have dinner" };
                    shared.classify(query).unwrap()
                })
            })
            .collect();

        let labels: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(labels, vec!["Spam", "Ham", "Spam", "Ham"]);
    }

    #[test]
    fn test_retrain_through_handle() {
        let shared = SharedClassifier::new(NaiveBayesClassifier::new(["A", "B"]));
        shared.train(vec![TrainingSample::new("alpha", 0)]);
        assert_eq!(shared.class_of("alpha").unwrap(), 0);

        let reader = shared.clone();
        shared.train(vec![TrainingSample::new("alpha", 1)]);
        assert_eq!(reader.class_of("alpha").unwrap(), 1);
        assert_eq!(reader.with_classifier(|c| c.samples_count()), 1);
        assert_eq!(reader.scores("alpha").unwrap().len(), 2);
    }
}
