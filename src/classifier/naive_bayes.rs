//! Multinomial Naive Bayes classifier with Laplace smoothing.
//!
//! Scores are base-10 log probabilities:
//!
//! ```text
//! score(c) = log10(samples(c) / samples)
//!          + Σ_w log10((ALPHA + count(c, w)) / (vocabulary + distinct_words(c)))
//! ```
//!
//! where `w` ranges over the distinct words of the query, in sorted order.

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashSet;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::analysis::tokenizer::{LetterTokenizer, Tokenizer};
use crate::classifier::classifier::TextClassifier;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::types::{ALPHA, ClassLabel, ClassScore, TrainingSample, WordFrequencyTable};
use crate::error::{ClassifierError, Result};

/// Naive Bayes text classifier.
///
/// Constructed untrained with its label set; [`train`](Self::train) is the
/// only mutator. Classification requires a trained model and otherwise
/// fails with [`ClassifierError::NotTrained`].
pub struct NaiveBayesClassifier {
    /// Tokenizer shared by training and classification.
    tokenizer: Arc<dyn Tokenizer>,
    /// Whether `train` has been called.
    trained: bool,
    /// Class label names, indexed by class.
    labels: Vec<String>,
    /// Word counts, indexed by class.
    word_frequencies: Vec<WordFrequencyTable>,
    /// Distinct words across all training samples.
    vocabulary_size: usize,
    /// Samples of the last training run, kept for class priors.
    samples: Vec<TrainingSample>,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("labels", &self.labels)
            .field("trained", &self.trained)
            .field("vocabulary_size", &self.vocabulary_size)
            .field("samples", &self.samples.len())
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl NaiveBayesClassifier {
    /// Create an untrained classifier using the default Unicode letter tokenizer.
    ///
    /// # Panics
    /// If `labels` is empty or contains a name twice.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tokenizer(labels, Arc::new(LetterTokenizer::new()))
    }

    /// Create an untrained classifier with a specific tokenizer.
    ///
    /// # Panics
    /// If `labels` is empty or contains a name twice.
    pub fn with_tokenizer<I, S>(labels: I, tokenizer: Arc<dyn Tokenizer>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        assert!(!labels.is_empty(), "a classifier needs at least one class label");

        let mut seen = AHashSet::with_capacity(labels.len());
        for label in &labels {
            assert!(seen.insert(label.as_str()), "duplicate class label {label:?}");
        }

        NaiveBayesClassifier {
            tokenizer,
            trained: false,
            word_frequencies: vec![WordFrequencyTable::new(); labels.len()],
            labels,
            vocabulary_size: 0,
            samples: Vec::new(),
        }
    }

    /// Create an untrained classifier whose tokenizer is chosen by `config`.
    pub fn from_config<I, S>(labels: I, config: &ClassifierConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tokenizer(labels, config.letters.tokenizer())
    }

    /// Train the model from scratch, discarding any previous training.
    ///
    /// # Panics
    /// If a sample's class index is not a valid index into the labels.
    pub fn train(&mut self, samples: Vec<TrainingSample>) {
        let classes = self.classes_count();
        let mut word_frequencies = vec![WordFrequencyTable::new(); classes];
        let mut vocabulary: AHashSet<String> = AHashSet::new();

        for sample in &samples {
            assert!(
                sample.class_index < classes,
                "training sample class index {} out of range for {} classes",
                sample.class_index,
                classes
            );

            let table = &mut word_frequencies[sample.class_index];
            for token in self.tokenizer.tokenize(&sample.text) {
                table.record(&token.text);
                vocabulary.insert(token.text);
            }
        }

        self.word_frequencies = word_frequencies;
        self.vocabulary_size = vocabulary.len();
        self.samples = samples;
        self.trained = true;

        debug!(
            samples = self.samples.len(),
            classes,
            vocabulary_size = self.vocabulary_size,
            "trained naive bayes model"
        );
    }

    /// Score one class against a set of query words.
    ///
    /// A class without training samples scores negative infinity.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    ///
    /// # Panics
    /// If `class_index` is out of range.
    pub fn estimate_log_score(
        &self,
        class_index: usize,
        query_words: &BTreeSet<String>,
    ) -> Result<f64> {
        if !self.trained {
            return Err(ClassifierError::NotTrained);
        }
        self.check_class_index(class_index);

        let label = &self.labels[class_index];
        let class_samples = self.samples_of_class_count(class_index);
        trace!(
            class = %label,
            class_samples,
            total_samples = self.samples.len(),
            "class prior"
        );
        if class_samples == 0 {
            return Ok(f64::NEG_INFINITY);
        }

        let mut score = (class_samples as f64 / self.samples.len() as f64).log10();

        // With an empty vocabulary no word carries any evidence.
        let table = &self.word_frequencies[class_index];
        let denominator = (self.vocabulary_size + table.len()) as f64;
        if denominator > 0.0 {
            for word in query_words {
                let occurrences = table.count(word);
                let term = ((ALPHA + occurrences as f64) / denominator).log10();
                trace!(class = %label, word = %word, occurrences, denominator, term, "word likelihood");
                score += term;
            }
        }

        debug!(class = %label, score, "class estimation");
        Ok(score)
    }

    /// Scores of every class for `text`, in class order.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    pub fn scores(&self, text: &str) -> Result<Vec<ClassScore>> {
        if !self.trained {
            return Err(ClassifierError::NotTrained);
        }

        let words = self.tokenizer.word_set(text);
        (0..self.classes_count())
            .map(|index| -> Result<ClassScore> {
                Ok(ClassScore {
                    index,
                    label: self.labels[index].clone(),
                    log_score: self.estimate_log_score(index, &words)?,
                })
            })
            .collect()
    }

    /// Index of the most probable class for `text`.
    ///
    /// Ties go to the lowest class index.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    pub fn class_of(&self, text: &str) -> Result<usize> {
        if !self.trained {
            return Err(ClassifierError::NotTrained);
        }

        let words = self.tokenizer.word_set(text);
        let mut best = (f64::NEG_INFINITY, 0);
        for class_index in 0..self.classes_count() {
            let estimation = self.estimate_log_score(class_index, &words)?;
            if estimation > best.0 {
                best = (estimation, class_index);
            }
        }

        Ok(best.1)
    }

    /// Label name of the most probable class for `text`.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    pub fn classify(&self, text: &str) -> Result<String> {
        let index = self.class_of(text)?;
        Ok(self.labels[index].clone())
    }

    /// Classify many texts in parallel against the same trained model.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    pub fn class_of_all<S>(&self, texts: &[S]) -> Result<Vec<usize>>
    where
        S: AsRef<str> + Sync,
    {
        if !self.trained {
            return Err(ClassifierError::NotTrained);
        }

        texts
            .par_iter()
            .map(|text| self.class_of(text.as_ref()))
            .collect()
    }

    /// Label names for many texts, classified in parallel.
    ///
    /// # Errors
    /// [`ClassifierError::NotTrained`] if the model has not been trained.
    pub fn classify_all<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        Ok(self
            .class_of_all(texts)?
            .into_iter()
            .map(|index| self.labels[index].clone())
            .collect())
    }

    /// Number of classes.
    pub fn classes_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of samples of the last training run.
    pub fn samples_count(&self) -> usize {
        self.samples.len()
    }

    /// Whether the model has been trained.
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Number of samples of the last training run that belong to `class_index`.
    ///
    /// # Panics
    /// If `class_index` is out of range.
    pub fn samples_of_class_count(&self, class_index: usize) -> usize {
        self.check_class_index(class_index);
        self.samples
            .iter()
            .filter(|sample| sample.class_index == class_index)
            .count()
    }

    /// All class labels in index order.
    pub fn labels(&self) -> Vec<ClassLabel> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, name)| ClassLabel {
                index,
                name: name.clone(),
            })
            .collect()
    }

    /// The label at `class_index`.
    ///
    /// # Panics
    /// If `class_index` is out of range.
    pub fn label(&self, class_index: usize) -> ClassLabel {
        self.check_class_index(class_index);
        ClassLabel {
            index: class_index,
            name: self.labels[class_index].clone(),
        }
    }

    /// Index of the label called `name`.
    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.labels.iter().position(|label| label == name)
    }

    /// Distinct words across all training samples.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Word counts of one class.
    ///
    /// # Panics
    /// If `class_index` is out of range.
    pub fn word_frequencies(&self, class_index: usize) -> &WordFrequencyTable {
        self.check_class_index(class_index);
        &self.word_frequencies[class_index]
    }

    /// Samples of the last training run.
    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    /// Get the tokenizer used by this classifier.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    fn check_class_index(&self, class_index: usize) {
        assert!(
            class_index < self.classes_count(),
            "class index {} out of range for {} classes",
            class_index,
            self.classes_count()
        );
    }
}

impl TextClassifier for NaiveBayesClassifier {
    fn class_of(&self, text: &str) -> Result<usize> {
        NaiveBayesClassifier::class_of(self, text)
    }

    fn classify(&self, text: &str) -> Result<String> {
        NaiveBayesClassifier::classify(self, text)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}
