//! Command implementations for the bayes-text CLI.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::classifier::{ClassifierConfig, NaiveBayesClassifier, TrainingSet};
use crate::cli::args::*;
use crate::cli::output::*;

/// Execute a CLI command.
pub fn execute_command(args: BayesArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Demo => run_demo(&config, &args),
        Command::Classify(classify_args) => classify_texts(classify_args, &config, &args),
        Command::Scores(scores_args) => show_scores(scores_args, &config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &config, &args),
    }
}

/// Load the classifier configuration, falling back to defaults.
fn load_config(args: &BayesArgs) -> Result<ClassifierConfig> {
    match &args.config {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(ClassifierConfig::default()),
    }
}

/// Load a training set and train a classifier on it.
fn train_from_file(path: &Path, config: &ClassifierConfig) -> Result<NaiveBayesClassifier> {
    let set = TrainingSet::load(path)
        .with_context(|| format!("failed to load training set {}", path.display()))?;
    let classifier = set
        .train(config)
        .with_context(|| format!("invalid training set {}", path.display()))?;

    info!(
        path = %path.display(),
        classes = classifier.classes_count(),
        samples = classifier.samples_count(),
        vocabulary_size = classifier.vocabulary_size(),
        "trained classifier"
    );
    Ok(classifier)
}

/// Train the built-in sample and classify its query.
fn run_demo(config: &ClassifierConfig, cli_args: &BayesArgs) -> Result<()> {
    let (set, query) = TrainingSet::demo();
    let classifier = set.train(config)?;

    let result = DemoResult {
        query: query.to_string(),
        label: classifier.classify(query)?,
        scores: classifier.scores(query)?,
    };
    output_result("Demo classification", &result, cli_args)?;
    Ok(())
}

/// Classify every given text.
fn classify_texts(args: &ClassifyArgs, config: &ClassifierConfig, cli_args: &BayesArgs) -> Result<()> {
    let classifier = train_from_file(&args.training_file, config)?;
    let labels = classifier.classify_all(&args.texts)?;

    let result = ClassificationResult {
        predictions: args
            .texts
            .iter()
            .zip(labels)
            .map(|(text, label)| Prediction {
                text: text.clone(),
                label,
            })
            .collect(),
    };
    output_result("Classification results", &result, cli_args)?;
    Ok(())
}

/// Show the per-class scores of one text.
fn show_scores(args: &ScoresArgs, config: &ClassifierConfig, cli_args: &BayesArgs) -> Result<()> {
    let classifier = train_from_file(&args.training_file, config)?;

    let result = ScoresResult {
        text: args.text.clone(),
        words: classifier.tokenizer().word_set(&args.text).into_iter().collect(),
        label: classifier.classify(&args.text)?,
        scores: classifier.scores(&args.text)?,
    };
    output_result("Class scores", &result, cli_args)?;
    Ok(())
}

/// Show statistics of a trained model.
fn show_stats(args: &StatsArgs, config: &ClassifierConfig, cli_args: &BayesArgs) -> Result<()> {
    let classifier = train_from_file(&args.training_file, config)?;
    let result = collect_stats(&classifier, args.top);
    output_result("Training statistics", &result, cli_args)?;
    Ok(())
}

/// Summarize a trained model, listing up to `top` most frequent words per class.
pub fn collect_stats(classifier: &NaiveBayesClassifier, top: usize) -> StatsResult {
    let per_class = classifier
        .labels()
        .into_iter()
        .map(|label| {
            let table = classifier.word_frequencies(label.index);
            let mut words: Vec<(String, usize)> = table
                .iter()
                .map(|(word, count)| (word.to_string(), count))
                .collect();
            words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            words.truncate(top);

            ClassStats {
                samples: classifier.samples_of_class_count(label.index),
                distinct_words: table.len(),
                total_words: table.total(),
                top_words: words,
                label: label.name,
            }
        })
        .collect();

    StatsResult {
        classes: classifier.classes_count(),
        samples: classifier.samples_count(),
        vocabulary_size: classifier.vocabulary_size(),
        per_class,
    }
}
