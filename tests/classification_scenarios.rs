use std::sync::Arc;

use bayes_text::analysis::char_class::LatinCyrillicLetters;
use bayes_text::analysis::tokenizer::LetterTokenizer;
use bayes_text::error::{ClassifierError, Result};
use bayes_text::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn spam_ham_samples() -> Vec<TrainingSample> {
    vec![
        TrainingSample::new("buy cheap watches", 0),
        TrainingSample::new("free money now", 0),
        TrainingSample::new("let's have dinner", 1),
    ]
}

fn trained_spam_ham() -> NaiveBayesClassifier {
    let mut classifier = NaiveBayesClassifier::new(["Spam", "Ham"]);
    classifier.train(spam_ham_samples());
    classifier
}

fn score_of(classifier: &NaiveBayesClassifier, text: &str, class_index: usize) -> Result<f64> {
    Ok(classifier.scores(text)?[class_index].log_score)
}

#[test]
fn spam_ham_query_matches_pinned_scores() -> Result<()> {
    let classifier = trained_spam_ham();
    let scores = classifier.scores("buy dinner now")?;

    // Spam: 2/3 * 2/16 * 1/16 * 2/16, Ham: 1/3 * 1/14 * 2/14 * 1/14
    assert!((scores[0].log_score - -(1536f64.log10())).abs() < TOLERANCE);
    assert!((scores[1].log_score - -(4116f64.log10())).abs() < TOLERANCE);

    assert_eq!(classifier.class_of("buy dinner now")?, 0);
    assert_eq!(classifier.classify("buy dinner now")?, "Spam");
    Ok(())
}

#[test]
fn cyrillic_demo_classifies_as_spam() -> Result<()> {
    let (set, query) = TrainingSet::demo();

    let classifier = set.train(&ClassifierConfig::default())?;
    let scores = classifier.scores(query)?;
    assert!((scores[0].log_score - -(7203f64.log10())).abs() < TOLERANCE);
    assert!((scores[1].log_score - (4.0f64 / 43923.0).log10()).abs() < TOLERANCE);
    assert_eq!(classifier.classify(query)?, "Spam");

    let legacy = Arc::new(LetterTokenizer::with_char_class(LatinCyrillicLetters::new()));
    let mut classifier = NaiveBayesClassifier::with_tokenizer(set.labels.clone(), legacy);
    classifier.train(set.to_samples()?);
    assert_eq!(classifier.vocabulary_size(), 8);
    assert_eq!(classifier.classify(query)?, "Spam");
    Ok(())
}

#[test]
fn untrained_classifier_reports_invalid_state() {
    let classifier = NaiveBayesClassifier::new(["Spam", "Ham"]);

    match classifier.classify("free money") {
        Err(ClassifierError::NotTrained) => {}
        other => panic!("expected NotTrained, got {other:?}"),
    }
    assert!(!classifier.is_trained());
}

#[test]
fn training_is_deterministic() -> Result<()> {
    let first = trained_spam_ham();
    let second = trained_spam_ham();
    let mut retrained = trained_spam_ham();
    retrained.train(spam_ham_samples());

    for query in ["buy dinner now", "cheap cheap dinner", "", "nothing known here"] {
        let expected = first.scores(query)?;
        assert_eq!(second.scores(query)?, expected, "query {query:?}");
        assert_eq!(retrained.scores(query)?, expected, "query {query:?}");
        assert_eq!(second.class_of(query)?, first.class_of(query)?);
    }
    Ok(())
}

#[test]
fn more_samples_never_lower_a_class_relative_score() -> Result<()> {
    let queries = ["buy dinner", "unknown", "", "cheap cheap watches tonight"];
    let mut previous: Vec<f64> = vec![f64::NEG_INFINITY; queries.len()];

    for copies in 1..=5 {
        let mut samples: Vec<TrainingSample> = (0..copies)
            .map(|_| TrainingSample::new("buy cheap watches", 0))
            .collect();
        samples.push(TrainingSample::new("have dinner tonight", 1));

        let mut classifier = NaiveBayesClassifier::new(["A", "B"]);
        classifier.train(samples);

        for (slot, query) in queries.iter().enumerate() {
            let relative = score_of(&classifier, query, 0)? - score_of(&classifier, query, 1)?;
            assert!(
                relative >= previous[slot] - TOLERANCE,
                "query {query:?} dropped from {} to {relative} at {copies} copies",
                previous[slot]
            );
            previous[slot] = relative;
        }
    }
    Ok(())
}

#[test]
fn equal_scores_resolve_to_lower_index() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new(["First", "Second", "Third"]);
    classifier.train(vec![
        TrainingSample::new("red", 0),
        TrainingSample::new("green", 1),
        TrainingSample::new("blue", 2),
    ]);

    let scores = classifier.scores("yellow")?;
    assert_eq!(scores[0].log_score, scores[1].log_score);
    assert_eq!(scores[1].log_score, scores[2].log_score);
    assert_eq!(classifier.classify("yellow")?, "First");
    assert_eq!(classifier.classify("green or yellow")?, "Second");
    Ok(())
}

#[test]
fn class_without_samples_is_never_selected() -> Result<()> {
    let mut classifier = NaiveBayesClassifier::new(["Unused", "Spam", "Ham"]);
    classifier.train(vec![
        TrainingSample::new("buy cheap watches", 1),
        TrainingSample::new("let's have dinner", 2),
    ]);

    for query in ["", "unused", "buy", "dinner", "zzz qqq"] {
        assert_ne!(classifier.class_of(query)?, 0, "query {query:?}");
        assert_eq!(score_of(&classifier, query, 0)?, f64::NEG_INFINITY);
    }
    Ok(())
}

#[test]
fn shared_model_serves_parallel_batches() -> Result<()> {
    let classifier = trained_spam_ham();
    let texts: Vec<String> = (0..64)
        .map(|i| {
            if i % 2 == 0 {
                format!("cheap watches {i}")
            } else {
                format!("dinner {i}")
            }
        })
        .collect();

    let labels = classifier.classify_all(&texts)?;
    for (i, label) in labels.iter().enumerate() {
        let expected = if i % 2 == 0 { "Spam" } else { "Ham" };
        assert_eq!(label, expected);
    }

    let shared = SharedClassifier::new(classifier);
    assert_eq!(shared.classify("free money")?, "Spam");
    Ok(())
}
