//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::ClassScore;
use crate::cli::args::{BayesArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResult {
    pub query: String,
    pub label: String,
    pub scores: Vec<ClassScore>,
}

/// One classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct Prediction {
    pub text: String,
    pub label: String,
}

/// Result structure for classification.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub predictions: Vec<Prediction>,
}

/// Result structure for per-class scores.
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoresResult {
    pub text: String,
    pub words: Vec<String>,
    pub label: String,
    pub scores: Vec<ClassScore>,
}

/// Per-class training statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassStats {
    pub label: String,
    pub samples: usize,
    pub distinct_words: usize,
    pub total_words: usize,
    pub top_words: Vec<(String, usize)>,
}

/// Training set statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub classes: usize,
    pub samples: usize,
    pub vocabulary_size: usize,
    pub per_class: Vec<ClassStats>,
}

/// Results that know how to print themselves for people.
pub trait HumanOutput {
    /// Print the result to stdout.
    fn print_human(&self);
}

impl HumanOutput for DemoResult {
    fn print_human(&self) {
        println!("Query: {}", self.query);
        print_scores(&self.scores);
        println!("Answer: {}", self.label);
    }
}

impl HumanOutput for ClassificationResult {
    fn print_human(&self) {
        for prediction in &self.predictions {
            println!("{}\t{}", prediction.label, prediction.text);
        }
    }
}

impl HumanOutput for ScoresResult {
    fn print_human(&self) {
        println!("Text: {}", self.text);
        println!("Words: {}", self.words.join(", "));
        print_scores(&self.scores);
        println!("Answer: {}", self.label);
    }
}

impl HumanOutput for StatsResult {
    fn print_human(&self) {
        println!("Training Statistics:");
        println!("═══════════════════");
        println!("Classes: {}", self.classes);
        println!("Samples: {}", self.samples);
        println!("Vocabulary size: {}", self.vocabulary_size);

        for class in &self.per_class {
            println!();
            println!("Class: {}", class.label);
            println!("  Samples: {}", class.samples);
            println!("  Distinct words: {}", class.distinct_words);
            println!("  Total words: {}", class.total_words);
            if !class.top_words.is_empty() {
                let words = class
                    .top_words
                    .iter()
                    .map(|(word, count)| format!("{word} ({count})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  Top words: {words}");
            }
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &BayesArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 && !message.is_empty() {
                println!("{message}");
                println!();
            }
            result.print_human();
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
///
/// JSON has no infinities: scores of classes without samples become `null`.
fn output_json<T: Serialize>(result: &T, args: &BayesArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn print_scores(scores: &[ClassScore]) {
    println!("Scores:");
    for score in scores {
        println!("  [{}] {}: {}", score.index, score.label, format_log_score(score.log_score));
    }
}

/// Format a log10 score for display.
fn format_log_score(score: f64) -> String {
    if score == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{score:.6}")
    }
}
