//! Command line argument parsing for the bayes-text CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// bayes-text - Naive Bayes text classification
#[derive(Parser, Debug, Clone)]
#[command(name = "bayes-text")]
#[command(about = "Classify short texts with a multinomial Naive Bayes model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct BayesArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug, 4=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "BAYES_TEXT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl BayesArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Log filter directive matching the verbosity level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train the built-in spam/ham sample and classify its query
    Demo,

    /// Classify one or more texts
    Classify(ClassifyArgs),

    /// Show the per-class log scores of a text
    Scores(ScoresArgs),

    /// Show training set statistics
    Stats(StatsArgs),
}

/// Arguments for classifying texts
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Training set file (JSON)
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub texts: Vec<String>,
}

/// Arguments for showing scores
#[derive(Parser, Debug, Clone)]
pub struct ScoresArgs {
    /// Training set file (JSON)
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Text to score
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Arguments for training set statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Training set file (JSON)
    #[arg(value_name = "TRAINING_FILE")]
    pub training_file: PathBuf,

    /// Number of most frequent words to list per class
    #[arg(short, long, default_value = "0")]
    pub top: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify() {
        let args = BayesArgs::parse_from([
            "bayes-text",
            "-vv",
            "classify",
            "train.json",
            "buy now",
            "see you at dinner",
        ]);

        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.log_filter(), "info");
        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.training_file, PathBuf::from("train.json"));
                assert_eq!(classify.texts, vec!["buy now", "see you at dinner"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = BayesArgs::parse_from(["bayes-text", "-vvv", "-q", "demo"]);
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.log_filter(), "error");
    }

    #[test]
    fn test_parse_format_and_stats() {
        let args =
            BayesArgs::parse_from(["bayes-text", "-f", "json", "--pretty", "stats", "t.json", "--top", "3"]);
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
        assert!(matches!(args.command, Command::Stats(StatsArgs { top: 3, .. })));
    }

    #[test]
    fn test_classify_requires_text() {
        assert!(BayesArgs::try_parse_from(["bayes-text", "classify", "train.json"]).is_err());
    }
}
