//! Text classifier trait definition.

use crate::error::Result;

/// Text classifier trait.
///
/// Drivers (the CLI, services embedding the library) talk to a trained model
/// through this trait.
pub trait TextClassifier: Send + Sync {
    /// Predict the class index for a given text.
    ///
    /// # Errors
    /// `ClassifierError::NotTrained` if the model has not been trained.
    fn class_of(&self, text: &str) -> Result<usize>;

    /// Predict the class label name for a given text.
    ///
    /// # Errors
    /// `ClassifierError::NotTrained` if the model has not been trained.
    fn classify(&self, text: &str) -> Result<String>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
