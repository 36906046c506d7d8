//! Named recipes a host annotation tool can start a session from.

pub mod single_or_multiple_choice;

use std::path::PathBuf;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Example, RecipeComponents},
};

pub use single_or_multiple_choice::SingleOrMultipleChoice;

pub type BoxedExampleStream = Box<dyn Iterator<Item = AppResult<Example>> + Send>;

/// Positional arguments every recipe receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeArgs {
    /// Dataset that accepted and rejected answers are saved to.
    pub dataset: String,
    /// Newline-delimited JSON file of input examples.
    pub file_path: PathBuf,
}

impl RecipeArgs {
    pub fn new(dataset: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            file_path: file_path.into(),
        }
    }
}

pub trait Recipe: Send + Sync {
    fn name(&self) -> &'static str;

    fn build(&self, args: &RecipeArgs) -> AppResult<RecipeComponents<BoxedExampleStream>>;
}

/// Names of every registered recipe.
pub fn available() -> Vec<&'static str> {
    registry().iter().map(|recipe| recipe.name()).collect()
}

pub fn find(name: &str) -> AppResult<Box<dyn Recipe>> {
    registry()
        .into_iter()
        .find(|recipe| recipe.name() == name)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "recipe '{}' (available: {})",
                name,
                available().join(", ")
            ))
        })
}

fn registry() -> Vec<Box<dyn Recipe>> {
    vec![Box::new(SingleOrMultipleChoice)]
}
