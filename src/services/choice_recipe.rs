use std::io::BufRead;
use std::iter::FusedIterator;
use std::path::Path;

use crate::{
    errors::AppResult,
    loaders::JsonlReader,
    models::domain::{derive_config, Example, RecipeComponents},
};

/// Lazily attaches the choice-view config to each example pulled from
/// `inner`. Order is preserved and upstream errors are forwarded as they are.
/// The stream owns its source, so once drained it cannot be replayed.
pub struct ExampleStream<I> {
    inner: I,
}

impl<I> ExampleStream<I>
where
    I: Iterator<Item = AppResult<Example>>,
{
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I> Iterator for ExampleStream<I>
where
    I: Iterator<Item = AppResult<Example>>,
{
    type Item = AppResult<Example>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|item| item.map(derive_config))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for ExampleStream<I> where I: FusedIterator<Item = AppResult<Example>> {}

pub type FileExampleStream = ExampleStream<JsonlReader<std::io::BufReader<std::fs::File>>>;

/// Shows one single- or multiple-choice question per task. The file is opened
/// here but examples are only read as the session consumes the stream.
pub fn single_or_multiple_choice(
    dataset: &str,
    file_path: impl AsRef<Path>,
) -> AppResult<RecipeComponents<FileExampleStream>> {
    let source = JsonlReader::open(file_path)?;
    Ok(choice_components(dataset, source))
}

/// Same as [`single_or_multiple_choice`] for examples from any reader.
pub fn single_or_multiple_choice_from_reader<R: BufRead>(
    dataset: &str,
    reader: R,
) -> RecipeComponents<ExampleStream<JsonlReader<R>>> {
    choice_components(dataset, JsonlReader::new(reader))
}

fn choice_components<I>(dataset: &str, source: I) -> RecipeComponents<ExampleStream<I>>
where
    I: Iterator<Item = AppResult<Example>>,
{
    RecipeComponents::choice(dataset, ExampleStream::new(source))
}
