use serde::Serialize;

use crate::constants::{CHOICE_VIEW_ID, GLOBAL_CSS};

/// Session-wide settings for the annotation view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecipeConfig {
    pub force_stream_order: bool,
    pub global_css: String,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        RecipeConfig {
            force_stream_order: true,
            global_css: GLOBAL_CSS.to_string(),
        }
    }
}

/// Everything an annotation session needs: where to save, which view to
/// render, the tasks to show and the view settings. The stream is consumed by
/// the session and is never serialized.
#[derive(Debug, Serialize)]
pub struct RecipeComponents<S> {
    pub dataset: String,
    pub view_id: String,
    #[serde(skip)]
    pub stream: S,
    pub config: RecipeConfig,
}

impl<S> RecipeComponents<S> {
    pub fn choice(dataset: &str, stream: S) -> Self {
        RecipeComponents {
            dataset: dataset.to_string(),
            view_id: CHOICE_VIEW_ID.to_string(),
            stream,
            config: RecipeConfig::default(),
        }
    }

    pub fn map_stream<T>(self, f: impl FnOnce(S) -> T) -> RecipeComponents<T> {
        RecipeComponents {
            dataset: self.dataset,
            view_id: self.view_id,
            stream: f(self.stream),
            config: self.config,
        }
    }

    /// Splits off the stream, leaving the serializable settings behind.
    pub fn into_parts(self) -> (S, RecipeComponents<()>) {
        let settings = RecipeComponents {
            dataset: self.dataset,
            view_id: self.view_id,
            stream: (),
            config: self.config,
        };
        (self.stream, settings)
    }
}
